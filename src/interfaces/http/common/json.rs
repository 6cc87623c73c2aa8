//! JSON body extractor for Axum
//!
//! `JsonBody<T>` works like `axum::Json<T>` but decodes the object one
//! field at a time. Unparseable JSON is a 400. A value of the wrong type
//! is dropped from the payload and recorded under its own field name, so
//! the service reports it together with every other failed rule.

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use validator::ValidationErrors;

use super::error::ApiError;
use crate::application::dto::Payload;
use crate::shared::validations::field_error;

/// ```ignore
/// async fn handler(JsonBody(body): JsonBody<CreateContactRequest>) {
///     // `body` is deserialized but not yet validated
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: Payload,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Rejected {
                status: rejection.status(),
                message: format!("Invalid JSON: {}", rejection.body_text()),
            })?;
        decode(value).map(JsonBody)
    }
}

/// Decode `value` into `T`, setting aside wrongly typed fields.
///
/// Anything but an object is read as an empty object.
pub fn decode<T: Payload>(value: Value) -> Result<T, ApiError> {
    let mut fields = match value {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let mut mistyped = ValidationErrors::new();
    for &(name, message) in T::FIELDS {
        let Some(raw) = fields.get(name) else {
            continue;
        };
        let single = Value::Object(Map::from_iter([(name.to_string(), raw.clone())]));
        if serde_json::from_value::<T>(single).is_err() {
            fields.remove(name);
            mistyped.add(name, field_error("type", message));
        }
    }

    let mut payload: T =
        serde_json::from_value(Value::Object(fields)).map_err(|e| ApiError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: format!("Invalid JSON: {}", e),
        })?;
    *payload.mistyped_mut() = mistyped;
    Ok(payload)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct TestBody {
        name: Option<String>,
        age: Option<u32>,
        #[serde(skip)]
        mistyped: ValidationErrors,
    }

    impl Payload for TestBody {
        const FIELDS: &'static [(&'static str, &'static str)] = &[
            ("name", "The name field must be a string."),
            ("age", "The age field must be an integer."),
        ];

        fn mistyped_mut(&mut self) -> &mut ValidationErrors {
            &mut self.mistyped
        }
    }

    async fn handler(JsonBody(body): JsonBody<TestBody>) -> String {
        let mut fields: Vec<&str> = body.mistyped.field_errors().keys().copied().collect();
        fields.sort();
        format!("{:?} {:?} {}", body.name, body.age, fields.join(","))
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(body: &'static str) -> (StatusCode, String) {
        use tower::Service;
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let mut svc = app().into_service();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let (status, text) = send(r#"{"name": "Alice", "age": 30}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, r#"Some("Alice") Some(30) "#);
    }

    #[tokio::test]
    async fn invalid_json_returns_400() {
        let (status, _) = send("not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn wrong_type_is_set_aside_under_its_field() {
        let (status, text) = send(r#"{"name": "Alice", "age": "thirty"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, r#"Some("Alice") None age"#);
    }

    #[test]
    fn every_wrong_field_is_recorded() {
        let body: TestBody = decode(json!({"name": 7, "age": -1, "extra": [1]})).unwrap();
        assert_eq!(body.name, None);
        assert_eq!(body.age, None);
        let errors = body.mistyped.field_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors["age"][0].message.as_deref(),
            Some("The age field must be an integer.")
        );
    }

    #[test]
    fn non_object_reads_as_empty() {
        let body: TestBody = decode(json!([1, 2])).unwrap();
        assert_eq!(body.name, None);
        assert!(body.mistyped.is_empty());
    }
}
