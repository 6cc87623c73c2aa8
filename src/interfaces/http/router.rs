//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::dto::{
    CreateAppointmentRequest, CreateContactRequest, CreateServiceRequest,
    UpdateAppointmentRequest, UpdateContactRequest, UpdateServiceRequest,
};
use crate::application::{AppointmentService, ContactService, ServiceCatalog};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ErrorBody;
use crate::interfaces::http::modules::{
    appointments, contacts, health, metrics, request_id, services,
};

/// Unified state for every API route.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub catalog: Arc<ServiceCatalog>,
    pub appointments: Arc<AppointmentService>,
    pub contacts: Arc<ContactService>,
    pub started_at: Arc<Instant>,
}

impl ApiState {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            catalog: Arc::new(ServiceCatalog::new(repos.clone())),
            appointments: Arc::new(AppointmentService::new(repos.clone())),
            contacts: Arc::new(ContactService::new(repos.clone())),
            started_at: Arc::new(Instant::now()),
            repos,
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiState> for services::ServiceState {
    fn from_ref(s: &ApiState) -> Self {
        services::ServiceState {
            catalog: Arc::clone(&s.catalog),
        }
    }
}

impl FromRef<ApiState> for appointments::AppointmentState {
    fn from_ref(s: &ApiState) -> Self {
        appointments::AppointmentState {
            appointments: Arc::clone(&s.appointments),
        }
    }
}

impl FromRef<ApiState> for contacts::ContactState {
    fn from_ref(s: &ApiState) -> Self {
        contacts::ContactState {
            contacts: Arc::clone(&s.contacts),
        }
    }
}

impl FromRef<ApiState> for health::HealthState {
    fn from_ref(s: &ApiState) -> Self {
        health::HealthState {
            repos: Arc::clone(&s.repos),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Services
        services::list_services,
        services::list_public_services,
        services::create_service,
        services::get_service,
        services::update_service,
        services::delete_service,
        // Appointments
        appointments::list_appointments,
        appointments::create_appointment,
        appointments::book_appointment,
        appointments::get_appointment,
        appointments::update_appointment,
        appointments::delete_appointment,
        // Contacts
        contacts::list_contacts,
        contacts::create_contact,
        contacts::send_contact,
        contacts::get_contact,
        contacts::update_contact,
        contacts::delete_contact,
    ),
    components(
        schemas(
            ErrorBody,
            health::HealthResponse,
            health::ComponentHealth,
            services::ServiceResponse,
            CreateServiceRequest,
            UpdateServiceRequest,
            appointments::AppointmentResponse,
            CreateAppointmentRequest,
            UpdateAppointmentRequest,
            contacts::ContactResponse,
            CreateContactRequest,
            UpdateContactRequest,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Services", description = "Clinic service catalogue"),
        (name = "Appointments", description = "Appointment booking and management"),
        (name = "Contacts", description = "Contact form inbox"),
    ),
    info(
        title = "Clinic Site API",
        version = "1.0.0",
        description = "REST API behind the clinic website: services, appointments and contact messages",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is mounted only when a Prometheus handle is supplied.
pub fn create_api_router(state: ApiState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let service_routes = Router::new()
        .route("/", get(services::list_services).post(services::create_service))
        .route("/public", get(services::list_public_services))
        .route(
            "/{id}",
            get(services::get_service)
                .put(services::update_service)
                .patch(services::update_service)
                .delete(services::delete_service),
        );

    let appointment_routes = Router::new()
        .route(
            "/",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route("/book", post(appointments::book_appointment))
        .route(
            "/{id}",
            get(appointments::get_appointment)
                .put(appointments::update_appointment)
                .patch(appointments::update_appointment)
                .delete(appointments::delete_appointment),
        );

    let contact_routes = Router::new()
        .route("/", get(contacts::list_contacts).post(contacts::create_contact))
        .route("/send", post(contacts::send_contact))
        .route(
            "/{id}",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .patch(contacts::update_contact)
                .delete(contacts::delete_contact),
        );

    // CORS: the public site is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/services", service_routes)
        .nest("/api/v1/appointments", appointment_routes)
        .nest("/api/v1/contacts", contact_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(handle) = metrics_handle {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(metrics::MetricsState { handle }),
        );
    }

    router
        .route_layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
}

// ── Tests ──────────────────────────────────────────────────────
