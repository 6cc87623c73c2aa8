//! Service domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Clinic service offered for booking
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Symbolic icon name used by the frontend (e.g. "heart", "flask")
    pub icon: Option<String>,
    /// Price with two decimal places
    pub price: Option<Decimal>,
    /// Duration in minutes
    pub duration: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    /// Price rendered with exactly two decimals, e.g. `"200.00"`.
    pub fn formatted_price(&self) -> Option<String> {
        self.price.map(|p| format!("{:.2}", p.round_dp(2)))
    }
}

/// Fields required to insert a service; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub price: Option<Decimal>,
    pub duration: Option<i32>,
    pub active: bool,
}

impl NewService {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: None,
            price: None,
            duration: None,
            active: true,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_duration(mut self, minutes: i32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// The catalogue installed on first start when the services table is empty.
pub fn default_catalogue() -> Vec<NewService> {
    vec![
        NewService::new(
            "Consulta Geral",
            "Consulta médica completa com exame físico e avaliação geral do estado de saúde.",
        )
        .with_icon("stethoscope")
        .with_price(Decimal::new(15000, 2))
        .with_duration(60),
        NewService::new(
            "Cardiologia",
            "Consulta especializada em cardiologia com eletrocardiograma incluído.",
        )
        .with_icon("heart")
        .with_price(Decimal::new(20000, 2))
        .with_duration(90),
        NewService::new(
            "Dermatologia",
            "Consulta dermatológica para diagnóstico e tratamento de problemas de pele.",
        )
        .with_icon("user-md")
        .with_price(Decimal::new(18000, 2))
        .with_duration(45),
        NewService::new(
            "Ortopedia",
            "Consulta ortopédica para problemas ósseos, musculares e articulares.",
        )
        .with_icon("bone")
        .with_price(Decimal::new(22000, 2))
        .with_duration(60),
        NewService::new(
            "Exames Laboratoriais",
            "Ampla gama de exames laboratoriais com resultados rápidos e precisos.",
        )
        .with_icon("flask")
        .with_price(Decimal::new(8000, 2))
        .with_duration(30),
        NewService::new(
            "Radiologia",
            "Exames de imagem incluindo raio-X, ultrassom e tomografia.",
        )
        .with_icon("x-ray")
        .with_price(Decimal::new(12000, 2))
        .with_duration(30),
    ]
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_service(price: Option<Decimal>) -> Service {
        Service {
            id: 1,
            name: "Cardiologia".into(),
            description: "ECG included".into(),
            icon: Some("heart".into()),
            price,
            duration: Some(90),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn formatted_price_has_two_decimals() {
        assert_eq!(
            sample_service(Some(Decimal::new(200, 0))).formatted_price(),
            Some("200.00".to_string())
        );
        assert_eq!(
            sample_service(Some(Decimal::new(1995, 1))).formatted_price(),
            Some("199.50".to_string())
        );
        assert_eq!(sample_service(None).formatted_price(), None);
    }

    #[test]
    fn new_service_defaults_to_active() {
        let s = NewService::new("Radiologia", "X-ray");
        assert!(s.active);
        assert!(s.icon.is_none());
        assert!(!s.inactive().active);
    }

    #[test]
    fn default_catalogue_is_complete_and_active() {
        let catalogue = default_catalogue();
        assert_eq!(catalogue.len(), 6);
        assert!(catalogue.iter().all(|s| s.active));
        assert!(catalogue
            .iter()
            .all(|s| s.price.is_some() && s.duration.is_some() && s.icon.is_some()));
        let cardio = catalogue.iter().find(|s| s.name == "Cardiologia").unwrap();
        assert_eq!(cardio.price, Some(Decimal::new(20000, 2)));
        assert_eq!(cardio.duration, Some(90));
    }
}
