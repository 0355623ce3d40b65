use std::sync::Arc;
use chrono::Duration;
use tokio::sync::RwLock;
use busline_core::TripProvider;
use busline_order::SessionManager;
use busline_store::app_config::{BusinessRules, Config};

#[derive(Clone)]
pub struct AppState {
    pub trips: Arc<dyn TripProvider>,
    pub sessions: Arc<RwLock<SessionManager>>,
    pub business_rules: BusinessRules,
    pub cities: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(trips: Arc<dyn TripProvider>, config: &Config) -> Self {
        Self {
            trips,
            sessions: Arc::new(RwLock::new(SessionManager::with_idle_timeout(
                Duration::seconds(config.business_rules.session_idle_seconds as i64),
            ))),
            business_rules: config.business_rules.clone(),
            cities: Arc::new(config.catalog.cities.clone()),
        }
    }
}
