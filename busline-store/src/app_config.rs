use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use busline_catalog::DEFAULT_SEAT_COLUMNS;
use busline_core::search::default_cities;
use busline_order::DEFAULT_IDLE_SECONDS;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Display symbol per ISO currency code, e.g. "LKR" => "Rs."
    #[serde(default = "default_currency_symbols")]
    pub currency_symbols: HashMap<String, String>,
    #[serde(default = "default_session_idle_seconds")]
    pub session_idle_seconds: u64,
    #[serde(default = "default_seat_columns")]
    pub seat_columns: u32,
    #[serde(default = "default_seat_options")]
    pub registration_seat_options: Vec<u32>,
}

impl BusinessRules {
    /// Symbol for a trip's currency code; unknown codes are shown as-is.
    pub fn symbol_for<'a>(&'a self, currency: &'a str) -> &'a str {
        // Key case depends on the config source, so match loosely
        self.currency_symbols
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(currency))
            .map(|(_, symbol)| symbol.as_str())
            .unwrap_or(currency)
    }
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            currency_symbols: default_currency_symbols(),
            session_idle_seconds: default_session_idle_seconds(),
            seat_columns: default_seat_columns(),
            registration_seat_options: default_seat_options(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { cities: default_cities() }
    }
}

fn default_port() -> u16 { 8080 }
fn default_currency_symbols() -> HashMap<String, String> {
    HashMap::from([
        ("LKR".to_string(), "Rs.".to_string()),
        ("BDT".to_string(), "৳".to_string()),
    ])
}
fn default_session_idle_seconds() -> u64 { DEFAULT_IDLE_SECONDS as u64 }
fn default_seat_columns() -> u32 { DEFAULT_SEAT_COLUMNS }
fn default_seat_options() -> Vec<u32> { vec![30, 40, 50] }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every key has a default, so all files are optional
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `BUSLINE_SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("BUSLINE").separator("__"))
            .build()?;

        tracing::debug!("Configuration loaded for run mode {}", run_mode);
        s.try_deserialize()
    }
}
