pub mod app_config;
pub mod mock_repo;

pub use app_config::Config;
pub use mock_repo::MockTripProvider;
