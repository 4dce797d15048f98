pub mod evolution;
pub mod manager;
pub mod sweep;
pub mod traits;

pub use evolution::EvolutionConfig;
pub use manager::{AppConfig, ConfigManager};
pub use sweep::SweepConfig;
pub use traits::ConfigSection;
