//! Genetic-algorithm search for high-reward routes over a fixed map of
//! ten areas with asymmetric movement rewards and domain ordering
//! constraints.

pub mod config;
pub mod engine;
pub mod error;
pub mod sweep;

pub use config::{AppConfig, ConfigManager, EvolutionConfig, SweepConfig};
pub use engine::{EvolutionEngine, RewardMatrix, Route, RunResult};
pub use error::{GeorouteError, Result};
