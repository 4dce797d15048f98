use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections.
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<()>;
}
