//! Provider acquisition configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directories the harness searches for provider plugins, in order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}
