use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The available token store backends, differentiated by a "type" tag in
/// the YAML.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
#[serde(tag = "type")]
pub enum StoreConfig {
    #[serde(rename = "file")]
    File(FileStoreConfig),
    /// No persistence; the session ends with the process.
    #[serde(rename = "memory")]
    Memory,
}

#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct FileStoreConfig {
    /// Where the token document is written.
    pub path: PathBuf,
}
