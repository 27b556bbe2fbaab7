use std::path::PathBuf;

use serde::Deserialize;

use crate::portal::Portal;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

#[derive(Default)]
pub struct AppState {
    pub storage_dir: Option<PathBuf>,
    pub portal: Option<Portal>,
}
