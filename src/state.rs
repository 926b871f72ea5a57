use crate::catalog::Catalog;
use crate::config::ServerConfig;
use crate::models::Wallet;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub pkg_dir: PathBuf,
    pub catalog: Arc<Catalog>,
    pub wallet: Arc<Mutex<Wallet>>,
}

impl AppState {
    pub fn new(config: &ServerConfig, catalog: Catalog, wallet: Wallet) -> Self {
        Self {
            data_path: config.data_path.clone(),
            pkg_dir: config.pkg_dir.clone(),
            catalog: Arc::new(catalog),
            wallet: Arc::new(Mutex::new(wallet)),
        }
    }
}
