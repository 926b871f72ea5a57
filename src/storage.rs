use crate::errors::AppError;
use crate::models::Wallet;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

pub async fn load_wallet(path: &Path) -> Wallet {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(wallet) => wallet,
            Err(err) => {
                error!("failed to parse wallet file: {err}");
                Wallet::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("no wallet at {}, starting fresh", path.display());
            Wallet::default()
        }
        Err(err) => {
            error!("failed to read wallet file: {err}");
            Wallet::default()
        }
    }
}

pub async fn persist_wallet(path: &Path, wallet: &Wallet) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(wallet).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
