use std::{env, net::SocketAddr, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/shop.json";
const DEFAULT_PKG_DIR: &str = "pkg";

/// Settings read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub data_path: PathBuf,
    /// Directory holding the wasm-pack output served under `/pkg`.
    pub pkg_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_path = env::var("SHOP_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
        let pkg_dir = env::var("SHOP_PKG_DIR").unwrap_or_else(|_| DEFAULT_PKG_DIR.to_string());

        Self {
            port,
            data_path: PathBuf::from(data_path),
            pkg_dir: PathBuf::from(pkg_dir),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
