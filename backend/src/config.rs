use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub environment: String,
    pub cert_store_dir: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .trim_start_matches(':')
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid PORT value"))?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let cert_store_dir =
            PathBuf::from(env::var("CERT_STORE_DIR").unwrap_or_else(|_| "./certs".to_string()));

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Config {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            environment,
            cert_store_dir,
            allowed_origins,
        })
    }
}
