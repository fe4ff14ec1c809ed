use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Public URL prefix uploaded images are served under.
pub const UPLOADS_PREFIX: &str = "uploads";

/// Process configuration, read from the environment (after `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub upload_dir: PathBuf,
    /// Browser origin allowed by CORS.
    pub client_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("BOOKMART_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .context("PORT must be a port number")?;
        let db_path = std::env::var("BOOKMART_DB_PATH")
            .unwrap_or_else(|_| "bookmart.db".into())
            .into();
        let upload_dir = std::env::var("BOOKMART_UPLOAD_DIR")
            .unwrap_or_else(|_| UPLOADS_PREFIX.into())
            .into();
        let client_url =
            std::env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:5173".into());

        Ok(Self {
            host,
            port,
            db_path,
            upload_dir,
            client_url,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}
