use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_WORKBOOK_PATH: &str = "attached_assets/portfolio.xlsx";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_TTL_HOURS: u64 = 24;

#[derive(Debug, Clone)]
pub struct Config {
    pub workbook_path: PathBuf,
    pub dashboard_password: String,
    pub bind_addr: SocketAddr,
    pub static_dir: Option<PathBuf>,
    pub session_ttl: Duration,
}

impl Config {
    pub fn new() -> Result<Self> {
        // Load .env file first
        dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup so tests
    /// don't have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let dashboard_password = var("DASHBOARD_PASSWORD")
            .ok_or_else(|| anyhow::anyhow!("Failed to load DASHBOARD_PASSWORD: variable is unset or blank"))?;

        let workbook_path = var("WORKBOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKBOOK_PATH));

        let host: IpAddr = var("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .trim()
            .parse()
            .context("HOST must be an IP address")?;

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let ttl_hours = match var("SESSION_TTL_HOURS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("SESSION_TTL_HOURS must be a whole number of hours")?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };

        Ok(Config {
            workbook_path,
            dashboard_password,
            bind_addr: SocketAddr::new(host, port),
            static_dir: var("STATIC_DIR").map(PathBuf::from),
            session_ttl: Duration::from_secs(ttl_hours * 60 * 60),
        })
    }
}
