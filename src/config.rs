use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::web::{AllowedOrigins, DEFAULT_ALLOWED_ORIGINS};

pub const DEFAULT_PORT: u16 = 1234;

#[derive(Debug, Clone, Parser)]
#[command(name = "movies_api", version, about = "In-memory movie catalogue over HTTP")]
pub struct AppConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "MOVIES_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Seed file replacing the bundled catalogue
    #[arg(long, env = "MOVIES_DATA")]
    pub data: Option<PathBuf>,

    /// Comma-separated list of origins allowed to make cross-origin requests
    #[arg(
        long,
        env = "MOVIES_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values_t = DEFAULT_ALLOWED_ORIGINS.iter().map(|origin| origin.to_string())
    )]
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.to_socket_addrs()
            .with_context(|| format!("{addr} must be a valid host:port"))?
            .next()
            .with_context(|| format!("{addr} did not resolve to any address"))
    }

    pub fn allowed_origins(&self) -> AllowedOrigins {
        AllowedOrigins::new(&self.allowed_origins)
    }
}
