use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use travelmap_core::DEFAULT_DATA_FILE;

/// Server settings. A flag beats the environment, which beats the default.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "travelmap-server",
    version,
    about = "Serve a travel itinerary to the map front end"
)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "LISTEN_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Directory holding the front end's static assets (js/, css/, ...)
    #[arg(long, env = "DocumentRoot", default_value = "www/html")]
    pub document_root: PathBuf,

    /// Directory searched for an `index.html` page template
    #[arg(long, env = "TemplateRoot", default_value = "www/template")]
    pub template_root: PathBuf,

    /// Itinerary store file; seeded with the default trip when missing or invalid
    #[arg(long, env = "TRAVEL_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Path prefix to mount everything under, e.g. `/travel`
    #[arg(long, env = "BASE_PATH", default_value = "")]
    pub base_path: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The base path with a leading `/` and no trailing `/`; empty for the root.
    pub fn mount_path(&self) -> String {
        normalize_base_path(&self.base_path)
    }
}

pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
