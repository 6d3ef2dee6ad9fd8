//! Server configuration, read from flags or the environment.

use crate::{Result, ViewerError};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "contexta-viewer")]
#[command(about = "Greets each request's viewer using request-scoped context", long_about = None)]
#[command(version)]
pub struct ViewerConfig {
    /// Host or IP address to listen on
    #[arg(long, env = "CONTEXTA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on (0 picks a free port)
    #[arg(short, long, env = "CONTEXTA_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Name used when a request carries no viewer
    #[arg(long, env = "CONTEXTA_GUEST_NAME", default_value = "Guest")]
    pub guest_name: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            guest_name: "Guest".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ViewerError::Config("host must not be empty".to_string()));
        }
        if self.guest_name.trim().is_empty() {
            return Err(ViewerError::Config(
                "guest name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
