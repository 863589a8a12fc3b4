//! Command-line and environment configuration.

use clap::Parser;
use resource_framework::{AllowAuthenticated, Authorizer, OrganizationPolicy};
use std::net::SocketAddr;
use std::sync::Arc;

/// Settings for the payroll service. Every flag can also come from the
/// environment variable named next to it.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "ORDER_LINKS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Absolute prefix for every href (defaults to http://<bind>)
    #[arg(long, env = "ORDER_LINKS_BASE_URL")]
    pub base_url: Option<String>,

    /// Store shards per resource kind
    #[arg(long, env = "ORDER_LINKS_SHARDS", default_value_t = 4)]
    pub shards: usize,

    /// Request queue capacity of each shard
    #[arg(long, env = "ORDER_LINKS_BUFFER", default_value_t = 32)]
    pub buffer: usize,

    /// Only admit members of this organization
    #[arg(long, env = "ORDER_LINKS_ORGANIZATION")]
    pub organization: Option<String>,

    /// Start with empty collections
    #[arg(long, env = "ORDER_LINKS_NO_SEED")]
    pub no_seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            base_url: None,
            shards: 4,
            buffer: 32,
            organization: None,
            no_seed: false,
        }
    }
}

impl Config {
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.bind),
        }
    }

    pub fn authorizer(&self) -> Arc<dyn Authorizer> {
        match &self.organization {
            Some(org) => Arc::new(OrganizationPolicy::new(org.clone())),
            None => Arc::new(AllowAuthenticated),
        }
    }
}
