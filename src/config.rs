use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use crate::http::request::QueryPolicy;

/// Command-line arguments. Flags override values from the config file.
#[derive(Parser, Debug)]
#[command(
    name = "hearth",
    about = "Simple HTTP server that serves files from a virtual host directory"
)]
pub struct Args {
    /// listening server PORT number
    #[arg(short = 'p', long, env = "HEARTH_PORT")]
    pub port: Option<u16>,

    /// directory of the virtual host
    #[arg(short = 'w', long, env = "HEARTH_VHOST")]
    pub vhost: Option<PathBuf>,

    /// optional YAML configuration file
    #[arg(short = 'c', long, env = "HEARTH_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub vhost: VhostConfig,
    pub errors: ErrorPagesConfig,
    pub parser: ParserConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VhostConfig {
    /// Directory request targets are resolved against.
    pub root: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ErrorPagesConfig {
    /// Directory holding one `<status>.html` body per supported status code.
    pub dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Reject requests whose query string contains a malformed pair.
    pub strict_query: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for VhostConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("static"),
        }
    }
}

impl Default for ErrorPagesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("static/stat"),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { strict_query: true }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Builds the effective configuration: defaults, then the config file
    /// if one was given, then command-line overrides.
    pub fn load(args: &Args) -> anyhow::Result<Self> {
        let mut cfg = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(port) = args.port {
            cfg.server.port = port;
        }
        if let Some(root) = &args.vhost {
            cfg.vhost.root = root.clone();
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let cfg = serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn query_policy(&self) -> QueryPolicy {
        if self.parser.strict_query {
            QueryPolicy::Reject
        } else {
            QueryPolicy::Ignore
        }
    }
}
