use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level configuration, loaded once at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// What gets served: the root directory and the entry file for `/`.
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    pub root: PathBuf,
    pub index: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

impl Config {
    /// Load configuration from `config.toml` (optional), `SERVER_*`
    /// environment variables, and built-in defaults, in that priority order.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("files.root", ".")?
            .set_default("files.index", "index.html")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                format!(
                    "Invalid bind address '{}:{}': {e}",
                    self.server.host, self.server.port
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(host: &str, port: u16) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
                workers: None,
            },
            files: FilesConfig {
                root: PathBuf::from("."),
                index: "index.html".to_string(),
            },
            logging: LoggingConfig { access_log: false },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
            },
        }
    }

    #[test]
    fn test_socket_addr_parses() {
        let cfg = sample_config("0.0.0.0", 5000);
        let addr = cfg.socket_addr().expect("valid address");
        assert_eq!(addr.port(), 5000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_env_overrides_nested_key() {
        // "__" separates nesting levels so snake_case field names stay intact.
        std::env::set_var("SERVER_SERVER__PORT", "9999");
        let cfg = Config::load().expect("config loads");
        std::env::remove_var("SERVER_SERVER__PORT");
        assert_eq!(cfg.server.port, 9999);
    }

    #[test]
    fn test_socket_addr_rejects_bad_host() {
        let cfg = sample_config("not a host", 5000);
        assert!(cfg.socket_addr().is_err());
    }
}
