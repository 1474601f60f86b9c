//! Command-line and environment configuration.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Employee directory server.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "EMPLOYEES_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// SQLite database file; created with its parent directories if missing.
    #[arg(long, env = "EMPLOYEES_DB_PATH", default_value = "employees.sqlite3")]
    pub database: PathBuf,

    /// Use a throwaway in-memory SQLite database instead of `--database`.
    #[arg(long, env = "EMPLOYEES_IN_MEMORY")]
    pub in_memory: bool,

    /// One of trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "EMPLOYEES_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr when unset.
    #[arg(long, env = "EMPLOYEES_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl ServerConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or_else(|| employees_core::default_log_level())
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;
    use clap::Parser;

    #[test]
    fn defaults_apply_without_flags() {
        let config = ServerConfig::try_parse_from(["employees"]).unwrap();

        assert_eq!(config.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(config.database.to_str(), Some("employees.sqlite3"));
        assert!(!config.in_memory);
        assert!(config.log_dir.is_none());
        assert_eq!(
            config.effective_log_level(),
            employees_core::default_log_level()
        );
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "employees",
            "--bind",
            "0.0.0.0:9000",
            "--database",
            "/var/lib/employees/db.sqlite3",
            "--in-memory",
            "--log-level",
            "warn",
            "--log-dir",
            "/var/log/employees",
        ])
        .unwrap();

        assert_eq!(config.bind.port(), 9000);
        assert!(config.in_memory);
        assert_eq!(config.effective_log_level(), "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/employees"));
    }

    #[test]
    fn invalid_bind_address_is_rejected() {
        let result = ServerConfig::try_parse_from(["employees", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }
}
