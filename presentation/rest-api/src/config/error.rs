use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.invalid_port: {0}")]
    InvalidPort(String),
    #[error("config.invalid_max_connections: {0}")]
    InvalidMaxConnections(String),
}
