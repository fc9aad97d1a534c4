use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Represents the Docker Engine endpoint the dashboard reads from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local engine exposed on the default TCP port.
    #[default]
    Local,
    /// Engine endpoint taken from `DOCKER_HOST`.
    Custom { engine_url: String },
}

/// Error produced when `DOCKER_HOST` cannot be turned into an HTTP endpoint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error(
        "unsupported DOCKER_HOST value '{0}': only tcp:// and http(s):// endpoints are supported"
    )]
    UnsupportedScheme(String),
}

impl Environment {
    /// Returns the engine base URL associated with the environment.
    pub fn engine_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:2375".to_string(),
            Environment::Custom { engine_url } => engine_url.clone(),
        }
    }

    /// Resolves the environment from the process environment.
    ///
    /// An unset or empty `DOCKER_HOST` selects the local default endpoint.
    pub fn from_env() -> Result<Self, EnvironmentError> {
        match std::env::var("DOCKER_HOST") {
            Ok(host) if !host.trim().is_empty() => host.trim().parse(),
            _ => Ok(Environment::Local),
        }
    }
}

impl FromStr for Environment {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("tcp://") {
            return Ok(Environment::Custom {
                engine_url: format!("http://{}", rest),
            });
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Environment::Custom {
                engine_url: s.to_string(),
            });
        }
        Err(EnvironmentError::UnsupportedScheme(s.to_string()))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { engine_url } => write!(f, "{}", engine_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.engine_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tcp_host_becomes_http_endpoint() {
        let env = "tcp://127.0.0.1:2375".parse::<Environment>().unwrap();
        assert_eq!(env.engine_url(), "http://127.0.0.1:2375");
    }

    #[test]
    fn http_host_is_kept_verbatim() {
        let env = "https://docker.example.com:2376"
            .parse::<Environment>()
            .unwrap();
        assert_eq!(env.engine_url(), "https://docker.example.com:2376");
    }

    #[test]
    fn unix_socket_is_rejected() {
        let err = "unix:///var/run/docker.sock"
            .parse::<Environment>()
            .unwrap_err();
        assert!(matches!(err, EnvironmentError::UnsupportedScheme(_)));
    }

    #[test]
    fn default_is_local_engine() {
        assert_eq!(Environment::default().engine_url(), "http://localhost:2375");
    }
}
