use crate::error::{ConfigErrorKind, InfraError};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub http_addr: String,             // e.g. "0.0.0.0:5000"
    #[serde(default)]
    pub world_file: Option<PathBuf>,   // YAML seed; built-in world when unset
    #[serde(default)]
    pub views_dir: Option<PathBuf>,    // HTML templates; built-in views when unset
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:5000".to_string(),
            world_file: None,
            views_dir: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InfraError> {
        let path = path.as_ref();
        let config_err = |source: ConfigErrorKind| InfraError::Config {
            path: path.to_path_buf(),
            source,
        };

        let data = std::fs::read_to_string(path).map_err(|e| config_err(ConfigErrorKind::Read(e)))?;
        let cfg: Self = toml::from_str(&data).map_err(|e| config_err(ConfigErrorKind::Parse(e)))?;
        cfg.validate(path)?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self, InfraError> {
        let _ = dotenvy::from_filename(".env");
        let cfg = Self {
            http_addr: std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            world_file: std::env::var("WORLD_FILE").ok().map(PathBuf::from),
            views_dir: std::env::var("VIEWS_DIR").ok().map(PathBuf::from),
        };

        if cfg.http_addr.parse::<SocketAddr>().is_err() {
            return Err(InfraError::Config {
                path: PathBuf::from(".env"),
                source: ConfigErrorKind::InvalidEnv("HTTP_ADDR".to_string(), cfg.http_addr),
            });
        }

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, InfraError> {
        self.http_addr.parse().map_err(|_| InfraError::Config {
            path: PathBuf::new(),
            source: ConfigErrorKind::InvalidEnv("http_addr".to_string(), self.http_addr.clone()),
        })
    }

    fn validate(&self, path: &Path) -> Result<(), InfraError> {
        if self.http_addr.parse::<SocketAddr>().is_err() {
            return Err(InfraError::Config {
                path: path.to_path_buf(),
                source: ConfigErrorKind::InvalidEnv("http_addr".to_string(), self.http_addr.clone()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml() {
        let cfg: Config = toml::from_str(
            r#"
http_addr = "127.0.0.1:8080"
world_file = "data/basic-world.yaml"
"#,
        )
        .unwrap();
        assert_eq!(cfg.socket_addr().unwrap().port(), 8080);
        assert_eq!(cfg.world_file, Some(PathBuf::from("data/basic-world.yaml")));
        assert!(cfg.views_dir.is_none());
    }

    #[test]
    fn default_listens_on_5000() {
        assert_eq!(Config::default().socket_addr().unwrap().port(), 5000);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::load("/nonexistent/roomcrawl.toml").unwrap_err();
        assert!(matches!(
            err,
            InfraError::Config {
                source: ConfigErrorKind::Read(_),
                ..
            }
        ));
    }
}
