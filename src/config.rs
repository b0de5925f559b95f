// src/config.rs

use serde::Deserialize;
use std::env;

use crate::error::CatalogError;

/// Configuração completa do serviço, montada em camadas:
/// valores padrão, `config/default.toml` opcional, variáveis `TUNING__*`
/// e por fim `DB_PASSWORD`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    // Opcional de propósito: a ausência só é reportada na requisição
    pub password: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default".to_string());

        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.host", "127.0.0.1")?
            .set_default("database.port", 3307)?
            .set_default("database.user", "root")?
            .set_default("database.name", "tuning_db")?
            .set_default("logging.level", "info")?
            .add_source(config::File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("TUNING").separator("__"))
            // A senha vem do .env / ambiente, como no deploy com Docker
            .set_override_option("database.password", env::var("DB_PASSWORD").ok())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseSettings {
    /// Retorna a senha configurada. Vazia conta como ausente.
    pub fn password(&self) -> Result<&str, CatalogError> {
        match self.password.as_deref() {
            Some(p) if !p.is_empty() => Ok(p),
            _ => Err(CatalogError::MissingPassword),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database(password: Option<&str>) -> DatabaseSettings {
        DatabaseSettings {
            host: "127.0.0.1".to_string(),
            port: 3307,
            user: "root".to_string(),
            password: password.map(str::to_string),
            name: "tuning_db".to_string(),
        }
    }

    #[test]
    fn password_present() {
        assert_eq!(database(Some("s3cret")).password().unwrap(), "s3cret");
    }

    #[test]
    fn empty_password_is_missing() {
        assert!(matches!(database(Some("")).password(), Err(CatalogError::MissingPassword)));
        assert!(matches!(database(None).password(), Err(CatalogError::MissingPassword)));
    }
}
