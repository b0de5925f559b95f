// src/error.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::shared::shared_structs::ErrorResponse;

/// Falhas do endpoint de peças. Todas viram HTTP 500;
/// a mensagem em `error` diferencia a causa para o operador.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Database password is not defined. Set DB_PASSWORD in the environment or .env file.")]
    MissingPassword,

    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl CatalogError {
    /// Mensagem para o usuário final.
    pub fn public_message(&self) -> &'static str {
        match self {
            CatalogError::MissingPassword => {
                "Database configuration is incomplete. Check server console for details."
            }
            CatalogError::Connection(_) | CatalogError::Query(_) => {
                "Failed to fetch data from the database. Check server console for details."
            }
        }
    }
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.public_message(), self.to_string()))
    }
}

/// Falhas na inicialização do servidor (antes de aceitar requisições).
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
