// src/database.rs

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};

use crate::config::DatabaseSettings;
use crate::error::CatalogError;

/// Monta as opções de conexão. Falha antes de tocar na rede se a senha estiver ausente.
pub fn connect_options(settings: &DatabaseSettings) -> Result<MySqlConnectOptions, CatalogError> {
    let password = settings.password()?;

    let mut options = MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(password)
        .database(&settings.name);
    // Os logs por statement já saem no handler
    options.disable_statement_logging();

    Ok(options)
}

/// Abre uma conexão nova, uma por requisição. O chamador é responsável por `close()`.
pub async fn connect(settings: &DatabaseSettings) -> Result<MySqlConnection, CatalogError> {
    let options = connect_options(settings)?;
    tracing::info!(host = %settings.host, port = settings.port, "Attempting to connect to database");

    let conn = MySqlConnection::connect_with(&options)
        .await
        .map_err(CatalogError::Connection)?;
    tracing::info!("Database connection successful");

    Ok(conn)
}

/// Fecha a conexão. Erros no fechamento só são registrados.
pub async fn release(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection cleanly");
    }
}
