// src/logging.rs

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

use crate::config::LoggingSettings;
use crate::error::StartupError;

/// Inicializa o subscriber global. `RUST_LOG` tem prioridade sobre o nível configurado.
/// Os registros do `log` (ex.: middleware Logger do actix) também passam por aqui.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), StartupError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| StartupError::Logging(e.to_string()))?;

    Ok(())
}
