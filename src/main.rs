// src/main.rs

use actix_web::{middleware::Logger, web, App, HttpServer};

use tuning_parts::config::Settings;
use tuning_parts::error::StartupError;
use tuning_parts::logging::init_logging;
use tuning_parts::middleware::cors_middleware::open_cors;
use tuning_parts::{configure, AppState};

// Função principal da API de peças.
#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    // Carrega o .env antes de ler qualquer variável de ambiente
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    init_logging(&settings.logging)?;

    // A senha ausente não impede a subida: cada requisição responde com 500
    if settings.database.password().is_err() {
        tracing::warn!("DB_PASSWORD is not set; /api/v1/tuning-parts will fail until it is configured");
    }

    let bind_address = settings.bind_address();
    let app_state = web::Data::new(AppState {
        database: settings.database.clone(),
    });

    tracing::info!(address = %bind_address, "API running");
    tracing::info!("Data endpoint: http://{}/api/v1/tuning-parts", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(open_cors())
            .configure(configure)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
