// src/parts/parts_router.rs

use actix_web::{get, web, HttpResponse};
use sqlx::query_as;

use super::parts_structs::{Part, SELECT_PARTS};
use crate::config::DatabaseSettings;
use crate::database;
use crate::error::CatalogError;
use crate::shared::shared_structs::PartsResponse;
use crate::AppState;

/// Rota que devolve o catálogo inteiro de peças.
///
/// Cada chamada abre a sua própria conexão com o MySQL, executa a consulta fixa
/// e fecha a conexão em todos os caminhos (sucesso ou erro).
/// Qualquer falha vira HTTP 500 com o envelope `{ success: false, message, error }`.
#[get("/api/v1/tuning-parts")]
pub async fn list_tuning_parts(data: web::Data<AppState>) -> Result<HttpResponse, CatalogError> {
    match fetch_parts(&data.database).await {
        Ok(parts) => {
            tracing::info!(rows = parts.len(), "Query successful");
            Ok(HttpResponse::Ok().json(PartsResponse::ok(parts)))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch tuning parts");
            Err(e)
        }
    }
}

/// Busca todas as linhas da tabela `tuning_parts`.
pub async fn fetch_parts(settings: &DatabaseSettings) -> Result<Vec<Part>, CatalogError> {
    let mut conn = database::connect(settings).await?;

    let result = query_as::<_, Part>(SELECT_PARTS)
        .fetch_all(&mut conn)
        .await;

    // Fecha antes de inspecionar o resultado, para não vazar a conexão no erro
    database::release(conn).await;

    result.map_err(CatalogError::Query)
}
