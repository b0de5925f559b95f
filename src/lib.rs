// src/lib.rs

use actix_web::web;

// Importa os módulos
//
// Lado servidor: configuração, erros, conexão com o MySQL e a rota de peças.
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod parts;
pub mod shared;
// Lado cliente: a vitrine que consome a API.
pub mod storefront;

use crate::config::DatabaseSettings;

// Estado compartilhado entre as rotas. Só configuração: cada requisição
// abre e fecha a própria conexão, então não existe pool aqui.
pub struct AppState {
    pub database: DatabaseSettings,
}

/// Registra as rotas da API. Usado pelo `main` e pelos testes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(parts::parts_router::list_tuning_parts);
}
