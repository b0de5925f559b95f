// src/storefront/client.rs

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::catalog::{Catalog, RawPart};
use super::page::CatalogPage;

/// URL padrão da API local.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1/tuning-parts";

/// Falhas ao carregar o catálogo. Nenhuma é repetida automaticamente.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Could not reach the parts API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Parts API answered with status {0}")]
    Status(StatusCode),

    #[error("Parts API returned an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Parts API reported a failure: {message}")]
    Rejected { message: String, error: Option<String> },
}

// Corpo aceito nos dois formatos (sucesso e falha)
#[derive(Deserialize)]
struct CatalogEnvelope {
    success: bool,
    #[serde(default)]
    parts: Vec<RawPart>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Cliente HTTP da vitrine. Sem timeout explícito, sem cache, sem retry.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    api_url: String,
}

impl CatalogClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        CatalogClient {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Busca o catálogo completo com uma única requisição GET.
    pub async fn fetch_catalog(&self) -> Result<Catalog, ClientError> {
        tracing::info!(url = %self.api_url, "Fetching tuning parts");

        let response = self
            .http
            .get(&self.api_url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let envelope: CatalogEnvelope = response.json().await.map_err(ClientError::Decode)?;
        if !envelope.success {
            return Err(ClientError::Rejected {
                message: envelope
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
                error: envelope.error,
            });
        }

        tracing::info!(parts = envelope.parts.len(), "Catalog received");
        Ok(Catalog::from_raw(envelope.parts))
    }

    /// Carrega a página: busca uma vez e aplica o resultado (sucesso ou erro).
    pub async fn load_page(&self) -> CatalogPage {
        let mut page = CatalogPage::new();
        page.apply_load(self.fetch_catalog().await);
        page
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        CatalogClient::new(DEFAULT_API_URL)
    }
}
