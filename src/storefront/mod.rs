// src/storefront/mod.rs

//! Vitrine: busca o catálogo na API, guarda em memória e monta os cards
//! com filtro por categoria, ordenação e modo grade/lista.

// Peças normalizadas e o catálogo retido
pub mod catalog;
// Cliente HTTP da API de peças
pub mod client;
// Estado dos controles (filtro, ordenação, modo de exibição)
pub mod controls;
// Estado da seção de catálogo da página
pub mod page;
// Formatação de preço em EUR
pub mod price;
// Templates dos cards
pub mod render;
// Situação de estoque
pub mod stock;

pub use catalog::{Catalog, CatalogItem};
pub use client::{CatalogClient, ClientError};
pub use controls::{CategoryFilter, SortOrder, ViewMode, ViewState};
pub use page::CatalogPage;
