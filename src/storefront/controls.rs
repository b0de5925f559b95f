// src/storefront/controls.rs

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use super::catalog::{Catalog, CatalogItem};

/// Filtro de categoria, seleção única. "Todas" fica fora dos valores do
/// catálogo: uma categoria chamada "all" continua sendo uma categoria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn category(name: impl Into<String>) -> Self {
        CategoryFilter::Category(name.into())
    }

    /// Comparação exata com a categoria normalizada.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => c == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ordem em que a API devolveu.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::NameAsc => "name-asc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortOrder::Default),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "name-asc" => Ok(SortOrder::NameAsc),
            other => Err(format!(
                "unknown sort order '{}', expected one of: default, price-asc, price-desc, name-asc",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    /// Classe do container de cards.
    pub fn container_class(&self) -> &'static str {
        match self {
            ViewMode::Grid => "parts-container grid-view",
            ViewMode::List => "parts-container list-view",
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("unknown view mode '{}', expected grid or list", other)),
        }
    }
}

/// Estado dos controles da vitrine. Nada aqui altera o catálogo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: CategoryFilter,
    pub sort: SortOrder,
    pub view_mode: ViewMode,
}

/// Itens na ordem pedida. A ordenação é estável: empates mantêm a ordem da API.
pub fn sorted(catalog: &Catalog, order: SortOrder) -> Vec<&CatalogItem> {
    let mut items: Vec<&CatalogItem> = catalog.items().iter().collect();
    match order {
        SortOrder::Default => {}
        SortOrder::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::NameAsc => {
            let collator = german_collator();
            items.sort_by(|a, b| compare_names(collator.as_ref(), &a.name, &b.name));
        }
    }
    items
}

/// Itens visíveis para o estado atual: ordena e depois aplica o filtro.
pub fn visible_parts<'a>(catalog: &'a Catalog, state: &ViewState) -> Vec<&'a CatalogItem> {
    sorted(catalog, state.sort)
        .into_iter()
        .filter(|item| state.filter.matches(&item.category))
        .collect()
}

/// Collator do locale `de` (dados compilados no crate).
fn german_collator() -> Option<Collator> {
    match Collator::try_new(&locale!("de").into(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = ?e, "German collator unavailable, sorting names case-insensitively");
            None
        }
    }
}

// Empate decidido pelo nome bruto, para a ordem ser total
fn compare_names(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    let primary = match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    primary.then_with(|| a.cmp(b))
}
