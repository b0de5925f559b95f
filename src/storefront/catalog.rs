// src/storefront/catalog.rs

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer};

use crate::shared::shared_structs::Sku;

/// Base das imagens geradas quando a peça não tem `image_url`.
pub const PLACEHOLDER_BASE: &str = "https://placehold.co/400x300";
/// Categoria usada quando a linha chega com categoria vazia.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Peça como chega da API, sem nenhum valor padrão aplicado.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPart {
    pub sku: Sku,
    pub part_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(deserialize_with = "decimal_from_text_or_number")]
    pub price: BigDecimal,
    pub stock_quantity: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_bestseller: Option<bool>,
}

/// Peça normalizada, pronta para renderizar. Os campos de identidade,
/// preço e estoque nunca são alterados depois da normalização.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub sku: Sku,
    pub name: String,
    pub category: String,
    pub price: BigDecimal,
    pub stock_quantity: u32,
    pub image_url: String,
    pub is_bestseller: bool,
}

impl From<RawPart> for CatalogItem {
    fn from(raw: RawPart) -> Self {
        let category = raw
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let image_url = raw
            .image_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| placeholder_image(&raw.part_name));

        CatalogItem {
            sku: raw.sku,
            // Estoque negativo só aparece com schema quebrado
            stock_quantity: u32::try_from(raw.stock_quantity).unwrap_or(0),
            name: raw.part_name,
            category,
            price: raw.price,
            image_url,
            is_bestseller: raw.is_bestseller.unwrap_or(false),
        }
    }
}

/// URL da imagem de substituição com o nome da peça como texto.
pub fn placeholder_image(part_name: &str) -> String {
    let text: String = url::form_urlencoded::byte_serialize(part_name.as_bytes()).collect();
    format!("{}?text={}", PLACEHOLDER_BASE, text)
}

/// Cópia completa da tabela, na ordem em que a API devolveu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Catalog { items }
    }

    pub fn from_raw(parts: Vec<RawPart>) -> Self {
        Catalog::new(parts.into_iter().map(CatalogItem::from).collect())
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Categorias distintas, na ordem da primeira ocorrência.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for item in &self.items {
            if !seen.iter().any(|c| c == &item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }
}

// O MySQL devolve DECIMAL como string; aceita número também
fn decimal_from_text_or_number<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Integer(i64),
        Float(f64),
        Text(String),
    }

    let text = match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Integer(n) => n.to_string(),
        TextOrNumber::Float(n) => n.to_string(),
        TextOrNumber::Text(s) => s,
    };

    BigDecimal::from_str(text.trim()).map_err(serde::de::Error::custom)
}
