// src/storefront/stock.rs

/// Até este valor (inclusive) o estoque é considerado baixo.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Situação de estoque exibida no card, derivada só da quantidade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    LowStock(u32),
    InStock,
}

impl StockStatus {
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => StockStatus::OutOfStock,
            n if n <= LOW_STOCK_THRESHOLD => StockStatus::LowStock(n),
            _ => StockStatus::InStock,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::LowStock(_) => "low-stock",
            StockStatus::InStock => "in-stock",
        }
    }

    pub fn label(&self) -> String {
        match self {
            StockStatus::OutOfStock => "Out of Stock".to_string(),
            StockStatus::LowStock(n) => format!("Low Stock: only {} left", n),
            StockStatus::InStock => "In Stock".to_string(),
        }
    }
}
