// src/parts/parts_structs.rs

use bigdecimal::BigDecimal;
use serde::Serialize;
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, Row};

use crate::shared::shared_structs::Sku;

/// Colunas lidas da tabela `tuning_parts`. A ordem não é garantida (sem ORDER BY).
pub const SELECT_PARTS: &str =
    "SELECT sku, part_name, category, price, stock_quantity, image_url, is_bestseller FROM tuning_parts";

/// Uma linha do catálogo como sai na resposta JSON.
/// `price` é serializado como string decimal ("19.99"), igual ao driver MySQL.
#[derive(Debug, Serialize)]
pub struct Part {
    pub sku: Sku,
    pub part_name: String,
    // NULL passa adiante; a vitrine aplica a categoria padrão
    pub category: Option<String>,
    pub price: BigDecimal,
    pub stock_quantity: i64,
    pub image_url: Option<String>,
    pub is_bestseller: Option<bool>,
}

/// Leitura tipada de uma coluna. O MySQL recusa decodificar INT UNSIGNED
/// como inteiro com sinal (e vice-versa), então cada tipo é tentado à parte.
pub trait ColumnReader {
    fn read_text(&self, column: &str) -> Result<Option<String>, sqlx::Error>;
    fn read_signed(&self, column: &str) -> Result<Option<i64>, sqlx::Error>;
    fn read_unsigned(&self, column: &str) -> Result<Option<u64>, sqlx::Error>;
    fn read_decimal(&self, column: &str) -> Result<BigDecimal, sqlx::Error>;
    fn read_flag(&self, column: &str) -> Result<Option<bool>, sqlx::Error>;
}

impl ColumnReader for MySqlRow {
    fn read_text(&self, column: &str) -> Result<Option<String>, sqlx::Error> {
        self.try_get(column)
    }

    fn read_signed(&self, column: &str) -> Result<Option<i64>, sqlx::Error> {
        self.try_get(column)
    }

    fn read_unsigned(&self, column: &str) -> Result<Option<u64>, sqlx::Error> {
        self.try_get(column)
    }

    fn read_decimal(&self, column: &str) -> Result<BigDecimal, sqlx::Error> {
        self.try_get(column)
    }

    fn read_flag(&self, column: &str) -> Result<Option<bool>, sqlx::Error> {
        self.try_get(column)
    }
}

/// Coluna NOT NULL esperada veio nula.
fn null_column(column: &str) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: format!("unexpected NULL in column {}", column).into(),
    }
}

/// `sku` aceita VARCHAR, INT e INT UNSIGNED.
pub fn decode_sku<R: ColumnReader>(row: &R) -> Result<Sku, sqlx::Error> {
    if let Ok(Some(text)) = row.read_text("sku") {
        return Ok(Sku::Text(text));
    }
    if let Ok(Some(n)) = row.read_unsigned("sku") {
        // Acima de i64::MAX o número segue como texto, sem perda
        return Ok(i64::try_from(n)
            .map(Sku::Number)
            .unwrap_or_else(|_| Sku::Text(n.to_string())));
    }
    row.read_signed("sku")?
        .map(Sku::Number)
        .ok_or_else(|| null_column("sku"))
}

/// Quantidade inteira, com ou sem sinal.
pub fn decode_quantity<R: ColumnReader>(row: &R, column: &str) -> Result<i64, sqlx::Error> {
    if let Ok(Some(n)) = row.read_unsigned(column) {
        return Ok(i64::try_from(n).unwrap_or(i64::MAX));
    }
    row.read_signed(column)?.ok_or_else(|| null_column(column))
}

impl Part {
    pub fn decode<R: ColumnReader>(row: &R) -> Result<Self, sqlx::Error> {
        Ok(Part {
            sku: decode_sku(row)?,
            part_name: row
                .read_text("part_name")?
                .ok_or_else(|| null_column("part_name"))?,
            category: row.read_text("category")?,
            price: row.read_decimal("price")?,
            stock_quantity: decode_quantity(row, "stock_quantity")?,
            image_url: row.read_text("image_url")?,
            is_bestseller: row.read_flag("is_bestseller")?,
        })
    }
}

impl<'r> FromRow<'r, MySqlRow> for Part {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Part::decode(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::str::FromStr;

    /// Valor de coluna como o driver o decodificaria.
    #[derive(Clone)]
    enum Cell {
        Null,
        Text(&'static str),
        Signed(i64),
        Unsigned(u64),
        Decimal(&'static str),
        Flag(bool),
    }

    struct FakeRow(HashMap<&'static str, Cell>);

    fn mismatch(column: &str) -> sqlx::Error {
        sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: "mismatched types".into(),
        }
    }

    impl FakeRow {
        fn cell(&self, column: &str) -> Result<&Cell, sqlx::Error> {
            self.0
                .get(column)
                .ok_or_else(|| sqlx::Error::ColumnNotFound(column.to_string()))
        }
    }

    impl ColumnReader for FakeRow {
        fn read_text(&self, column: &str) -> Result<Option<String>, sqlx::Error> {
            match self.cell(column)? {
                Cell::Null => Ok(None),
                Cell::Text(s) => Ok(Some(s.to_string())),
                _ => Err(mismatch(column)),
            }
        }

        fn read_signed(&self, column: &str) -> Result<Option<i64>, sqlx::Error> {
            match self.cell(column)? {
                Cell::Null => Ok(None),
                Cell::Signed(n) => Ok(Some(*n)),
                _ => Err(mismatch(column)),
            }
        }

        fn read_unsigned(&self, column: &str) -> Result<Option<u64>, sqlx::Error> {
            match self.cell(column)? {
                Cell::Null => Ok(None),
                Cell::Unsigned(n) => Ok(Some(*n)),
                _ => Err(mismatch(column)),
            }
        }

        fn read_decimal(&self, column: &str) -> Result<BigDecimal, sqlx::Error> {
            match self.cell(column)? {
                Cell::Decimal(s) => BigDecimal::from_str(s).map_err(|_| mismatch(column)),
                _ => Err(mismatch(column)),
            }
        }

        fn read_flag(&self, column: &str) -> Result<Option<bool>, sqlx::Error> {
            match self.cell(column)? {
                Cell::Null => Ok(None),
                Cell::Flag(b) => Ok(Some(*b)),
                _ => Err(mismatch(column)),
            }
        }
    }

    fn row(overrides: &[(&'static str, Cell)]) -> FakeRow {
        let mut cells: HashMap<&'static str, Cell> = HashMap::from([
            ("sku", Cell::Text("EXH-001")),
            ("part_name", Cell::Text("Sport Exhaust")),
            ("category", Cell::Text("Exhaust")),
            ("price", Cell::Decimal("19.99")),
            ("stock_quantity", Cell::Signed(4)),
            ("image_url", Cell::Null),
            ("is_bestseller", Cell::Flag(true)),
        ]);
        for (column, cell) in overrides {
            cells.insert(*column, cell.clone());
        }
        FakeRow(cells)
    }

    #[test]
    fn sku_text_signed_and_unsigned() {
        assert_eq!(decode_sku(&row(&[])).unwrap(), Sku::Text("EXH-001".to_string()));
        assert_eq!(decode_sku(&row(&[("sku", Cell::Signed(42))])).unwrap(), Sku::Number(42));
        assert_eq!(decode_sku(&row(&[("sku", Cell::Unsigned(7))])).unwrap(), Sku::Number(7));
        assert_eq!(
            decode_sku(&row(&[("sku", Cell::Unsigned(u64::MAX))])).unwrap(),
            Sku::Text(u64::MAX.to_string())
        );
    }

    #[test]
    fn sku_null_or_wrong_type_fails() {
        assert!(decode_sku(&row(&[("sku", Cell::Null)])).is_err());
        assert!(decode_sku(&row(&[("sku", Cell::Flag(true))])).is_err());
    }

    #[test]
    fn unsigned_stock_column_decodes() {
        let part = Part::decode(&row(&[("stock_quantity", Cell::Unsigned(12))])).unwrap();
        assert_eq!(part.stock_quantity, 12);

        let part = Part::decode(&row(&[("stock_quantity", Cell::Signed(0))])).unwrap();
        assert_eq!(part.stock_quantity, 0);
    }

    #[test]
    fn null_category_passes_through() {
        let part = Part::decode(&row(&[("category", Cell::Null)])).unwrap();
        assert_eq!(part.category, None);
        assert!(serde_json::to_value(&part).unwrap()["category"].is_null());
    }

    #[test]
    fn schema_drift_is_a_decode_error() {
        let mut drifted = row(&[]);
        drifted.0.remove("is_bestseller");
        assert!(matches!(Part::decode(&drifted), Err(sqlx::Error::ColumnNotFound(_))));

        assert!(Part::decode(&row(&[("part_name", Cell::Null)])).is_err());
        assert!(Part::decode(&row(&[("price", Cell::Text("cheap"))])).is_err());
    }

    #[test]
    fn serializes_like_the_table_row() {
        let part = Part::decode(&row(&[])).unwrap();

        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["sku"], "EXH-001");
        assert_eq!(value["price"], "19.99");
        assert_eq!(value["stock_quantity"], 4);
        assert_eq!(value["category"], "Exhaust");
        assert!(value["image_url"].is_null());
        assert_eq!(value["is_bestseller"], true);
    }
}
