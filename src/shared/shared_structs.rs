// src/shared/shared_structs.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Envelope de sucesso do endpoint de peças: `{ "success": true, "parts": [...] }`.
#[derive(Serialize)]
pub struct PartsResponse<T> {
    pub success: bool,
    pub parts: Vec<T>,
}

impl<T> PartsResponse<T> {
    pub fn ok(parts: Vec<T>) -> Self {
        PartsResponse { success: true, parts }
    }
}

/// Envelope de falha: `{ "success": false, "message": ..., "error": ... }`.
/// `message` é para humanos, `error` diferencia a causa para o operador.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            message: message.into(),
            error: error.into(),
        }
    }
}

/// Identificador de uma peça. A coluna pode ser texto ou inteiro,
/// e o JSON preserva o tipo original.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sku {
    Number(i64),
    Text(String),
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sku::Number(n) => write!(f, "{}", n),
            Sku::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sku_keeps_json_type() {
        let numeric: Sku = serde_json::from_str("1042").unwrap();
        let text: Sku = serde_json::from_str("\"EXH-001\"").unwrap();

        assert_eq!(numeric, Sku::Number(1042));
        assert_eq!(text, Sku::Text("EXH-001".to_string()));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "1042");
        assert_eq!(text.to_string(), "EXH-001");
    }

    #[test]
    fn error_envelope_shape() {
        let body = serde_json::to_value(ErrorResponse::new("msg", "diag")).unwrap();
        assert_eq!(body, serde_json::json!({ "success": false, "message": "msg", "error": "diag" }));
    }
}
