// src/middleware/mod.rs

// Cabeçalhos CORS em todas as respostas
pub mod cors_middleware;
