// src/parts/mod.rs

// Structs das peças (linha da tabela e consulta)
pub mod parts_structs;
// Rota GET /api/v1/tuning-parts
pub mod parts_router;
