// src/shared/mod.rs

// Structs compartilhadas entre a API e a vitrine
pub mod shared_structs;
