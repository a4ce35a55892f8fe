// src/core/mod.rs
pub mod collection;
pub mod dictionary;
pub mod set_ops;
pub mod types;
