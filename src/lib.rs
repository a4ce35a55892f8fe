// src/lib.rs

pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod shell;
pub use crate::core::collection::DictCollection;
pub use crate::core::dictionary::Dictionary;
pub use crate::shell::Shell;
