//! # vivid-core
//!
//! Core crate for VividVerse credentials. Contains the configuration
//! schemas and the unified error system shared by the auth crate and the
//! operator CLI.
//!
//! This crate has **no** internal dependencies on other VividVerse crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
