//! Command-line front end for Letterbox.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::{config::AppConfig, error::AppError};

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
