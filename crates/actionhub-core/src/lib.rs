pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod manifest;
pub mod paths;
pub mod writer;

pub use error::{CatalogError, Phase, Result, WriteError};
