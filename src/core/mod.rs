//! Domain configuration, formatting and vocabulary lookup.
//!
//! This module provides the immutable [`DomainConfig`] for the German
//! market together with the pure functions that interpret it.

mod config;
mod currency;
mod date;
mod error;
mod numbering;
mod recurring;
mod types;
pub mod vocabulary;

pub use config::*;
pub use currency::*;
pub use date::*;
pub use error::*;
pub use numbering::*;
pub use recurring::*;
pub use types::*;
pub use vocabulary::{Catalog, CatalogEntry, Vocabulary, resolve};
