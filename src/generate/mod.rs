//! Transaction generation.
//!
//! This module contains everything related to fabricating records:
//! - The pure generation logic and its parameter set
//! - The raw form and its coercion rules
//! - The parameter form page and the preview endpoint

pub(crate) mod core;
mod endpoint;
pub(crate) mod form;
mod page;
mod view;

pub use endpoint::generate_endpoint;
pub use page::get_generator_page;
