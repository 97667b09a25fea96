//! Export of previewed transactions to downloadable files.
//!
//! The preview page embeds the generated records as JSON; this module
//! re-validates that data, flattens it into rows, and encodes the rows as
//! CSV text or an XLSX workbook.

pub(crate) mod core;
mod csv;
mod endpoint;
mod xlsx;

pub use endpoint::download_endpoint;
