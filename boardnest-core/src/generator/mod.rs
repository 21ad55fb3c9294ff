//! Output generators for nesting results.

pub mod pdf;

pub use pdf::generate_pdf;
