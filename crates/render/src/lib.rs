//! opdiag Renderers
//!
//! Adapters implementing the `PayoffRenderer` port:
//!
//! - **AsciiRenderer**: character chart for terminals
//! - **JsonRenderer**: the evaluated series as JSON, for external plotting tools

mod ascii;
mod json;

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
