//! opdiag Ports
//!
//! Port definitions (traits) for the opdiag payoff model.
//! These define the boundary between the pure payoff model and whatever
//! draws the chart (terminal, JSON, plotting library, ...).

mod error;
mod render;

pub use error::{RenderError, RenderResult};
pub use render::{PayoffRenderer, Plot, Render};
