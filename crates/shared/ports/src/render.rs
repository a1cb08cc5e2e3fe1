use log::debug;
use opdiag_core::{
    CompositeContract, Contract, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, PayoffChart, Price,
};

use crate::error::RenderResult;

/// Port for the charting collaborator
///
/// Implementations receive a fully evaluated `PayoffChart` and decide how to
/// draw it:
/// - Terminal (ASCII) output
/// - Serialized series for an external plotting tool
/// - In-memory capture for tests
pub trait PayoffRenderer {
    /// Draw one payoff chart
    fn draw(&mut self, chart: &PayoffChart) -> RenderResult<()>;

    /// Get the renderer's name/identifier for debugging
    fn name(&self) -> &str {
        "PayoffRenderer"
    }
}

/// Render a group of legs through a `PayoffRenderer`
pub trait Render {
    /// Sample `[price_min, price_max]`, evaluate PnL and hand the series to
    /// `renderer`. The range is validated before sampling.
    fn render_range(
        &self,
        renderer: &mut dyn PayoffRenderer,
        price_min: Price,
        price_max: Price,
    ) -> RenderResult<()>;

    /// Render over the default range 0..200
    fn render(&self, renderer: &mut dyn PayoffRenderer) -> RenderResult<()> {
        self.render_range(renderer, DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX)
    }
}

impl Render for CompositeContract {
    fn render_range(
        &self,
        renderer: &mut dyn PayoffRenderer,
        price_min: Price,
        price_max: Price,
    ) -> RenderResult<()> {
        let chart = self.chart(price_min, price_max)?;
        debug!(
            "Rendering {} legs over [{}, {}] ({} samples) with {}",
            self.len(),
            price_min,
            price_max,
            chart.curve.len(),
            renderer.name()
        );
        renderer.draw(&chart)
    }
}

/// Plot a single leg
pub trait Plot {
    fn plot_range(
        &self,
        renderer: &mut dyn PayoffRenderer,
        price_min: Price,
        price_max: Price,
    ) -> RenderResult<()>;

    /// Plot over the default range 0..200
    fn plot(&self, renderer: &mut dyn PayoffRenderer) -> RenderResult<()> {
        self.plot_range(renderer, DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX)
    }
}

impl Plot for Contract {
    fn plot_range(
        &self,
        renderer: &mut dyn PayoffRenderer,
        price_min: Price,
        price_max: Price,
    ) -> RenderResult<()> {
        CompositeContract::new(vec![*self]).render_range(renderer, price_min, price_max)
    }
}
