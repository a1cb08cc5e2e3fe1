use std::io::Write;

use log::debug;
use opdiag_core::PayoffChart;
use opdiag_ports::{PayoffRenderer, RenderError, RenderResult};

/// Writes each chart as a pretty-printed JSON document
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PayoffRenderer for JsonRenderer<W> {
    fn draw(&mut self, chart: &PayoffChart) -> RenderResult<()> {
        debug!("Writing {} payoff samples as JSON", chart.curve.len());
        serde_json::to_writer_pretty(&mut self.out, chart)
            .map_err(|e| RenderError::Serialization(e.to_string()))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "JsonRenderer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opdiag_core::{Contract, Side};
    use opdiag_ports::Render;
    use rust_decimal_macros::dec;

    #[test]
    fn test_json_output_parses_back() {
        let call = Contract::call(dec!(100), dec!(5), Side::Long).unwrap();
        let put = Contract::put(dec!(100), dec!(5), Side::Long).unwrap();
        let straddle = call + put;

        let mut renderer = JsonRenderer::new(Vec::new());
        straddle.render_range(&mut renderer, dec!(90), dec!(110)).unwrap();

        let bytes = renderer.into_inner();
        let parsed: PayoffChart = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed, straddle.chart(dec!(90), dec!(110)).unwrap());
        assert_eq!(parsed.curve.len(), 21);
        assert_eq!(parsed.strikes, vec![dec!(100), dec!(100)]);
    }
}
