use std::io::Write;
use std::ops::Range;

use log::debug;
use opdiag_core::{PayoffChart, PnlPoint, Price, X_AXIS_LABEL, Y_AXIS_LABEL};
use opdiag_ports::{PayoffRenderer, RenderResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const DEFAULT_WIDTH: usize = 72;
const DEFAULT_HEIGHT: usize = 20;
const LABEL_WIDTH: usize = 10;

const PROFIT_MARK: char = '+';
const LOSS_MARK: char = 'x';
const FLAT_MARK: char = 'o';
const PROFIT_FILL: char = ':';
const LOSS_FILL: char = '.';
const ZERO_LINE: char = '-';
const STRIKE_LINE: char = '|';

/// Character-cell payoff chart for terminals
///
/// Profit samples are drawn with `+`, loss samples with `x`, samples at
/// exactly zero with `o`. The area between the curve and the zero-PnL line
/// is shaded with `:` in profit and `.` in loss. The zero-PnL line is drawn
/// with `-` and every strike gets a vertical `|` line.
pub struct AsciiRenderer<W: Write> {
    out: W,
    width: usize,
    height: usize,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_size(out, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Custom plot area size in character cells (min 2 columns, 3 rows)
    pub fn with_size(out: W, width: usize, height: usize) -> Self {
        Self {
            out,
            width: width.max(2),
            height: height.max(3),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Pick at most `width` samples spread evenly over the curve
    fn downsample(&self, curve: &[PnlPoint]) -> Vec<PnlPoint> {
        let n = curve.len();
        let cols = self.width.min(n);
        if cols <= 1 {
            return curve.iter().take(1).copied().collect();
        }
        (0..cols).map(|c| curve[c * (n - 1) / (cols - 1)]).collect()
    }

    fn write_regions(
        &mut self,
        label: &str,
        chart: &PayoffChart,
        regions: &[Range<usize>],
    ) -> RenderResult<()> {
        if regions.is_empty() {
            return Ok(());
        }
        let spans: Vec<String> = regions
            .iter()
            .map(|r| {
                format!(
                    "[{}, {}]",
                    chart.curve[r.start].price,
                    chart.curve[r.end - 1].price
                )
            })
            .collect();
        writeln!(self.out, "{}: {}", label, spans.join(" "))?;
        Ok(())
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

impl<W: Write> PayoffRenderer for AsciiRenderer<W> {
    fn draw(&mut self, chart: &PayoffChart) -> RenderResult<()> {
        if chart.curve.is_empty() {
            writeln!(self.out, "(empty payoff curve)")?;
            return Ok(());
        }

        let samples = self.downsample(&chart.curve);
        let cols = samples.len();
        let rows = self.height;
        debug!(
            "Drawing {} of {} samples on a {}x{} grid",
            cols,
            chart.curve.len(),
            cols,
            rows
        );

        // Vertical range always includes zero so the zero line is visible
        let lo = to_f64(chart.min_pnl().unwrap_or_default().min(Decimal::ZERO));
        let mut hi = to_f64(chart.max_pnl().unwrap_or_default().max(Decimal::ZERO));
        if hi - lo < f64::EPSILON {
            hi = lo + 1.0;
        }
        let row_of = |value: f64| -> usize {
            let scaled = (hi - value) / (hi - lo) * (rows - 1) as f64;
            (scaled.round().max(0.0) as usize).min(rows - 1)
        };

        let price_min = to_f64(chart.price_min);
        let price_max = to_f64(chart.price_max);
        let col_of = |price: Price| -> Option<usize> {
            let x = to_f64(price);
            if x < price_min || x > price_max {
                return None;
            }
            if cols == 1 || price_max <= price_min {
                return Some(0);
            }
            let scaled = (x - price_min) / (price_max - price_min) * (cols - 1) as f64;
            Some((scaled.round() as usize).min(cols - 1))
        };

        let mut cells = vec![vec![' '; cols]; rows];
        let zero_row = row_of(0.0);
        cells[zero_row].fill(ZERO_LINE);

        for (col, point) in samples.iter().enumerate() {
            let row = row_of(to_f64(point.pnl));
            let (fill, span) = if point.pnl > Decimal::ZERO {
                (PROFIT_FILL, row + 1..zero_row)
            } else if point.pnl < Decimal::ZERO {
                (LOSS_FILL, zero_row + 1..row)
            } else {
                continue;
            };
            for r in span {
                cells[r][col] = fill;
            }
        }

        for &strike in &chart.strikes {
            if let Some(col) = col_of(strike) {
                for row in cells.iter_mut() {
                    row[col] = STRIKE_LINE;
                }
            }
        }

        for (col, point) in samples.iter().enumerate() {
            let mark = if point.pnl > Decimal::ZERO {
                PROFIT_MARK
            } else if point.pnl < Decimal::ZERO {
                LOSS_MARK
            } else {
                FLAT_MARK
            };
            cells[row_of(to_f64(point.pnl))][col] = mark;
        }

        writeln!(self.out, "{:>width$}", Y_AXIS_LABEL, width = LABEL_WIDTH)?;
        for (i, row) in cells.iter().enumerate() {
            let label = if i == 0 {
                format!("{:.2}", hi)
            } else if i == zero_row {
                "0".to_string()
            } else if i == rows - 1 {
                format!("{:.2}", lo)
            } else {
                String::new()
            };
            let line: String = row.iter().collect();
            writeln!(self.out, "{:>width$} |{}", label, line, width = LABEL_WIDTH)?;
        }

        writeln!(
            self.out,
            "{:>width$} +{}",
            "",
            "-".repeat(cols),
            width = LABEL_WIDTH
        )?;
        let min_label = chart.price_min.to_string();
        let max_label = chart.price_max.to_string();
        let gap = cols.saturating_sub(min_label.len() + max_label.len()).max(1);
        writeln!(
            self.out,
            "{:>width$}  {}{}{}",
            "",
            min_label,
            " ".repeat(gap),
            max_label,
            width = LABEL_WIDTH
        )?;
        let pad = LABEL_WIDTH + 2 + cols.saturating_sub(X_AXIS_LABEL.len()) / 2;
        writeln!(self.out, "{:>width$}{}", "", X_AXIS_LABEL, width = pad)?;

        if !chart.strikes.is_empty() {
            let strikes: Vec<String> = chart.strikes.iter().map(|s| s.to_string()).collect();
            writeln!(self.out, "Strikes: {}", strikes.join(", "))?;
        }
        self.write_regions("Profit", chart, &chart.profit_regions())?;
        self.write_regions("Loss", chart, &chart.loss_regions())?;

        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "AsciiRenderer"
    }
}
