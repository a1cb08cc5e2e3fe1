//! opdiag Runner - payoff diagrams from strategy definitions
//!
//! Wires the payoff model to a renderer:
//!
//! - **Config**: JSON strategy files (legs + price range)
//! - **Presets**: built-in straddles, spreads and condors
//! - **CLI**: argument parsing for the `opdiag` binary
//!
//! ## Flow
//!
//! ```text
//!   strategy.json / preset
//!            │
//!            ▼
//!   ┌─────────────────┐   validate legs, combine
//!   │ StrategyConfig  │ ───────────────────────▶ CompositeContract
//!   └─────────────────┘                                │
//!                                                      │ sample price grid, sum PnL
//!                                                      ▼
//!                                               ┌──────────────┐
//!                                               │ PayoffChart  │
//!                                               └──────┬───────┘
//!                                                      │
//!                                                      ▼
//!                                         PayoffRenderer (ascii / json)
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod presets;

use std::io::Write;

use log::{info, warn};
use opdiag_ports::Render;
use opdiag_render::{AsciiRenderer, JsonRenderer};

// Re-export main types
pub use cli::{Command, OutputFormat, RunOptions, StrategySource, parse_args};
pub use config::{ConfigError, LegConfig, StrategyConfig};
pub use error::RunnerError;
pub use presets::{PRESET_NAMES, preset};

/// Resolve the strategy named by `source` and apply range overrides
pub fn load_strategy(options: &RunOptions) -> Result<StrategyConfig, ConfigError> {
    let mut config = match &options.source {
        StrategySource::Preset(name) => {
            preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.clone()))?
        }
        StrategySource::File(path) => {
            info!("Loading strategy from: {}", path.display());
            StrategyConfig::from_file(path)?
        }
    };

    if let Some(price_min) = options.price_min {
        config.price_min = price_min;
    }
    if let Some(price_max) = options.price_max {
        config.price_max = price_max;
    }

    Ok(config)
}

/// Build the strategy and draw it to `out`
pub fn run(options: &RunOptions, out: impl Write) -> Result<(), RunnerError> {
    let config = load_strategy(options)?;
    let composite = config.build()?;

    info!("Strategy: {}", config.name);
    info!("Legs: {} ({} contracts)", config.legs.len(), composite.len());
    info!("Net premium: {}", composite.net_premium());
    info!("Range: [{}, {}]", config.price_min, config.price_max);
    if composite.is_empty() {
        warn!("Strategy '{}' has no legs, PnL is flat zero", config.name);
    }

    let (price_min, price_max) = (config.price_min, config.price_max);
    match options.format {
        OutputFormat::Ascii => {
            composite.render_range(&mut AsciiRenderer::new(out), price_min, price_max)?
        }
        OutputFormat::Json => {
            composite.render_range(&mut JsonRenderer::new(out), price_min, price_max)?
        }
    }

    Ok(())
}
