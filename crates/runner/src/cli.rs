//! Command line parsing for the `opdiag` binary

use std::path::PathBuf;
use std::str::FromStr;

use opdiag_core::Price;

use crate::error::RunnerError;

/// Output format for the rendered chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Ascii,
    Json,
}

impl FromStr for OutputFormat {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" | "text" => Ok(OutputFormat::Ascii),
            "json" => Ok(OutputFormat::Json),
            other => Err(RunnerError::Usage(format!(
                "unknown format '{}', expected ascii or json",
                other
            ))),
        }
    }
}

/// Where the strategy comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategySource {
    Preset(String),
    File(PathBuf),
}

impl Default for StrategySource {
    fn default() -> Self {
        StrategySource::Preset("straddle".to_string())
    }
}

/// Options for a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub source: StrategySource,
    /// Overrides the strategy's lower price bound
    pub price_min: Option<Price>,
    /// Overrides the strategy's upper price bound
    pub price_max: Option<Price>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(RunOptions),
}

fn flag_value<'a>(
    flag: &str,
    iter: &mut impl Iterator<Item = &'a String>,
) -> Result<&'a String, RunnerError> {
    iter.next()
        .ok_or_else(|| RunnerError::Usage(format!("{} requires a value", flag)))
}

fn parse_price(flag: &str, value: &str) -> Result<Price, RunnerError> {
    value
        .parse()
        .map_err(|_| RunnerError::Usage(format!("{} expects a number, got '{}'", flag, value)))
}

/// Parse arguments (without the program name)
pub fn parse_args(args: &[String]) -> Result<Command, RunnerError> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--config" | "-c" => {
                let path = flag_value(arg, &mut iter)?;
                options.source = StrategySource::File(PathBuf::from(path));
            }
            "--preset" | "-p" => {
                let name = flag_value(arg, &mut iter)?;
                options.source = StrategySource::Preset(name.clone());
            }
            "--min" => {
                let value = flag_value(arg, &mut iter)?;
                options.price_min = Some(parse_price(arg, value)?);
            }
            "--max" => {
                let value = flag_value(arg, &mut iter)?;
                options.price_max = Some(parse_price(arg, value)?);
            }
            "--format" | "-f" => {
                options.format = flag_value(arg, &mut iter)?.parse()?;
            }
            other => {
                return Err(RunnerError::Usage(format!("unknown argument '{}'", other)));
            }
        }
    }

    Ok(Command::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let command = parse_args(&[]).unwrap();
        assert_eq!(command, Command::Run(RunOptions::default()));
    }

    #[test]
    fn test_all_flags() {
        let command = parse_args(&args(&[
            "--config", "legs.json", "--min", "50", "--max", "150.5", "--format", "json",
        ]))
        .unwrap();

        assert_eq!(
            command,
            Command::Run(RunOptions {
                source: StrategySource::File(PathBuf::from("legs.json")),
                price_min: Some(dec!(50)),
                price_max: Some(dec!(150.5)),
                format: OutputFormat::Json,
            })
        );
    }

    #[test]
    fn test_help() {
        assert_eq!(
            parse_args(&args(&["-p", "strangle", "--help"])).unwrap(),
            Command::Help
        );
    }

    #[test]
    fn test_usage_errors() {
        assert!(matches!(
            parse_args(&args(&["--min"])),
            Err(RunnerError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&args(&["--max", "lots"])),
            Err(RunnerError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&args(&["--format", "svg"])),
            Err(RunnerError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&args(&["--verbose"])),
            Err(RunnerError::Usage(_))
        ));
    }
}
