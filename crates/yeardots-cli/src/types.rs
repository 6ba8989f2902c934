use clap::ValueEnum;
use std::fmt;
use yeardots_types::{Granularity, RemainingMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum GranularityArg {
    Year,
    Month,
    Week,
    Day,
}

impl fmt::Display for GranularityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Granularity::from(*self), f)
    }
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Year => Granularity::Year,
            GranularityArg::Month => Granularity::Month,
            GranularityArg::Week => Granularity::Week,
            GranularityArg::Day => Granularity::Day,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RemainingArg {
    Days,
    #[value(alias = "percent")]
    Percentage,
}

impl fmt::Display for RemainingArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&RemainingMode::from(*self), f)
    }
}

impl From<RemainingArg> for RemainingMode {
    fn from(arg: RemainingArg) -> Self {
        match arg {
            RemainingArg::Days => RemainingMode::Days,
            RemainingArg::Percentage => RemainingMode::Percentage,
        }
    }
}
