use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of the calendar window a view covers.
///
/// Variants are ordered by nesting: a year contains months, a month contains
/// weeks, a week contains days. The derived `Ord` sorts coarser windows first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Year,
    Month,
    Week,
    Day,
}

impl Granularity {
    /// Every granularity in drill-down order.
    pub const ALL: [Granularity; 4] = [
        Granularity::Year,
        Granularity::Month,
        Granularity::Week,
        Granularity::Day,
    ];

    /// Next granularity in the drill-down cycle. Day wraps back to Year.
    pub fn advance(self) -> Self {
        match self {
            Granularity::Year => Granularity::Month,
            Granularity::Month => Granularity::Week,
            Granularity::Week => Granularity::Day,
            Granularity::Day => Granularity::Year,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Year => "year",
            Granularity::Month => "month",
            Granularity::Week => "week",
            Granularity::Day => "day",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which of the two remaining-time readouts is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemainingMode {
    /// "42 Days left"
    #[default]
    Days,
    /// "11.5% left"
    Percentage,
}

impl RemainingMode {
    pub fn toggle(self) -> Self {
        match self {
            RemainingMode::Days => RemainingMode::Percentage,
            RemainingMode::Percentage => RemainingMode::Days,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RemainingMode::Days => "days",
            RemainingMode::Percentage => "percentage",
        }
    }
}

impl fmt::Display for RemainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_follows_drill_down_order() {
        assert_eq!(Granularity::Year.advance(), Granularity::Month);
        assert_eq!(Granularity::Month.advance(), Granularity::Week);
        assert_eq!(Granularity::Week.advance(), Granularity::Day);
        assert_eq!(Granularity::Day.advance(), Granularity::Year);
    }

    #[test]
    fn test_four_advances_return_to_start() {
        for start in Granularity::ALL {
            let end = start.advance().advance().advance().advance();
            assert_eq!(end, start);
        }
    }

    #[test]
    fn test_ordering_is_by_nesting() {
        assert!(Granularity::Year < Granularity::Month);
        assert!(Granularity::Month < Granularity::Week);
        assert!(Granularity::Week < Granularity::Day);
    }

    #[test]
    fn test_granularity_display_pads() {
        assert_eq!(Granularity::Month.to_string(), "month");
        assert_eq!(format!("{:<6}|", Granularity::Day), "day   |");
    }

    #[test]
    fn test_granularity_serde_is_lowercase() {
        let json = serde_json::to_string(&Granularity::Week).unwrap();
        assert_eq!(json, "\"week\"");
    }

    #[test]
    fn test_remaining_mode_toggle_is_two_cycle() {
        assert_eq!(RemainingMode::Days.toggle(), RemainingMode::Percentage);
        assert_eq!(RemainingMode::Percentage.toggle(), RemainingMode::Days);
        assert_eq!(RemainingMode::Days.toggle().toggle(), RemainingMode::Days);
    }

    #[test]
    fn test_remaining_mode_serde_is_lowercase() {
        let json = serde_json::to_string(&RemainingMode::Percentage).unwrap();
        assert_eq!(json, "\"percentage\"");
    }
}
