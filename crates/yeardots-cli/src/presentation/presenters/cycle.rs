use chrono::NaiveDate;
use yeardots_engine::{advance_granularity, compute_heading, compute_remaining};
use yeardots_types::{Granularity, RemainingMode};

use super::year_view::present_remaining;
use crate::presentation::view_models::{CommandResultViewModel, CycleStepViewModel, CycleViewModel};

/// Step 0 is `from`; each following step is one advance further.
pub fn present_cycle(
    reference: NaiveDate,
    from: Granularity,
    steps: u16,
    mode: RemainingMode,
) -> CommandResultViewModel<CycleViewModel> {
    let mut granularity = from;
    let mut rows = Vec::with_capacity(usize::from(steps) + 1);

    for step in 0..=steps {
        rows.push(CycleStepViewModel {
            step,
            granularity,
            heading: compute_heading(granularity, reference),
            remaining: present_remaining(&compute_remaining(granularity, reference), mode),
        });
        granularity = advance_granularity(granularity);
    }

    CommandResultViewModel::new(CycleViewModel { steps: rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_after_day() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let result = present_cycle(reference, Granularity::Week, 3, RemainingMode::Days);
        let order: Vec<Granularity> = result
            .content
            .steps
            .iter()
            .map(|s| s.granularity)
            .collect();

        assert_eq!(
            order,
            vec![
                Granularity::Week,
                Granularity::Day,
                Granularity::Year,
                Granularity::Month
            ]
        );
    }

    #[test]
    fn test_zero_steps_yields_start_only() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let result = present_cycle(reference, Granularity::Year, 0, RemainingMode::Days);
        assert_eq!(result.content.steps.len(), 1);
        assert_eq!(result.content.steps[0].heading.to_string(), "2024");
    }

    #[test]
    fn test_largest_step_count_does_not_overflow() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let result = present_cycle(reference, Granularity::Year, u16::MAX, RemainingMode::Days);
        let steps = &result.content.steps;

        assert_eq!(steps.len(), usize::from(u16::MAX) + 1);
        assert_eq!(steps.last().map(|s| s.step), Some(u16::MAX));
        // 65535 = 4 * 16383 + 3
        assert_eq!(steps.last().map(|s| s.granularity), Some(Granularity::Day));
    }
}
