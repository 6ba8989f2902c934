use chrono::NaiveDate;
use yeardots_types::Granularity;

use crate::window::Window;

/// Days of `sequence` that fall in the same `granularity` window as `reference`.
///
/// Returns a fresh vector and leaves the input untouched. A sequence that does
/// not cover the reference's window yields an empty result.
pub fn filter_view(
    sequence: &[NaiveDate],
    granularity: Granularity,
    reference: NaiveDate,
) -> Vec<NaiveDate> {
    let window = Window::containing(granularity, reference);

    sequence
        .iter()
        .copied()
        .filter(|day| window.contains(*day))
        .collect()
}
