use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use yeardots_types::DayCell;

/// True when midnight of `day` lies strictly more than one day before `now`.
pub fn is_past_day(day: NaiveDate, now: NaiveDateTime) -> bool {
    let Some(cutoff) = now.checked_sub_signed(Duration::days(1)) else {
        return false;
    };
    day.and_time(NaiveTime::MIN) < cutoff
}

pub fn is_today_day(day: NaiveDate, now: NaiveDateTime) -> bool {
    day == now.date()
}

pub fn classify_day(day: NaiveDate, now: NaiveDateTime) -> DayCell {
    DayCell {
        date: day,
        is_past: is_past_day(day, now),
        is_today: is_today_day(day, now),
    }
}

pub fn classify_days(days: &[NaiveDate], now: NaiveDateTime) -> Vec<DayCell> {
    days.iter().map(|day| classify_day(*day, now)).collect()
}
