//! Proleptic-Gregorian calendar arithmetic
//!
//! The dump's timestamp domain reaches from 4713 BC to well past year
//! 294,000, which exceeds the range of the common datetime crates. This
//! module does the required civil-date/day-count conversions directly with
//! checked integer arithmetic, so an absurd year in a payload degrades to
//! an invalid value instead of a panic.

const MS_PER_SECOND: i64 = 1000;
const MS_PER_DAY: i64 = 86_400 * MS_PER_SECOND;

/// True if `year` is a leap year in the proleptic Gregorian calendar
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`; `month` must be 1..=12
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since 1970-01-01 for a civil date, valid for any year that fits
/// the intermediate arithmetic
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 } as i64;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date `(year, month, day)` for a day count since 1970-01-01
pub fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if month <= 2 { y + 1 } else { y }, month, day)
}

/// UTC epoch milliseconds for a civil timestamp
///
/// Returns `None` when the fields are not a real calendar instant or the
/// result overflows `i64` milliseconds.
pub fn epoch_ms(
    year: i64,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<i64> {
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }
    let days = days_from_civil(year, month, day);
    let day_ms = (hour as i64 * 3600 + minute as i64 * 60 + second as i64) * MS_PER_SECOND;
    days.checked_mul(MS_PER_DAY)?.checked_add(day_ms)
}

/// Civil year an epoch-millisecond instant falls in
pub fn year_of_instant(instant_ms: i64) -> i64 {
    civil_from_days(instant_ms.div_euclid(MS_PER_DAY)).0
}

/// Render an instant as `%Y-%m-%dT%H:%M:%S%z` in UTC, e.g.
/// `2023-09-13T00:00:00+0000`
pub fn format_sql_timestamp(instant_ms: i64) -> String {
    let days = instant_ms.div_euclid(MS_PER_DAY);
    let mut rem = instant_ms.rem_euclid(MS_PER_DAY) / MS_PER_SECOND;
    let (year, month, day) = civil_from_days(days);
    let hour = rem / 3600;
    rem %= 3600;
    let minute = rem / 60;
    let second = rem % 60;
    let year_str = if year < 0 {
        format!("-{:04}", -year)
    } else {
        format!("{:04}", year)
    };
    format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}+0000",
        year_str, month, day, hour, minute, second
    )
}
