//! Session boundaries between consecutive retained lines.

use chrono::NaiveDateTime;

const SECONDS_PER_HOUR: i64 = 3600;
const MICROS_PER_HOUR: i64 = 3_600_000_000;

/// Whole hours elapsed from `last` to `current`, floored.
///
/// Negative gaps (clock skew, out-of-order exports) floor toward negative
/// infinity at microsecond precision, so `-0.5s` is `-1` hour.
pub fn elapsed_hours(current: NaiveDateTime, last: NaiveDateTime) -> i64 {
    let delta = current - last;
    match delta.num_microseconds() {
        Some(micros) => micros.div_euclid(MICROS_PER_HOUR),
        // Gaps beyond ~292k years overflow microseconds.
        None => delta.num_seconds().div_euclid(SECONDS_PER_HOUR),
    }
}

/// Appends `session_token` to `out` when the gap since the previous retained
/// line reaches `delta_h_threshold` hours.
///
/// Does nothing unless a token is configured and both timestamps are known.
/// Returns `true` if a token was appended.
///
/// ```
/// use chatcorpus::core::session::split_in_sessions;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let mut out = vec!["[Human] hi".to_string()];
/// let inserted = split_in_sessions(
///     day.and_hms_opt(14, 0, 0),
///     day.and_hms_opt(10, 0, 0),
///     &mut out,
///     4,
///     Some("<|session|>"),
/// );
/// assert!(inserted);
/// assert_eq!(out.last().unwrap(), "<|session|>");
/// ```
pub fn split_in_sessions(
    current: Option<NaiveDateTime>,
    last: Option<NaiveDateTime>,
    out: &mut Vec<String>,
    delta_h_threshold: i64,
    session_token: Option<&str>,
) -> bool {
    let (Some(token), Some(current), Some(last)) = (session_token, current, last) else {
        return false;
    };

    if elapsed_hours(current, last) >= delta_h_threshold {
        out.push(token.to_string());
        true
    } else {
        false
    }
}
