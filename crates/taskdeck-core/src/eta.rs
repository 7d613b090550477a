//! Conversion between duration shorthand and the canonical `H:MM` form.
//!
//! Canonical form is `H:MM`: hours unbounded, minutes zero-padded to two
//! digits. Normalization runs once when a task is created; parsing and
//! aggregation run whenever the statistics header is refreshed.

use crate::error::InvalidInput;
use crate::task::Task;

/// Normalize free-form duration input into canonical `H:MM`.
///
/// Input that already contains a `:` separator is taken verbatim; its
/// segments are only checked later by [`parse_minutes`]. Input without a
/// separator is a bare minute count, padded and prefixed: `"30"` becomes
/// `"0:30"`, `"5"` becomes `"0:05"`. Normalizing an already-normalized
/// value is a no-op.
///
/// # Errors
/// Returns [`InvalidInput`] if `raw` is empty or, on the colon-free path,
/// not an unsigned integer.
pub fn normalize(raw: &str) -> Result<String, InvalidInput> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InvalidInput::EmptyEta);
    }
    if raw.contains(':') {
        return Ok(raw.to_owned());
    }
    parse_segment(raw)?;
    Ok(format!("0:{raw:0>2}"))
}

/// Parse a stored ETA into total minutes.
///
/// For `H:MM` input the result is hours × 60 + minutes, taken from the
/// first two segments; anything past the second separator is ignored.
/// Segments are not range-checked, so a hand-built `"0:75"` parses to 75
/// minutes. Colon-free input is read directly as a minute count, a
/// defensive path that normalized values never take.
///
/// # Errors
/// Returns [`InvalidInput`] if a used segment is not an unsigned integer,
/// or if the hour count is so large the total does not fit in minutes.
pub fn parse_minutes(eta: &str) -> Result<u64, InvalidInput> {
    let mut segments = eta.split(':');
    let head = segments.next().unwrap_or(eta);
    match segments.next() {
        Some(minutes) => {
            let hours = parse_segment(head)?;
            let minutes = parse_segment(minutes)?;
            hours
                .checked_mul(60)
                .and_then(|in_minutes| in_minutes.checked_add(minutes))
                .ok_or_else(|| InvalidInput::EtaOutOfRange(eta.to_owned()))
        }
        None => parse_segment(head),
    }
}

/// Sum every task's ETA and format the total for display.
///
/// Summation is order-independent. The total renders as
/// `"{hours}h {minutes}m"`, dropping the minutes part when it is zero; an
/// empty collection renders as `"0h"`.
///
/// # Errors
/// Propagates [`InvalidInput`] from any malformed member ETA, and reports
/// an overflowing total the same way. A malformed value signals corrupted
/// state and must surface rather than be counted as zero.
pub fn aggregate<'a, I>(tasks: I) -> Result<String, InvalidInput>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut total: u64 = 0;
    for task in tasks {
        total = total
            .checked_add(parse_minutes(&task.eta)?)
            .ok_or_else(|| InvalidInput::EtaOutOfRange(task.eta.clone()))?;
    }
    let hours = total / 60;
    let minutes = total % 60;
    if minutes == 0 {
        Ok(format!("{hours}h"))
    } else {
        Ok(format!("{hours}h {minutes}m"))
    }
}

fn parse_segment(segment: &str) -> Result<u64, InvalidInput> {
    segment
        .trim()
        .parse()
        .map_err(|_| InvalidInput::EtaSegment(segment.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;
    use crate::task::Status;
    use time::OffsetDateTime;

    fn task_with_eta(eta: &str) -> Task {
        Task {
            id: TaskId::new(),
            title: "task".to_owned(),
            eta: eta.to_owned(),
            status: Status::ToDo,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn bare_minutes_are_prefixed_and_padded() {
        assert_eq!(normalize("30").as_deref(), Ok("0:30"));
        assert_eq!(normalize("5").as_deref(), Ok("0:05"));
    }

    #[test]
    fn colon_input_passes_through_verbatim() {
        assert_eq!(normalize("4:30").as_deref(), Ok("4:30"));
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["30", "5", "4:30", "0:05"] {
            let once = normalize(raw).expect("must normalize");
            let twice = normalize(&once).expect("must normalize again");
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn empty_or_blank_input_is_rejected() {
        assert_eq!(normalize(""), Err(InvalidInput::EmptyEta));
        assert_eq!(normalize("   "), Err(InvalidInput::EmptyEta));
    }

    #[test]
    fn non_numeric_bare_input_is_rejected() {
        assert_eq!(
            normalize("soon"),
            Err(InvalidInput::EtaSegment("soon".to_owned()))
        );
    }

    #[test]
    fn parse_minutes_handles_canonical_values() {
        assert_eq!(parse_minutes("0:30"), Ok(30));
        assert_eq!(parse_minutes("4:30"), Ok(270));
        assert_eq!(parse_minutes("0:05"), Ok(5));
    }

    #[test]
    fn parse_minutes_accepts_out_of_range_minutes() {
        // Not producible via normalize, but tolerated when hand-built.
        assert_eq!(parse_minutes("0:75"), Ok(75));
    }

    #[test]
    fn parse_minutes_reads_bare_counts() {
        assert_eq!(parse_minutes("45"), Ok(45));
    }

    #[test]
    fn parse_minutes_handles_huge_hour_counts() {
        assert_eq!(parse_minutes("100000000:00"), Ok(6_000_000_000));
    }

    #[test]
    fn parse_minutes_reports_totals_past_the_minute_range() {
        let eta = format!("{}:00", u64::MAX);
        assert_eq!(
            parse_minutes(&eta),
            Err(InvalidInput::EtaOutOfRange(eta.clone()))
        );
    }

    #[test]
    fn parse_minutes_rejects_non_numeric_segments() {
        assert_eq!(
            parse_minutes("abc:def"),
            Err(InvalidInput::EtaSegment("abc".to_owned()))
        );
        assert_eq!(
            parse_minutes("1:def"),
            Err(InvalidInput::EtaSegment("def".to_owned()))
        );
    }

    #[test]
    fn aggregate_of_nothing_is_zero_hours() {
        let tasks: Vec<Task> = Vec::new();
        assert_eq!(aggregate(&tasks).as_deref(), Ok("0h"));
    }

    #[test]
    fn aggregate_drops_zero_minute_remainder() {
        let tasks = [task_with_eta("0:30"), task_with_eta("4:30")];
        assert_eq!(aggregate(&tasks).as_deref(), Ok("5h"));
    }

    #[test]
    fn aggregate_keeps_nonzero_remainder() {
        let tasks = [task_with_eta("0:45"), task_with_eta("0:20")];
        assert_eq!(aggregate(&tasks).as_deref(), Ok("1h 5m"));
    }

    #[test]
    fn aggregate_is_order_independent() {
        let mut tasks = vec![task_with_eta("1:10"), task_with_eta("0:55"), task_with_eta("20")];
        let forward = aggregate(&tasks);
        tasks.reverse();
        assert_eq!(forward, aggregate(&tasks));
    }

    #[test]
    fn aggregate_survives_huge_hour_counts() {
        // Normalize passes any colon form through, so the store can hold
        // arbitrarily large hour counts.
        let tasks = [task_with_eta("100000000:00"), task_with_eta("0:30")];
        assert_eq!(aggregate(&tasks).as_deref(), Ok("100000000h 30m"));
    }

    #[test]
    fn aggregate_reports_an_overflowing_total() {
        let max = u64::MAX.to_string();
        let tasks = [task_with_eta(&max), task_with_eta("0:01")];
        assert_eq!(
            aggregate(&tasks),
            Err(InvalidInput::EtaOutOfRange("0:01".to_owned()))
        );
    }

    #[test]
    fn aggregate_propagates_malformed_etas() {
        let tasks = [task_with_eta("0:30"), task_with_eta("abc:def")];
        assert_eq!(
            aggregate(&tasks),
            Err(InvalidInput::EtaSegment("abc".to_owned()))
        );
    }
}
