//! Kick-off dates by round.

use crate::models::{GameMatch, TournamentError};
use chrono::{DateTime, Duration, Utc};

/// Round r plays at `start + interval × (r − 1)`.
///
/// Fails with `DateOutOfRange` if a date overflows the calendar; `matches`
/// is left untouched in that case.
pub fn assign_dates(
    matches: &mut [GameMatch],
    start: DateTime<Utc>,
    interval: Duration,
) -> Result<(), TournamentError> {
    let dates = matches
        .iter()
        .map(|m| kick_off(start, interval, m.round))
        .collect::<Result<Vec<_>, _>>()?;
    for (m, date) in matches.iter_mut().zip(dates) {
        m.scheduled_at = Some(date);
    }
    Ok(())
}

fn kick_off(
    start: DateTime<Utc>,
    interval: Duration,
    round: u32,
) -> Result<DateTime<Utc>, TournamentError> {
    i32::try_from(round.saturating_sub(1))
        .ok()
        .and_then(|offset| interval.checked_mul(offset))
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or(TournamentError::DateOutOfRange { round })
}
