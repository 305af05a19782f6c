use crate::calendar::classify;
use crate::errors::TrackerError;
use crate::models::Status;
use crate::store::Store;
use chrono::NaiveDate;

/// Next status for a cell.
///
/// `siblings_complete` reports whether every other channel of the same day is
/// `Completed`; it only matters when the day is in the past, where completing a
/// channel on an otherwise unfinished day yields `Overdue`.
pub fn next_status(current: Status, is_past: bool, siblings_complete: bool) -> Status {
    let candidate = match current {
        Status::Completed => Status::Pending,
        Status::Pending | Status::Overdue | Status::NotDue => Status::Completed,
    };

    if candidate == Status::Completed && is_past && !siblings_complete {
        Status::Overdue
    } else {
        candidate
    }
}

/// Flips one (day, channel) cell and returns the status written.
///
/// Siblings are read before the write and are never modified. Earlier
/// `Overdue` siblings are not promoted once the day becomes complete.
pub fn toggle(
    store: &mut Store,
    date_key: &str,
    channel_id: &str,
    today: NaiveDate,
) -> Result<Status, TrackerError> {
    let record = store.get(date_key)?;
    let current = record
        .statuses
        .get(channel_id)
        .copied()
        .ok_or_else(|| TrackerError::InvalidChannel {
            channel_id: channel_id.to_string(),
        })?;

    let siblings_complete = record
        .statuses
        .iter()
        .filter(|(id, _)| id.as_str() != channel_id)
        .all(|(_, status)| *status == Status::Completed);
    let is_past = classify(record.date, today).is_past;

    let next = next_status(current, is_past, siblings_complete);
    store.set_status(date_key, channel_id, next)?;
    Ok(next)
}
