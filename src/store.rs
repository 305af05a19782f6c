use crate::calendar::{self, classify};
use crate::catalog;
use crate::errors::TrackerError;
use crate::models::{DayRecord, Status};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Every in-scope day keyed by `YYYY-MM-DD`.
///
/// A `Store` always holds exactly one record per scope date, and every record
/// holds exactly one status per catalog channel. Both constructors (`seed` and
/// `from_json`) enforce this, and `set_status` cannot add or remove entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Store {
    days: BTreeMap<String, DayRecord>,
}

impl Store {
    pub fn seed(today: NaiveDate) -> Self {
        let days = calendar::scope_dates()
            .map(|date| {
                let class = classify(date, today);
                let initial = if class.is_future {
                    Status::NotDue
                } else {
                    Status::Pending
                };
                let statuses = catalog::channels()
                    .iter()
                    .map(|channel| (channel.id.to_string(), initial))
                    .collect();
                let record = DayRecord {
                    date,
                    is_weekend: class.is_weekend,
                    day_of_week: calendar::weekday_label(date).to_string(),
                    statuses,
                };
                (calendar::date_key(date), record)
            })
            .collect();

        Self { days }
    }

    pub fn get(&self, date_key: &str) -> Result<&DayRecord, TrackerError> {
        self.days.get(date_key).ok_or_else(|| TrackerError::NotFound {
            date_key: date_key.to_string(),
        })
    }

    pub fn status(&self, date_key: &str, channel_id: &str) -> Result<Status, TrackerError> {
        self.get(date_key)?
            .statuses
            .get(channel_id)
            .copied()
            .ok_or_else(|| TrackerError::InvalidChannel {
                channel_id: channel_id.to_string(),
            })
    }

    pub(crate) fn set_status(
        &mut self,
        date_key: &str,
        channel_id: &str,
        status: Status,
    ) -> Result<(), TrackerError> {
        let record = self
            .days
            .get_mut(date_key)
            .ok_or_else(|| TrackerError::NotFound {
                date_key: date_key.to_string(),
            })?;
        let slot = record
            .statuses
            .get_mut(channel_id)
            .ok_or_else(|| TrackerError::InvalidChannel {
                channel_id: channel_id.to_string(),
            })?;
        *slot = status;
        Ok(())
    }

    /// Records in ascending date order.
    pub fn all_records(&self) -> impl Iterator<Item = &DayRecord> {
        // ISO date keys sort chronologically.
        self.days.values()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn to_json(&self) -> Result<Vec<u8>, TrackerError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn to_export_json(&self) -> Result<String, TrackerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, TrackerError> {
        let days: BTreeMap<String, DayRecord> = serde_json::from_slice(bytes)?;
        let store = Self { days };
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), TrackerError> {
        if self.days.len() != calendar::DAYS_IN_SCOPE as usize {
            return Err(TrackerError::Deserialization(format!(
                "expected {} days, found {}",
                calendar::DAYS_IN_SCOPE,
                self.days.len()
            )));
        }

        for date in calendar::scope_dates() {
            let key = calendar::date_key(date);
            let record = self.days.get(&key).ok_or_else(|| {
                TrackerError::Deserialization(format!("missing day {key}"))
            })?;

            if record.date != date {
                return Err(TrackerError::Deserialization(format!(
                    "day {key} carries date {}",
                    record.date
                )));
            }

            if record.statuses.len() != catalog::channel_count() {
                return Err(TrackerError::Deserialization(format!(
                    "day {key} has {} statuses, expected {}",
                    record.statuses.len(),
                    catalog::channel_count()
                )));
            }

            if let Some(channel) = catalog::channels()
                .iter()
                .find(|channel| !record.statuses.contains_key(channel.id))
            {
                return Err(TrackerError::Deserialization(format!(
                    "day {key} is missing channel {}",
                    channel.id
                )));
            }
        }

        Ok(())
    }
}
