use crate::calendar::{self, date_key};
use crate::catalog;
use crate::errors::TrackerError;
use crate::models::{Aggregate, DayRecord, DayView, ScoreClass, StatsResponse, Status};
use crate::store::Store;
use chrono::{Duration, NaiveDate};

pub fn day_score(store: &Store, date_key: &str) -> Result<usize, TrackerError> {
    Ok(store.get(date_key)?.completed_count())
}

pub fn score_class(score: usize, total: usize) -> ScoreClass {
    if score == total {
        ScoreClass::High
    } else if score * 2 >= total {
        ScoreClass::Medium
    } else {
        ScoreClass::Low
    }
}

pub fn aggregate(store: &Store) -> Aggregate {
    let total_count = store.len() * catalog::channel_count();
    let completed_count = store
        .all_records()
        .map(DayRecord::completed_count)
        .sum::<usize>();

    let completion_rate_percent = if total_count == 0 {
        0
    } else {
        (completed_count as f64 / total_count as f64 * 100.0).round() as u32
    };

    Aggregate {
        completed_count,
        total_count,
        completion_rate_percent,
    }
}

/// Consecutive fully completed days ending at `today`, walking backward.
pub fn current_streak(store: &Store, today: NaiveDate) -> usize {
    if !calendar::in_scope(today) {
        return 0;
    }

    let mut streak = 0;
    let mut date = today;
    while calendar::in_scope(date) {
        let all_completed = store.get(&date_key(date)).is_ok_and(|record| {
            catalog::channels()
                .iter()
                .all(|channel| record.statuses.get(channel.id) == Some(&Status::Completed))
        });
        if !all_completed {
            break;
        }
        streak += 1;
        date -= Duration::days(1);
    }

    streak
}

pub fn day_view(record: &DayRecord, today: NaiveDate) -> DayView {
    let total = catalog::channel_count();
    let score = record.completed_count();
    DayView {
        date: date_key(record.date),
        day_of_week: record.day_of_week.clone(),
        is_weekend: record.is_weekend,
        is_today: calendar::classify(record.date, today).is_today,
        statuses: record.statuses.clone(),
        score,
        total,
        score_class: score_class(score, total),
    }
}

pub fn build_stats_at(today: NaiveDate, store: &Store) -> StatsResponse {
    StatsResponse {
        today: date_key(today),
        aggregate: aggregate(store),
        current_streak: current_streak(store, today),
        days: store
            .all_records()
            .map(|record| day_view(record, today))
            .collect(),
    }
}
