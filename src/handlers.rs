use crate::calendar::{date_key, parse_date_key};
use crate::catalog;
use crate::errors::AppError;
use crate::models::{
    ChannelsResponse, DayView, ResetRequest, StatsResponse, ToggleRequest, ToggleResponse,
};
use crate::state::AppState;
use crate::stats::{build_stats_at, day_score, day_view};
use crate::storage::{persist_store, reset_store};
use crate::transition::toggle;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::info;

pub async fn get_channels() -> Json<ChannelsResponse> {
    Json(ChannelsResponse {
        channels: catalog::channels(),
    })
}

pub async fn get_days(State(state): State<AppState>) -> Json<Vec<DayView>> {
    let store = state.store.lock().await;
    Json(build_stats_at(state.today(), &store).days)
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayView>, AppError> {
    let key = date_key(parse_date_key(&date)?);
    let store = state.store.lock().await;
    let record = store.get(&key)?;
    Ok(Json(day_view(record, state.today())))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.lock().await;
    Json(build_stats_at(state.today(), &store))
}

pub async fn post_toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let key = date_key(parse_date_key(&payload.date)?);
    let channel = payload.channel.trim();
    let today = state.today();

    let mut store = state.store.lock().await;
    let mut next = store.clone();
    let status = toggle(&mut next, &key, channel, today)?;
    persist_store(&state.data_path, &next).await?;
    *store = next;
    info!(date = %key, channel, %status, "toggled");

    Ok(Json(ToggleResponse {
        score: day_score(&store, &key)?,
        total: catalog::channel_count(),
        date: key,
        channel: channel.to_string(),
        status,
    }))
}

pub async fn post_reset(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<StatsResponse>, AppError> {
    if !payload.confirm {
        return Err(AppError::bad_request("reset requires \"confirm\": true"));
    }

    let today = state.today();
    let mut store = state.store.lock().await;
    *store = reset_store(&state.data_path, today).await?;
    info!("tracker state reset");

    Ok(Json(build_stats_at(today, &store)))
}

pub async fn get_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store.lock().await;
    let body = store.to_export_json()?;
    let filename = export_filename(state.today());
    info!("exporting tracker state as {filename}");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

fn export_filename(export_date: chrono::NaiveDate) -> String {
    format!("february-tasks-{}.json", date_key(export_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use crate::store::Store;
    use axum::http::StatusCode;
    use chrono::NaiveDate;

    fn feb(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, day).unwrap()
    }

    /// State whose data path sits under a regular file, so every save fails.
    fn unwritable_state(dir: &tempfile::TempDir, store: Store) -> AppState {
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        AppState::new(blocker.join("state.json"), Some(feb(10)), store)
    }

    #[tokio::test]
    async fn failed_save_leaves_toggle_unapplied() {
        let dir = tempfile::tempdir().unwrap();
        let state = unwritable_state(&dir, Store::seed(feb(10)));

        let result = post_toggle(
            State(state.clone()),
            Json(ToggleRequest {
                date: "2025-02-10".into(),
                channel: "gfg".into(),
            }),
        )
        .await;
        let err = result.err().expect("save should fail");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let store = state.store.lock().await;
        assert_eq!(store.status("2025-02-10", "gfg").unwrap(), Status::Pending);
    }

    #[tokio::test]
    async fn failed_save_leaves_reset_unapplied() {
        let dir = tempfile::tempdir().unwrap();
        let mut progress = Store::seed(feb(10));
        crate::transition::toggle(&mut progress, "2025-02-10", "mimo", feb(10)).unwrap();
        let state = unwritable_state(&dir, progress.clone());

        let result = post_reset(State(state.clone()), Json(ResetRequest { confirm: true })).await;
        let err = result.err().expect("save should fail");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(*state.store.lock().await, progress);
    }

    #[test]
    fn export_filename_carries_export_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(export_filename(date), "february-tasks-2026-10-18.json");
    }
}
