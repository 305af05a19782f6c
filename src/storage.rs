use crate::errors::AppError;
use crate::store::Store;
use chrono::NaiveDate;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

/// Raw slot contents, `None` when nothing has been saved yet.
pub async fn load_slot(path: &Path) -> Result<Option<Vec<u8>>, std::io::Error> {
    match fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

pub async fn save_slot(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, payload).await
}

/// Rehydrates the store, or seeds and saves a fresh one when the slot is
/// empty, unreadable or fails validation.
pub async fn load_or_seed(path: &Path, today: NaiveDate) -> Result<Store, AppError> {
    match load_slot(path).await {
        Ok(Some(bytes)) => match Store::from_json(&bytes) {
            Ok(store) => {
                info!("loaded tracker state from {}", path.display());
                return Ok(store);
            }
            Err(err) => error!("failed to parse data file: {err}"),
        },
        Ok(None) => info!("no saved state at {}, seeding", path.display()),
        Err(err) => error!("failed to read data file: {err}"),
    }

    let store = Store::seed(today);
    persist_store(path, &store).await?;
    Ok(store)
}

pub async fn persist_store(path: &Path, store: &Store) -> Result<(), AppError> {
    let payload = store.to_json()?;
    save_slot(path, &payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Overwrites the slot with a freshly seeded store. The previous contents
/// stay in place if the write fails.
pub async fn reset_store(path: &Path, today: NaiveDate) -> Result<Store, AppError> {
    warn!("resetting tracker state at {}", path.display());
    let store = Store::seed(today);
    persist_store(path, &store).await?;
    Ok(store)
}
