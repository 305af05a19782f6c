use crate::store::Store;
use chrono::{Local, NaiveDate};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub today_override: Option<NaiveDate>,
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, today_override: Option<NaiveDate>, store: Store) -> Self {
        Self {
            data_path,
            today_override,
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
