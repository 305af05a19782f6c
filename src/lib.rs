pub mod app;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod transition;

pub use app::router;
pub use config::Config;
pub use errors::{AppError, TrackerError};
pub use models::Status;
pub use state::AppState;
pub use storage::load_or_seed;
pub use store::Store;
