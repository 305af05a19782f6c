use crate::calendar::parse_date_key;
use crate::errors::TrackerError;
use chrono::NaiveDate;
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/state.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// Pins "today" instead of reading the local clock.
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self, TrackerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TrackerError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|err| TrackerError::Config(format!("PORT={value}: {err}")))?,
            None => DEFAULT_PORT,
        };

        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let today = match lookup("TRACKER_TODAY") {
            Some(value) if !value.trim().is_empty() => Some(
                parse_date_key(&value)
                    .map_err(|err| TrackerError::Config(format!("TRACKER_TODAY: {err}")))?,
            ),
            _ => None,
        };

        Ok(Self {
            port,
            data_path,
            today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/state.json"));
        assert!(config.today.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9090"),
            ("APP_DATA_PATH", "/tmp/tracker.json"),
            ("TRACKER_TODAY", "2025-02-10"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.data_path, PathBuf::from("/tmp/tracker.json"));
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2025, 2, 10));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("PORT", "eighty")])),
            Err(TrackerError::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("TRACKER_TODAY", "tomorrow")])),
            Err(TrackerError::Config(_))
        ));
    }
}
