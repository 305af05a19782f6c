use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("no day record for {date_key}")]
    NotFound { date_key: String },

    #[error("unknown channel: {channel_id}")]
    InvalidChannel { channel_id: String },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("malformed tracker state: {0}")]
    Deserialization(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization(err.to_string())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        let status = match err {
            TrackerError::NotFound { .. } => StatusCode::NOT_FOUND,
            TrackerError::InvalidChannel { .. } | TrackerError::InvalidDate(_) => {
                StatusCode::BAD_REQUEST
            }
            TrackerError::Deserialization(_) | TrackerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_errors_map_to_http_status() {
        let not_found: AppError = TrackerError::NotFound {
            date_key: "2025-03-01".into(),
        }
        .into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert!(not_found.message.contains("2025-03-01"));

        let channel: AppError = TrackerError::InvalidChannel {
            channel_id: "chess".into(),
        }
        .into();
        assert_eq!(channel.status, StatusCode::BAD_REQUEST);

        let corrupt: AppError = TrackerError::Deserialization("eof".into()).into();
        assert_eq!(corrupt.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
