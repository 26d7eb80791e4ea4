//! Error types for the payment adapter.

/// Configuration errors raised while assembling startup settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid runtime mode: {0} (expected development, test or production)")]
    InvalidMode(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),
}

/// Gateway-level errors (payment provider access failures).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Provider error: {status} {code} - {description}")]
    Api {
        status: u16,
        code: String,
        description: String,
    },

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Api {
                status: 404,
                description,
                ..
            } => AppError::NotFound(description),
            GatewayError::Api {
                status: 400,
                description,
                ..
            } => AppError::BadRequest(description),
            GatewayError::Api {
                status,
                code,
                description,
            } => AppError::Upstream(format!("{} {}: {}", status, code, description)),
            GatewayError::Http(e) => AppError::Upstream(e),
            GatewayError::Decode(e) => AppError::Internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> GatewayError {
        GatewayError::Api {
            status,
            code: "BAD_REQUEST_ERROR".into(),
            description: "The id provided does not exist".into(),
        }
    }

    #[test]
    fn test_gateway_error_mapping() {
        assert!(matches!(AppError::from(api(404)), AppError::NotFound(_)));
        assert!(matches!(AppError::from(api(400)), AppError::BadRequest(_)));
        assert!(matches!(AppError::from(api(401)), AppError::Upstream(_)));
        assert!(matches!(
            AppError::from(GatewayError::Http("timeout".into())),
            AppError::Upstream(_)
        ));
        assert!(matches!(
            AppError::from(GatewayError::Decode("eof".into())),
            AppError::Internal(_)
        ));
    }
}
