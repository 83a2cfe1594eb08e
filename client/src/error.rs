use thiserror::Error;

/// Error taxonomy for backend requests.
///
/// The reconciler's fallback policy branches on exactly three kinds:
/// authorization failures (redirect to login), not-found (negative signal for
/// the payment-proof check), and everything else (degrade or fail per signal).
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("authorization failed (HTTP {0})")]
    Unauthorized(u16),

    #[error("resource not found")]
    NotFound,

    #[error("backend returned HTTP {0}")]
    Http(u16),

    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from backend: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Whether this failure should send the user to the login surface.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Whether the backend reported the resource as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Classify a non-success HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(status),
            404 => Self::NotFound,
            _ => Self::Http(status),
        }
    }
}
