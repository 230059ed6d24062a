// Backend event domain models
use serde::Deserialize;

use super::samples::Bucket;

pub const AUTH_CODE_ISSUED: &str = "AUTH_CODE_ISSUED";
pub const AUTH_TOKEN_REFRESHED: &str = "AUTH_TOKEN_REFRESHED";
pub const STATS_READY: &str = "STATS_READY";

/// Device-flow verification details shown to the user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCode {
    pub verification_url: String,
    pub user_code: String,
}

/// An inbound event from the Fitness Data Service collaborator.
///
/// `Other` covers every name this panel has no payload mapping for, which is
/// how `*ERROR*` notifications arrive.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    AuthCodeIssued(DeviceCode),
    AuthTokenRefreshed { token: String },
    StatsReady { buckets: Vec<Bucket> },
    Other { name: String },
}

impl BackendEvent {
    pub fn name(&self) -> &str {
        match self {
            Self::AuthCodeIssued(_) => AUTH_CODE_ISSUED,
            Self::AuthTokenRefreshed { .. } => AUTH_TOKEN_REFRESHED,
            Self::StatsReady { .. } => STATS_READY,
            Self::Other { name } => name,
        }
    }

    /// Error routing is by name, case-insensitive, per the backend contract.
    pub fn is_error(&self) -> bool {
        self.name().to_ascii_lowercase().contains("error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detection_is_case_insensitive() {
        let event = BackendEvent::Other {
            name: "Update_Error".to_string(),
        };
        assert!(event.is_error());

        let event = BackendEvent::Other {
            name: "SOMETHING_ELSE".to_string(),
        };
        assert!(!event.is_error());
    }

    #[test]
    fn typed_events_are_not_errors() {
        let event = BackendEvent::AuthTokenRefreshed {
            token: "abc".to_string(),
        };
        assert!(!event.is_error());
        assert_eq!(event.name(), AUTH_TOKEN_REFRESHED);
    }
}
