use chrono::{DateTime, Utc};

/// A one-time passcode held in memory for a single email address.
///
/// Records are never swept; an expired record stays resident until it is
/// overwritten by a new issuance or consumed by verification. Lookups are
/// expected to treat an expired record as absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpRecord {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    pub fn new(code: String, expires_at: DateTime<Utc>) -> Self {
        Self { code, expires_at }
    }

    /// Expired at the boundary instant: `at >= expires_at`.
    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        at >= self.expires_at
    }

    pub fn matches(&self, code: &str) -> bool {
        self.code == code
    }
}
