use serde::{Deserialize, Serialize};

/// Media type accepted by default.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// File validation rules applied by the intake controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IntakeOptions {
    /// Exact media type a file must declare to be accepted.
    pub accepted_media_type: String,
    /// Size shown to the user as the upload limit, in bytes.
    pub max_size_bytes: u64,
    /// Reject files above `max_size_bytes` instead of treating the limit as
    /// a hint.
    pub enforce_max_size: bool,
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self {
            accepted_media_type: PDF_MEDIA_TYPE.to_owned(),
            max_size_bytes: 10 * 1024 * 1024,
            enforce_max_size: false,
        }
    }
}

impl IntakeOptions {
    /// Size limit to enforce, if enforcement is enabled.
    #[must_use]
    pub fn enforced_limit(&self) -> Option<u64> {
        self.enforce_max_size.then_some(self.max_size_bytes)
    }
}
