use thiserror::Error;

use super::state::FailureKind;

/// Camera stream acquisition and track failures.
///
/// These are the only error conditions a session surfaces to callers; both
/// leave the session in a clean, retryable state.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The media-capture request was rejected by the user or blocked by
    /// policy.
    #[error("camera permission denied")]
    PermissionDenied,
    /// The stream could not be opened or the track died for hardware/OS
    /// reasons.
    #[error("camera device unavailable: {0}")]
    Device(String),
}

impl CaptureError {
    /// The user-visible classification of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            CaptureError::PermissionDenied => FailureKind::PermissionDenied,
            CaptureError::Device(_) => FailureKind::Device,
        }
    }
}

/// Errors returned by a scan session run.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Stream acquisition or the live track failed.
    #[error(transparent)]
    Capture(#[from] CaptureError),
}

impl ScanError {
    /// The user-visible classification of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            ScanError::Capture(err) => err.kind(),
        }
    }
}

/// Audio output failures. Always absorbed and logged, never surfaced to the
/// caller and never allowed to block detection delivery.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The output device could not be opened.
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
    /// Playback of an already-open sink failed.
    #[error("audio playback failed: {0}")]
    Playback(String),
}
