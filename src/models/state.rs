/// Scan session lifecycle state.
///
/// Transitions are driven by [`ScanSession::run`](crate::session::ScanSession::run):
/// `Idle` → `RequestingPermission` → `Ready` → `Scanning` → `Detected` →
/// `Idle`, with `Failed` reachable from the acquisition steps and any state
/// returning to `Idle` on cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No capture resources held. Initial and terminal state.
    Idle,
    /// A stream request is outstanding with the platform permission prompt.
    /// There is no programmatic deadline; this state lasts until the prompt
    /// resolves or the session is cancelled.
    RequestingPermission,
    /// Stream granted; waiting for frames to start flowing.
    Ready,
    /// Decode loop running against live frames.
    Scanning,
    /// A candidate passed validation; the confirmation window is in
    /// progress and no further frames are decoded.
    Detected,
    /// Stream acquisition or the frame source failed. Retryable: the next
    /// `run` call transitions back to `RequestingPermission`.
    Failed(FailureKind),
}

impl ScanState {
    /// Whether the session currently holds a camera track in this state.
    pub fn holds_camera(&self) -> bool {
        matches!(
            self,
            ScanState::Ready | ScanState::Scanning | ScanState::Detected
        )
    }
}

/// User-visible failure classification.
///
/// These are the only two conditions surfaced to callers; everything else
/// (torch failures, audio failures, decode noise) is absorbed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The media-capture request was rejected by the user or blocked by
    /// policy. Not retried automatically.
    PermissionDenied,
    /// The stream could not be opened or died for hardware/OS reasons
    /// (no camera, camera busy, track ended).
    Device,
}
