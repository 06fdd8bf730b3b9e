//! Capture abstractions over the host platform's camera and decode library
//!
//! This crate never talks to hardware itself. Hosts implement
//! [`CameraProvider`]/[`CameraTrack`] over their media-capture API and
//! [`FrameDecoder`] over their barcode decode library; the session module
//! drives both. Stream acquisition is an explicit async call and the decode
//! loop is a pull subscription, so cancellation is a first-class operation
//! rather than a flag checked inside callbacks.

/// Video constraint construction (facing, resolution, frame rate).
pub mod constraints;

use async_trait::async_trait;

use crate::models::{CaptureError, DecodedCandidate};
use self::constraints::StreamConstraints;

/// Outcome of a single decode attempt against a live frame.
#[derive(Debug)]
pub enum DecodeEvent {
    /// The frame contained a symbol that decoded to a string. The session
    /// validates it immediately and drops it if invalid.
    Candidate(DecodedCandidate),
    /// No symbol in this frame. The normal case; the loop continues.
    Empty,
    /// The decode library reported a transient failure. Logged at debug
    /// level and otherwise treated like an empty frame.
    Glitch(String),
    /// The frame source is gone; no further events will arrive.
    Ended,
}

/// A live camera track held by a session.
///
/// Methods take `&self` because tracks are shared with the torch control
/// handle while a run is in flight; implementations wrap their platform
/// handle in whatever interior mutability it needs.
#[async_trait]
pub trait CameraTrack: Send + Sync {
    /// Resolve once frames are flowing (metadata loaded, playback started).
    async fn ready(&self) -> Result<(), CaptureError>;

    /// Whether the active track exposes a torch (flashlight) capability.
    fn torch_supported(&self) -> bool;

    /// Apply the torch constraint. Best-effort: the session swallows
    /// failures, so implementations may simply report them.
    fn set_torch(&self, on: bool) -> Result<(), CaptureError>;

    /// Stop the track and release the device. The session guards against
    /// repeat calls, but implementations should tolerate them anyway.
    fn stop(&self);
}

/// Opens camera streams on behalf of a session.
#[async_trait]
pub trait CameraProvider: Send {
    /// Request a video-only stream matching `constraints`.
    ///
    /// Resolves once the platform permission prompt is answered. There is
    /// no programmatic deadline — the session stays in the requesting state
    /// until this returns or the run is cancelled, in which case the
    /// returned future is dropped and the request abandoned.
    async fn open(
        &mut self,
        constraints: &StreamConstraints,
    ) -> Result<Box<dyn CameraTrack>, CaptureError>;
}

/// Continuous decode loop over live frames, polled by the session.
///
/// The pull form of a per-frame decode callback: each call resolves with
/// the outcome of the next decode attempt. Cancellation is implicit — the
/// session stops polling and drops the decoder before any new one is
/// attached, so no two decode loops ever run concurrently.
#[async_trait]
pub trait FrameDecoder: Send {
    /// Wait for the next decode attempt and report its outcome.
    async fn next_event(&mut self) -> DecodeEvent;
}
