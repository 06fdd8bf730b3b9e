//! Scan session orchestration
//!
//! [`ScanSession`] drives the capture state machine: idle →
//! requesting-permission → ready → scanning → detected → idle, with failure
//! states on acquisition errors and a cooperative, idempotent teardown path.
//! At most one validated barcode is emitted per run; after the first valid
//! candidate the decode loop stops and no further frames are processed.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::audio::AudioFeedback;
use crate::capture::constraints::StreamConstraints;
use crate::capture::{CameraProvider, CameraTrack, DecodeEvent, FrameDecoder};
use crate::models::{
    CaptureError, ScanError, ScanState, ScannerConfig, ValidatedBarcode,
};
use crate::validation::validate;

/// Pause between a validated detection and the return to idle, during which
/// hosts show success feedback and no further frames are decoded.
pub const CONFIRM_DELAY: Duration = Duration::from_millis(1500);

/// Cooperative cancellation for a running session.
///
/// Clonable so hosts can wire it to a close button or an unmount hook.
/// [`cancel`](CancelHandle::cancel) is idempotent, infallible, and safe to
/// call from any state, including after the run has already finished.
#[derive(Clone)]
pub struct CancelHandle {
    flag: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    /// A fresh, un-cancelled handle. One handle belongs to one run; a
    /// cancelled handle stays cancelled.
    pub fn new() -> Self {
        Self {
            flag: Arc::new(watch::Sender::new(false)),
        }
    }

    /// Request cancellation. Repeat calls are no-ops.
    pub fn cancel(&self) {
        self.flag.send_replace(true);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.flag.borrow()
    }

    /// Resolve when cancellation is requested, immediately if it already
    /// was.
    pub async fn cancelled(&self) {
        let mut rx = self.flag.subscribe();
        // The handle itself keeps the sender alive, so this cannot fail
        // while `self` is borrowed.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A candidate passed validation. The payload is delivered exactly once
    /// per session, here.
    Detected(ValidatedBarcode),
    /// The session was cancelled before any valid detection.
    Cancelled,
}

/// Torch (flashlight) control for the active track.
///
/// Clonable so hosts can hand it to a toggle button while the run borrows
/// the session. All operations are best-effort and never fail: without a
/// live track, without hardware support, or with the toggle disabled in
/// config they are silent no-ops.
#[derive(Clone)]
pub struct TorchControl {
    inner: Arc<Mutex<TorchInner>>,
}

struct TorchInner {
    track: Option<Arc<dyn CameraTrack>>,
    /// Config gate: `torch_toggle=false` disables the control surface even
    /// on capable hardware.
    allowed: bool,
}

impl TorchControl {
    fn new(allowed: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TorchInner {
                track: None,
                allowed,
            })),
        }
    }

    fn attach(&self, track: Arc<dyn CameraTrack>) {
        self.inner.lock().track = Some(track);
    }

    fn clear(&self) {
        self.inner.lock().track = None;
    }

    /// Whether a toggle should be offered right now: enabled in config and
    /// the live track reports the capability.
    pub fn available(&self) -> bool {
        let inner = self.inner.lock();
        inner.allowed && inner.track.as_ref().is_some_and(|t| t.torch_supported())
    }

    /// Apply the torch constraint to the live track. Failures are logged
    /// and swallowed; the torch is a capability, not a requirement.
    pub fn set(&self, on: bool) {
        let inner = self.inner.lock();
        if !inner.allowed {
            return;
        }
        match inner.track.as_ref() {
            Some(track) if track.torch_supported() => {
                if let Err(err) = track.set_torch(on) {
                    debug!(%err, "torch toggle failed");
                }
            }
            _ => debug!(on, "torch not available; toggle ignored"),
        }
    }
}

/// A single scan session: owns the camera track, the decode subscription,
/// and the state machine.
///
/// One value is one session at a time — `run` takes `&mut self`, so a new
/// stream request can never be issued while one is in flight, and a new run
/// always releases the previous track before acquiring.
pub struct ScanSession<P: CameraProvider, D: FrameDecoder> {
    provider: P,
    decoder: D,
    config: ScannerConfig,
    constraints: StreamConstraints,
    audio: Option<AudioFeedback>,
    state_tx: watch::Sender<ScanState>,
    torch: TorchControl,
    track: Option<Arc<dyn CameraTrack>>,
}

impl<P: CameraProvider, D: FrameDecoder> ScanSession<P, D> {
    /// Create a session in the idle state. Nothing is acquired until
    /// [`run`](Self::run).
    pub fn new(provider: P, decoder: D, config: ScannerConfig) -> Self {
        let constraints = StreamConstraints::for_config(&config);
        let torch = TorchControl::new(config.torch_toggle);
        Self {
            provider,
            decoder,
            config,
            constraints,
            audio: None,
            state_tx: watch::Sender::new(ScanState::Idle),
            torch,
            track: None,
        }
    }

    /// Attach a shared audio output for success feedback.
    pub fn with_audio(mut self, audio: AudioFeedback) -> Self {
        self.audio = Some(audio);
        self
    }

    /// The configuration this session was built with. Hosts consult
    /// `auto_start` and `theme` from here.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> ScanState {
        *self.state_tx.borrow()
    }

    /// Watch channel of state transitions, for hosts that render state.
    pub fn subscribe(&self) -> watch::Receiver<ScanState> {
        self.state_tx.subscribe()
    }

    /// Torch control handle, usable while a run is in flight.
    pub fn torch(&self) -> TorchControl {
        self.torch.clone()
    }

    /// Stop and drop the held camera track, if any.
    ///
    /// Idempotent: a second call, or a call racing the success path (for
    /// example from an unmount hook and a detection finishing at once), is
    /// a no-op. Also invoked from `Drop`. State transitions stay with
    /// `run`; this only tears down the resource.
    pub fn release(&mut self) {
        self.torch.clear();
        if let Some(track) = self.track.take() {
            track.stop();
            debug!("camera track stopped");
        }
    }

    fn set_state(&self, next: ScanState) {
        let prev = self.state_tx.send_replace(next);
        if prev != next {
            debug!(?prev, ?next, "session state");
        }
    }

    /// Drive one full scan: acquire the stream, poll the decode loop, and
    /// resolve with the first validated barcode or with cancellation.
    ///
    /// On acquisition failure the session lands in
    /// [`ScanState::Failed`] and the error is returned; calling `run`
    /// again retries from there. Every exit path — success, cancel,
    /// failure — releases the camera exactly once.
    pub async fn run(&mut self, cancel: &CancelHandle) -> Result<ScanOutcome, ScanError> {
        // A prior run's track must be fully released before a new stream
        // request goes out; no two camera handles may coexist.
        self.release();

        if cancel.is_cancelled() {
            self.set_state(ScanState::Idle);
            return Ok(ScanOutcome::Cancelled);
        }

        self.set_state(ScanState::RequestingPermission);
        // Select arms only produce values; `self` is touched again once the
        // competing futures are gone.
        let opened = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            opened = self.provider.open(&self.constraints) => Some(opened),
        };
        let Some(opened) = opened else {
            info!("scan cancelled while requesting stream");
            self.set_state(ScanState::Idle);
            return Ok(ScanOutcome::Cancelled);
        };

        let track: Arc<dyn CameraTrack> = match opened {
            Ok(track) => Arc::from(track),
            Err(err) => {
                warn!(%err, "stream acquisition failed");
                self.set_state(ScanState::Failed(err.kind()));
                return Err(ScanError::Capture(err));
            }
        };
        self.torch.attach(track.clone());
        self.track = Some(track.clone());
        self.set_state(ScanState::Ready);

        let readied = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            readied = track.ready() => Some(readied),
        };
        let Some(readied) = readied else {
            info!("scan cancelled before playback started");
            self.release();
            self.set_state(ScanState::Idle);
            return Ok(ScanOutcome::Cancelled);
        };
        if let Err(err) = readied {
            warn!(%err, "track never became ready");
            self.release();
            self.set_state(ScanState::Failed(err.kind()));
            return Err(ScanError::Capture(err));
        }

        self.set_state(ScanState::Scanning);
        info!(facing = ?self.constraints.facing, "scanning");

        loop {
            let event = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                event = self.decoder.next_event() => Some(event),
            };
            let Some(event) = event else {
                info!("scan cancelled");
                self.release();
                self.set_state(ScanState::Idle);
                return Ok(ScanOutcome::Cancelled);
            };

            match event {
                DecodeEvent::Candidate(candidate) => {
                    if let Some(symbology) = validate(&candidate.raw) {
                        let barcode = ValidatedBarcode {
                            payload: candidate.raw,
                            symbology,
                            at: candidate.at,
                        };
                        return self.confirm(barcode, cancel).await;
                    }
                    debug!(len = candidate.raw.len(), "candidate failed validation");
                }
                DecodeEvent::Empty => {}
                DecodeEvent::Glitch(message) => {
                    debug!(%message, "decoder glitch ignored");
                }
                DecodeEvent::Ended => {
                    warn!("frame source ended mid-scan");
                    self.release();
                    let err = CaptureError::Device("frame source ended".into());
                    self.set_state(ScanState::Failed(err.kind()));
                    return Err(ScanError::Capture(err));
                }
            }
        }
    }

    /// Terminal success path. Plays the tone, holds the confirmation
    /// window, releases the camera, and delivers the barcode.
    ///
    /// Cancellation during the window only shortens it: the barcode was
    /// already validated and is still delivered, and no timer outlives the
    /// session.
    async fn confirm(
        &mut self,
        barcode: ValidatedBarcode,
        cancel: &CancelHandle,
    ) -> Result<ScanOutcome, ScanError> {
        self.set_state(ScanState::Detected);
        info!(symbology = barcode.symbology.name(), "barcode detected");

        if let Some(audio) = &self.audio {
            audio.play_success();
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(CONFIRM_DELAY) => {}
        }

        self.release();
        self.set_state(ScanState::Idle);
        Ok(ScanOutcome::Detected(barcode))
    }
}

impl<P: CameraProvider, D: FrameDecoder> Drop for ScanSession<P, D> {
    fn drop(&mut self) {
        self.release();
    }
}
