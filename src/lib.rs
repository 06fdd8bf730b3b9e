//! barscan - camera barcode capture sessions
//!
//! A pure Rust library for driving a camera barcode scan session: stream
//! acquisition, a cancellable decode loop, symbology checksum validation
//! (EAN-13, EAN-8, UPC-A, plus a permissive Code128/Code39 fallback), torch
//! control, and audio success feedback.
//!
//! The host platform's camera and decode library plug in behind the
//! [`capture`] traits; this crate owns the session state machine, the
//! validation rules, and the success-tone synthesis. It performs no I/O of
//! its own.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Audio feedback (success tone synthesis and the shared output sink)
pub mod audio;
/// Capture abstractions (camera provider/track and frame decoder traits)
pub mod capture;
/// Core data structures (states, symbologies, configuration, errors)
pub mod models;
/// Scan session state machine, cancellation, and torch control
pub mod session;
/// Symbology validation (EAN/UPC checksums and the permissive fallback)
pub mod validation;

pub use audio::{AudioFeedback, AudioSink, SinkFactory};
pub use capture::constraints::StreamConstraints;
pub use capture::{CameraProvider, CameraTrack, DecodeEvent, FrameDecoder};
pub use models::{
    AudioError, CaptureError, DecodedCandidate, Facing, FailureKind, ScanError, ScanState,
    ScannerConfig, Symbology, Theme, ValidatedBarcode,
};
pub use session::{CancelHandle, ScanOutcome, ScanSession, TorchControl, CONFIRM_DELAY};
pub use validation::{is_valid, validate};

/// Session factory carrying the shared configuration and audio output.
///
/// One `Scanner` typically lives at the top of a component tree; each open
/// of the scanner UI builds a fresh [`ScanSession`] from it, wired to the
/// same audio handle so the output device is reused across sessions.
pub struct Scanner {
    config: ScannerConfig,
    audio: Option<AudioFeedback>,
}

impl Scanner {
    /// Create a scanner with the given configuration and no audio output.
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            audio: None,
        }
    }

    /// Attach a shared audio output used by every session built here.
    pub fn with_audio(mut self, audio: AudioFeedback) -> Self {
        self.audio = Some(audio);
        self
    }

    /// The configuration sessions are built with.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Build a session wired with this scanner's config and audio handle.
    ///
    /// The session starts idle; hosts honoring `auto_start` call
    /// [`ScanSession::run`] immediately, others wait for an explicit start
    /// action.
    pub fn session<P: CameraProvider, D: FrameDecoder>(
        &self,
        provider: P,
        decoder: D,
    ) -> ScanSession<P, D> {
        let mut session = ScanSession::new(provider, decoder, self.config.clone());
        if let Some(audio) = &self.audio {
            session = session.with_audio(audio.clone());
        }
        session
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScannerConfig::default())
    }
}
