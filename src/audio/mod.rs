//! Audio feedback for validated detections
//!
//! The output sink is an explicitly owned, lazily constructed resource
//! shared across sessions: [`AudioFeedback::acquire`] builds the sink on
//! first use and [`AudioFeedback::release`] drops it. Construction and
//! playback failures are logged and absorbed — audio never blocks or fails
//! detection delivery.

/// Success tone synthesis.
pub mod tone;

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::models::AudioError;

/// Sample rate used for tone playback.
pub const SAMPLE_RATE: u32 = 44_100;

/// Host-supplied audio output device.
pub trait AudioSink: Send {
    /// Play a buffer of mono f32 samples at the given rate.
    fn play(&mut self, samples: &[f32], sample_rate: u32) -> Result<(), AudioError>;
}

/// Factory that constructs the platform sink on first use.
pub type SinkFactory = Box<dyn Fn() -> Result<Box<dyn AudioSink>, AudioError> + Send + Sync>;

struct Inner {
    factory: SinkFactory,
    sink: Option<Box<dyn AudioSink>>,
    /// Latched after a failed construction so every detection does not
    /// retry the device. Cleared by `release`.
    failed: bool,
    /// Bumped by `release` so a sink checked out for playback is not put
    /// back after the handle was released underneath it.
    epoch: u64,
}

/// Clonable handle to the shared audio output.
///
/// All clones refer to the same underlying sink, so one scanner tree reuses
/// a single output across sessions.
#[derive(Clone)]
pub struct AudioFeedback {
    inner: Arc<Mutex<Inner>>,
}

impl AudioFeedback {
    /// Create a handle that builds its sink from `factory` on first use.
    pub fn new(factory: SinkFactory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                factory,
                sink: None,
                failed: false,
                epoch: 0,
            })),
        }
    }

    /// A handle with no output at all; playback becomes a no-op.
    pub fn disabled() -> Self {
        Self::new(Box::new(|| {
            Err(AudioError::Unavailable("audio disabled".into()))
        }))
    }

    /// Construct the sink now instead of on first playback.
    pub fn acquire(&self) {
        let mut inner = self.inner.lock();
        ensure_sink(&mut inner);
    }

    /// Drop the sink. The next playback (or `acquire`) rebuilds it, so a
    /// previously failed device gets another chance.
    pub fn release(&self) {
        let mut inner = self.inner.lock();
        if inner.sink.take().is_some() {
            debug!("audio sink released");
        }
        inner.failed = false;
        inner.epoch += 1;
    }

    /// Play the success tone. Best-effort: failures are logged and
    /// swallowed, never returned.
    ///
    /// The sink is checked out of the handle for the duration of the call,
    /// so a `play` implementation may itself touch this handle (release it,
    /// say, from a completion callback) without deadlocking.
    pub fn play_success(&self) {
        let (mut sink, epoch) = {
            let mut inner = self.inner.lock();
            ensure_sink(&mut inner);
            match inner.sink.take() {
                Some(sink) => (sink, inner.epoch),
                None => return,
            }
        };
        let samples = tone::success_tone(SAMPLE_RATE);
        if let Err(err) = sink.play(&samples, SAMPLE_RATE) {
            warn!(%err, "success tone playback failed");
        }
        let mut inner = self.inner.lock();
        // A release that happened mid-playback wins: the sink stays dropped.
        if inner.epoch == epoch && inner.sink.is_none() {
            inner.sink = Some(sink);
        }
    }
}

fn ensure_sink(inner: &mut Inner) {
    if inner.sink.is_none() && !inner.failed {
        match (inner.factory)() {
            Ok(sink) => {
                debug!("audio sink constructed");
                inner.sink = Some(sink);
            }
            Err(err) => {
                warn!(%err, "audio sink unavailable");
                inner.failed = true;
            }
        }
    }
}
