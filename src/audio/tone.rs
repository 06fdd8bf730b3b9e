//! Success tone synthesis
//!
//! A short rising sine sweep played on validated detection: 800 Hz up to
//! 1200 Hz over the first 100 ms, with an exponential gain decay that is
//! effectively silent by 200 ms.

/// Total tone length in milliseconds.
pub const TONE_MS: u32 = 200;
/// Sweep window: frequency ramps linearly over this span, then holds.
const SWEEP_MS: u32 = 100;
const START_HZ: f32 = 800.0;
const END_HZ: f32 = 1200.0;
/// Gain decay time constant; e^(-200/35) ≈ 0.003, inaudible.
const DECAY_TAU_MS: f32 = 35.0;

/// Synthesize the success tone as mono f32 samples at `sample_rate`.
pub fn success_tone(sample_rate: u32) -> Vec<f32> {
    let total = (sample_rate * TONE_MS / 1000) as usize;
    let sweep_len = (sample_rate * SWEEP_MS / 1000) as usize;
    let dt = 1.0 / sample_rate as f32;

    let mut samples = Vec::with_capacity(total);
    // Phase accumulation keeps the waveform continuous through the sweep.
    let mut phase = 0.0f32;
    for n in 0..total {
        let freq = if n < sweep_len {
            START_HZ + (END_HZ - START_HZ) * (n as f32 / sweep_len as f32)
        } else {
            END_HZ
        };
        phase += std::f32::consts::TAU * freq * dt;
        let t_ms = n as f32 * dt * 1000.0;
        let gain = (-t_ms / DECAY_TAU_MS).exp();
        samples.push(phase.sin() * gain);
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: u32 = 44_100;

    #[test]
    fn test_tone_length() {
        let samples = success_tone(SR);
        assert_eq!(samples.len(), (SR / 5) as usize); // 200 ms
    }

    #[test]
    fn test_tone_in_range() {
        for s in success_tone(SR) {
            assert!(s.is_finite());
            assert!(s.abs() <= 1.0);
        }
    }

    #[test]
    fn test_envelope_decays_to_silence() {
        let samples = success_tone(SR);
        let early_peak = samples[..(SR / 20) as usize] // first 50 ms
            .iter()
            .fold(0.0f32, |a, s| a.max(s.abs()));
        let tail_peak = samples[samples.len() - (SR / 100) as usize..] // last 10 ms
            .iter()
            .fold(0.0f32, |a, s| a.max(s.abs()));
        assert!(early_peak > 0.8, "early peak {early_peak} too quiet");
        assert!(tail_peak < 0.01, "tail peak {tail_peak} still audible");
    }

    #[test]
    fn test_works_at_other_sample_rates() {
        assert_eq!(success_tone(48_000).len(), 9_600);
        assert_eq!(success_tone(8_000).len(), 1_600);
    }
}
