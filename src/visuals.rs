//! Beat timing for tempo-synced visuals.
//!
//! The renderer itself is out of scope here; this only turns a tempo into the
//! periods the vinyl spin, the pulse and the wave background run at.

use std::time::Duration;

use serde::Serialize;

use crate::tempo::domain::is_valid_bpm;

/// Period used when there is no tempo (or the lookup is still running)
pub const UNSYNCED_PERIOD: Duration = Duration::from_secs(3);

/// Shortest pulse; faster tempos still get a visible pulse
pub const MIN_PULSE: Duration = Duration::from_millis(180);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeatTiming {
    /// One beat
    pub beat_period: Duration,
    /// One full vinyl revolution
    pub rotation_period: Duration,
    /// Length of the scale pulse animation
    pub pulse_duration: Duration,
    /// False when running on the fallback period
    pub is_synced: bool,
}

impl BeatTiming {
    pub fn from_bpm(bpm: Option<f64>) -> Self {
        let synced = bpm.filter(|b| is_valid_bpm(*b));
        // Whole nanoseconds; `as` saturates for absurdly slow tempos
        let beat_period = synced
            .map(|b| Duration::from_nanos((60e9 / b).round() as u64))
            .unwrap_or(UNSYNCED_PERIOD);

        Self {
            beat_period,
            rotation_period: beat_period,
            pulse_duration: beat_period.max(MIN_PULSE),
            is_synced: synced.is_some(),
        }
    }
}

impl Default for BeatTiming {
    fn default() -> Self {
        Self::from_bpm(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_120_bpm_is_half_second() {
        let timing = BeatTiming::from_bpm(Some(120.0));
        assert!(timing.is_synced);
        assert_eq!(timing.beat_period, Duration::from_millis(500));
        assert_eq!(timing.rotation_period, Duration::from_millis(500));
        assert_eq!(timing.pulse_duration, Duration::from_millis(500));
    }

    #[test]
    fn test_absent_or_invalid_uses_fallback() {
        for bpm in [None, Some(0.0), Some(-10.0), Some(f64::NAN), Some(f64::INFINITY)] {
            let timing = BeatTiming::from_bpm(bpm);
            assert!(!timing.is_synced, "{bpm:?}");
            assert_eq!(timing.beat_period, UNSYNCED_PERIOD);
        }
        assert_eq!(BeatTiming::default().beat_period, Duration::from_secs(3));
    }

    #[test]
    fn test_fast_tempo_pulse_is_clamped() {
        // 400 BPM -> 150ms beats, pulse held at 180ms
        let timing = BeatTiming::from_bpm(Some(400.0));
        assert_eq!(timing.beat_period, Duration::from_millis(150));
        assert_eq!(timing.pulse_duration, MIN_PULSE);
    }
}
