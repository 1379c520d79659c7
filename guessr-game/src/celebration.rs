//! Win celebration: confetti burst and a short "hurrah" chord.
//!
//! The engine never plays anything. The presentation draws a
//! [`CelebrationPlan`] once per win and renders or plays it however the
//! platform allows; every value here is plain data so the plan can be
//! seeded and inspected in tests.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::numbers::round_f64_to_u32;

/// Tuning for the confetti burst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    pub piece_count: u32,
    pub palette: Vec<String>,
    pub min_width_px: u32,
    pub width_jitter_px: u32,
    pub height_ratio: f64,
    pub max_delay_ms: u32,
    pub fade_after_ms: u32,
    pub remove_after_ms: u32,
}

impl CelebrationConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            piece_count: 40,
            palette: ["#f97316", "#f43f5e", "#10b981", "#60a5fa", "#a78bfa", "#f59e0b"]
                .into_iter()
                .map(String::from)
                .collect(),
            min_width_px: 6,
            width_jitter_px: 10,
            height_ratio: 1.6,
            max_delay_ms: 300,
            fade_after_ms: 1800,
            remove_after_ms: 2000,
        }
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

/// One falling confetti rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfettiPiece {
    pub width_px: u32,
    pub height_px: f64,
    pub color: String,
    pub left_pct: f64,
    pub rotation_deg: f64,
    pub delay_ms: u32,
}

impl ConfettiPiece {
    /// Inline style for the piece element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {}px; height: {:.1}px; background: {}; left: {:.2}%; \
             transform: translateY(-10vh) rotate({:.1}deg); animation-delay: {}ms;",
            self.width_px,
            self.height_px,
            self.color,
            self.left_pct,
            self.rotation_deg,
            self.delay_ms
        )
    }
}

/// Oscillator shape for a chord voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sawtooth,
    Triangle,
}

/// A single oscillator in the hurrah chord.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChordVoice {
    pub frequency_hz: f32,
    pub waveform: Waveform,
    pub gain: f32,
    pub stop_after_secs: f64,
}

/// Master gain envelope shared by all voices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub peak: f32,
    pub attack_secs: f64,
    pub floor: f32,
    pub release_secs: f64,
}

impl Envelope {
    pub const HURRAH: Self = Self {
        peak: 0.18,
        attack_secs: 0.02,
        floor: 0.0001,
        release_secs: 1.2,
    };
}

/// Frequencies of the hurrah chord, lowest first.
pub const HURRAH_FREQUENCIES: [f32; 3] = [520.0, 660.0, 780.0];

/// The three-voice chord played on a win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    pub voices: Vec<ChordVoice>,
    pub envelope: Envelope,
}

impl Chord {
    pub fn hurrah<R: Rng>(rng: &mut R) -> Self {
        let voices = HURRAH_FREQUENCIES
            .iter()
            .zip(1_u8..)
            .map(|(&frequency_hz, rank)| ChordVoice {
                frequency_hz,
                waveform: if rank == 1 {
                    Waveform::Sawtooth
                } else {
                    Waveform::Triangle
                },
                gain: 0.6 / f32::from(rank),
                stop_after_secs: 1.0 + rng.gen_range(0.0..0.3),
            })
            .collect();
        Self {
            voices,
            envelope: Envelope::HURRAH,
        }
    }
}

/// Everything the presentation needs to celebrate one win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrationPlan {
    pub confetti: Vec<ConfettiPiece>,
    pub chord: Chord,
    pub fade_after_ms: u32,
    pub remove_after_ms: u32,
}

impl CelebrationPlan {
    pub fn draw<R: Rng>(rng: &mut R, cfg: &CelebrationConfig) -> Self {
        let confetti = (0..cfg.piece_count)
            .map(|_| confetti_piece(rng, cfg))
            .collect();
        Self {
            confetti,
            chord: Chord::hurrah(rng),
            fade_after_ms: cfg.fade_after_ms,
            remove_after_ms: cfg.remove_after_ms,
        }
    }
}

fn confetti_piece<R: Rng>(rng: &mut R, cfg: &CelebrationConfig) -> ConfettiPiece {
    let width_px = cfg.min_width_px + rng.gen_range(0..cfg.width_jitter_px.max(1));
    let color = if cfg.palette.is_empty() {
        "#ffffff".to_string()
    } else {
        cfg.palette[rng.gen_range(0..cfg.palette.len())].clone()
    };
    ConfettiPiece {
        width_px,
        height_px: f64::from(width_px) * cfg.height_ratio,
        color,
        left_pct: rng.gen_range(0.0..100.0),
        rotation_deg: rng.gen_range(0.0..360.0),
        delay_ms: round_f64_to_u32(rng.gen_range(0.0..f64::from(cfg.max_delay_ms.max(1)))),
    }
}
