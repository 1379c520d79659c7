//! WebAudio playback of the win chord.
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::game::{Chord, Waveform};

const fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sawtooth => OscillatorType::Sawtooth,
        Waveform::Triangle => OscillatorType::Triangle,
    }
}

/// Context of the chord currently sounding, if any.
pub type AudioSlot = Rc<RefCell<Option<AudioContext>>>;

/// Schedule every voice of `chord` on a fresh audio context.
///
/// The caller owns the returned context and closes it to cut the sound short.
///
/// # Errors
/// Returns an error when WebAudio is unavailable or a node cannot be created.
pub fn play_chord(chord: &Chord) -> Result<AudioContext, JsValue> {
    let ctx = AudioContext::new()?;
    let now = ctx.current_time();
    let env = chord.envelope;

    let master = ctx.create_gain()?;
    let level = master.gain();
    level.set_value_at_time(0.0, now)?;
    level.linear_ramp_to_value_at_time(env.peak, now + env.attack_secs)?;
    level.exponential_ramp_to_value_at_time(env.floor, now + env.release_secs)?;
    master.connect_with_audio_node(&ctx.destination())?;

    for voice in &chord.voices {
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.set_type(oscillator_type(voice.waveform));
        osc.frequency().set_value_at_time(voice.frequency_hz, now)?;
        gain.gain().set_value_at_time(voice.gain, now)?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&master)?;
        osc.start_with_when(now)?;
        osc.stop_with_when(now + voice.stop_after_secs)?;
    }
    Ok(ctx)
}

/// Play the chord, logging instead of failing when audio is blocked.
pub fn play_chord_or_warn(chord: &Chord) -> Option<AudioContext> {
    play_chord(chord)
        .map_err(|err| {
            log::warn!(
                "Celebration sound unavailable: {}",
                crate::dom::js_error_message(&err)
            );
        })
        .ok()
}

/// Close whatever context `slot` holds, silencing it immediately.
pub fn stop(slot: &AudioSlot) {
    let Some(ctx) = slot.borrow_mut().take() else {
        return;
    };
    if let Err(err) = ctx.close() {
        log::warn!(
            "Failed to close audio context: {}",
            crate::dom::js_error_message(&err)
        );
    }
}

/// Replace any sounding chord with `chord`.
pub fn play_into(slot: &AudioSlot, chord: &Chord) {
    stop(slot);
    *slot.borrow_mut() = play_chord_or_warn(chord);
}
