use serde::Serialize;
use wasm_bindgen::prelude::*;

use fretboard::{InstrumentPreset, PatternKind, TheoryError};

#[derive(Serialize)]
struct BindingError {
    message: String,
    kind: &'static str,
}

fn to_js_error(e: TheoryError) -> JsValue {
    let kind = match &e {
        TheoryError::Yaml(_) => "yaml",
        TheoryError::Io { .. } => "io",
        TheoryError::InvalidCatalog { .. } => "catalog",
        TheoryError::InvalidPreset { .. } => "preset",
    };
    let error = BindingError {
        message: e.to_string(),
        kind,
    };
    JsValue::from_str(&serde_json::to_string(&error).unwrap_or_else(|_| error.message.clone()))
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Spelled scale notes as a JSON array (empty for unknown input)
#[wasm_bindgen(js_name = getScaleNotes)]
pub fn get_scale_notes(key: &str, scale_id: &str) -> String {
    to_json(&fretboard::get_scale_notes(key, scale_id))
}

/// Spelled chord notes as a JSON array, in formula order
#[wasm_bindgen(js_name = getChordNotes)]
pub fn get_chord_notes(key: &str, chord_id: &str) -> String {
    to_json(&fretboard::get_chord_notes(key, chord_id))
}

#[wasm_bindgen(js_name = getNoteFromInterval)]
pub fn get_note_from_interval(root: &str, interval_id: &str) -> Option<String> {
    fretboard::get_note_from_interval(root, interval_id)
}

#[wasm_bindgen(js_name = getInterval)]
pub fn get_interval(root: &str, target: &str) -> Option<String> {
    fretboard::get_interval(root, target)
}

/// Default tuning as a JSON array, lowest string first
#[wasm_bindgen(js_name = getDefaultTuning)]
pub fn get_default_tuning(string_count: usize) -> String {
    to_json(&fretboard::get_default_tuning(string_count))
}

#[wasm_bindgen(js_name = getNoteFrequency)]
pub fn get_note_frequency(note: &str, octave: i32) -> Option<f64> {
    fretboard::get_note_frequency(note, octave)
}

#[wasm_bindgen(js_name = getChordFromRoman)]
pub fn get_chord_from_roman(numeral: &str, key: &str) -> Option<String> {
    fretboard::get_chord_from_roman(numeral, key)
}

#[wasm_bindgen(js_name = getEnharmonic)]
pub fn get_enharmonic(note: &str) -> Option<String> {
    fretboard::get_enharmonic(note)
}

/// Pattern info for the info panel as JSON (`null` when unknown)
#[wasm_bindgen(js_name = getPatternInfo)]
pub fn get_pattern_info(kind: &str, pattern_id: &str) -> String {
    let info = match PatternKind::parse(kind) {
        Some(PatternKind::Scale) => fretboard::get_scale_info(pattern_id),
        Some(PatternKind::Chord) => fretboard::get_chord_info(pattern_id),
        None => None,
    };
    to_json(&info)
}

/// Interval display data (name, short name, colour) as JSON
#[wasm_bindgen(js_name = getIntervalInfo)]
pub fn get_interval_info(interval_id: &str) -> String {
    to_json(&fretboard::get_interval_info(interval_id))
}

#[wasm_bindgen(js_name = listScales)]
pub fn list_scales() -> String {
    to_json(&fretboard::list_scales())
}

#[wasm_bindgen(js_name = listChords)]
pub fn list_chords() -> String {
    to_json(&fretboard::list_chords())
}

/// Fret positions of a pattern on a tuning given as a JSON array of note names
#[wasm_bindgen(js_name = getPatternPositions)]
pub fn get_pattern_positions(
    tuning_json: &str,
    kind: &str,
    key: &str,
    pattern_id: &str,
    fret_count: u32,
) -> Result<String, JsValue> {
    let tuning: Vec<String> = serde_json::from_str(tuning_json)
        .map_err(|e| JsValue::from_str(&format!("tuning must be a JSON array of note names: {}", e)))?;
    Ok(to_json(&fretboard::get_pattern_positions(
        tuning.as_slice(), kind, key, pattern_id, fret_count,
    )))
}

#[wasm_bindgen(js_name = listPresets)]
pub fn list_presets() -> String {
    to_json(&fretboard_tunings::list_presets())
}

/// A validated instrument preset as JSON
#[wasm_bindgen(js_name = getPreset)]
pub fn get_preset(name: &str) -> Result<String, JsValue> {
    let preset = fretboard_tunings::get_preset(name)
        .ok_or_else(|| JsValue::from_str(&format!("unknown preset '{}'", name)))?;
    let parsed = InstrumentPreset::from_yaml(&preset.content).map_err(to_js_error)?;
    Ok(to_json(&parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_info_by_kind() {
        assert!(get_pattern_info("chord", "minor7").contains("\"chord\""));
        assert!(get_pattern_info("scale", "dorian").contains("\"scale\""));
        assert_eq!(get_pattern_info("mode", "dorian"), "null");
    }
}
