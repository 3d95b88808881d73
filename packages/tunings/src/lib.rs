//! Instrument tuning presets compiled into the crate.
//!
//! Each preset is a YAML document under `presets/<instrument>/<name>.yaml`, named
//! here by its path without the extension (`guitar/drop_d`). Parsing and validation
//! live in the `fretboard` crate (`InstrumentPreset::from_yaml`).

include!(concat!(env!("OUT_DIR"), "/presets.rs"));

/// A preset with its name and YAML source
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: String,
    pub content: String,
}

impl Preset {
    /// Instrument directory the preset was filed under.
    pub fn instrument(&self) -> &str {
        self.name.split('/').next().unwrap_or_default()
    }
}

/// Get all embedded presets, sorted by name
pub fn get_all_presets() -> Vec<Preset> {
    PRESETS
        .iter()
        .map(|(name, content)| Preset {
            name: name.to_string(),
            content: content.to_string(),
        })
        .collect()
}

/// Get a preset by name
pub fn get_preset(name: &str) -> Option<Preset> {
    PRESETS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(name, content)| Preset {
            name: name.to_string(),
            content: content.to_string(),
        })
}

/// List all preset names
pub fn list_presets() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

/// Presets filed under `instrument`
pub fn presets_for(instrument: &str) -> Vec<Preset> {
    get_all_presets()
        .into_iter()
        .filter(|p| p.instrument() == instrument)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_embedded() {
        let names = list_presets();
        assert!(names.contains(&"guitar/standard"));
        assert!(names.contains(&"bass/five_string"));
    }

    #[test]
    fn test_get_preset() {
        let preset = get_preset("guitar/drop_d").unwrap();
        assert_eq!(preset.instrument(), "guitar");
        assert!(preset.content.contains("Drop D"));
        assert!(get_preset("guitar/nope").is_none());
    }

    #[test]
    fn test_presets_for_instrument() {
        let ukulele = presets_for("ukulele");
        assert_eq!(ukulele.len(), 2);
        assert!(ukulele.iter().all(|p| p.name.starts_with("ukulele/")));
    }
}
