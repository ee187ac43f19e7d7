use serde::{Deserialize, Serialize};

use super::interface::RequestError;

/// Target languages offered in the dropdown. The label doubles as the
/// language name sent to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetLanguage {
    #[default]
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Japanese,
    Chinese,
    Russian,
    Arabic,
}

impl PresetLanguage {
    pub const ALL: [PresetLanguage; 10] = [
        PresetLanguage::English,
        PresetLanguage::Spanish,
        PresetLanguage::French,
        PresetLanguage::German,
        PresetLanguage::Italian,
        PresetLanguage::Portuguese,
        PresetLanguage::Japanese,
        PresetLanguage::Chinese,
        PresetLanguage::Russian,
        PresetLanguage::Arabic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PresetLanguage::English => "English",
            PresetLanguage::Spanish => "Spanish",
            PresetLanguage::French => "French",
            PresetLanguage::German => "German",
            PresetLanguage::Italian => "Italian",
            PresetLanguage::Portuguese => "Portuguese",
            PresetLanguage::Japanese => "Japanese",
            PresetLanguage::Chinese => "Chinese",
            PresetLanguage::Russian => "Russian",
            PresetLanguage::Arabic => "Arabic",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.label() == label)
    }
}

/// Either a dropdown preset or the free-text override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSelection {
    Preset(PresetLanguage),
    Custom(String),
}

impl LanguageSelection {
    /// The language name that goes into the directive. A blank override is
    /// refused rather than forwarded.
    pub fn resolve(&self) -> Result<&str, RequestError> {
        match self {
            LanguageSelection::Preset(preset) => Ok(preset.label()),
            LanguageSelection::Custom(name) if name.trim().is_empty() => {
                Err(RequestError::EmptyLanguage)
            }
            LanguageSelection::Custom(name) => Ok(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ten_presets_in_display_order() {
        let labels: Vec<_> = PresetLanguage::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            [
                "English",
                "Spanish",
                "French",
                "German",
                "Italian",
                "Portuguese",
                "Japanese",
                "Chinese",
                "Russian",
                "Arabic"
            ]
        );
    }

    #[test]
    fn labels_map_back_to_presets() {
        for preset in PresetLanguage::ALL {
            assert_eq!(PresetLanguage::from_label(preset.label()), Some(preset));
        }
        assert_eq!(PresetLanguage::from_label("Klingon"), None);
        assert_eq!(PresetLanguage::from_label("spanish"), None);
    }

    #[test]
    fn preset_and_identical_override_resolve_equally() {
        let preset = LanguageSelection::Preset(PresetLanguage::Spanish);
        let custom = LanguageSelection::Custom("Spanish".to_string());
        assert_eq!(preset.resolve().unwrap(), custom.resolve().unwrap());
    }

    #[test]
    fn custom_language_passes_through_untouched() {
        let custom = LanguageSelection::Custom("inglês".to_string());
        assert_eq!(custom.resolve().unwrap(), "inglês");
    }

    #[test]
    fn blank_override_is_refused() {
        for blank in ["", "   ", "\t\n"] {
            let custom = LanguageSelection::Custom(blank.to_string());
            assert_eq!(custom.resolve().unwrap_err(), RequestError::EmptyLanguage);
        }
    }

    #[test]
    fn selection_json_shape() {
        let preset: LanguageSelection =
            serde_json::from_value(json!({"preset": "Japanese"})).unwrap();
        assert_eq!(preset, LanguageSelection::Preset(PresetLanguage::Japanese));

        let custom: LanguageSelection =
            serde_json::from_value(json!({"custom": "Esperanto"})).unwrap();
        assert_eq!(custom, LanguageSelection::Custom("Esperanto".to_string()));

        assert!(serde_json::from_value::<LanguageSelection>(json!({"preset": "Klingon"})).is_err());
    }
}
