//! Recognition options sent alongside the image.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Language of the text to recognize, as understood by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
pub enum LanguageType {
    /// Let the service infer the language.
    #[default]
    #[serde(rename = "auto_detect")]
    #[strum(serialize = "auto_detect")]
    AutoDetect,
    /// Mixed Chinese and English.
    #[serde(rename = "CHN_ENG")]
    #[strum(serialize = "CHN_ENG")]
    ChineseEnglish,
    /// English.
    #[serde(rename = "ENG")]
    #[strum(serialize = "ENG")]
    English,
    /// Japanese.
    #[serde(rename = "JAP")]
    #[strum(serialize = "JAP")]
    Japanese,
    /// Korean.
    #[serde(rename = "KOR")]
    #[strum(serialize = "KOR")]
    Korean,
    /// French.
    #[serde(rename = "FRE")]
    #[strum(serialize = "FRE")]
    French,
    /// Spanish.
    #[serde(rename = "SPA")]
    #[strum(serialize = "SPA")]
    Spanish,
    /// Portuguese.
    #[serde(rename = "POR")]
    #[strum(serialize = "POR")]
    Portuguese,
    /// German.
    #[serde(rename = "GER")]
    #[strum(serialize = "GER")]
    German,
    /// Italian.
    #[serde(rename = "ITA")]
    #[strum(serialize = "ITA")]
    Italian,
    /// Russian.
    #[serde(rename = "RUS")]
    #[strum(serialize = "RUS")]
    Russian,
}

/// Options for an accurate basic recognition call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RecognitionOptions {
    /// Language hint for the recognizer.
    pub language_type: LanguageType,
}

impl RecognitionOptions {
    /// Options with the language left for the service to detect.
    pub fn auto_detect() -> Self {
        Self {
            language_type: LanguageType::AutoDetect,
        }
    }

    /// Returns the options as form fields, in a stable order.
    pub fn to_form_fields(&self) -> Vec<(&'static str, &'static str)> {
        vec![("language_type", self.language_type.into())]
    }
}
