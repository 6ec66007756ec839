//! Two-state language flag for the cosmetic language toggle.
//!
//! Only the document `lang` attribute, the toggle label and a confirmation
//! toast change. Page content is not translated.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

const GLOBE_ICON: &str = r#"<i class="fas fa-globe"></i>"#;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Khmer,
}

impl Language {
    /// Read a `lang` attribute value. Anything but `km` is English.
    #[must_use]
    pub fn from_lang_attr(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("km") => Self::Khmer,
            _ => Self::English,
        }
    }

    #[must_use]
    pub fn lang_attr(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Khmer => "km",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::English => Self::Khmer,
            Self::Khmer => Self::English,
        }
    }

    /// Toggle button label shown while this language is active.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::English => "EN / ខ្មែរ",
            Self::Khmer => "ខ្មែរ / EN",
        }
    }

    /// Toggle button inner HTML (globe icon + label).
    #[must_use]
    pub fn button_html(self) -> String {
        format!("{GLOBE_ICON} {}", self.button_label())
    }

    /// Toast confirming a switch to this language, in this language.
    #[must_use]
    pub fn confirmation(self) -> &'static str {
        match self {
            Self::English => "Switched to English",
            Self::Khmer => "ប្ដូរទៅភាសាខ្មែរ",
        }
    }
}
