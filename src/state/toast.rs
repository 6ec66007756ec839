//! Toast notification state.
//!
//! Each message gets a sequence number. A scheduled clear only applies to the
//! message that scheduled it, so an older timer can never hide a newer toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Style classification of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    #[default]
    Neutral,
}

impl ToastKind {
    /// Parse the host page's kind string; anything but `success` is neutral.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("success") => Self::Success,
            _ => Self::Neutral,
        }
    }

    #[must_use]
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("success"),
            Self::Neutral => None,
        }
    }
}

/// The message currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub text: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    current: Option<ToastMessage>,
    seq: u64,
}

impl ToastState {
    /// Show `text`, replacing any visible toast. Returns the sequence number
    /// the clear timer must present to [`ToastState::expire`].
    pub fn show(&mut self, text: &str, kind: ToastKind) -> u64 {
        self.seq += 1;
        self.current = Some(ToastMessage { text: text.to_owned(), kind });
        self.seq
    }

    /// Clear the toast if `seq` still identifies it. Returns whether it cleared.
    pub fn expire(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&ToastMessage> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Class attribute for the toast element.
    #[must_use]
    pub fn class_name(&self) -> String {
        match &self.current {
            None => String::new(),
            Some(msg) => match msg.kind.css_class() {
                Some(kind) => format!("show {kind}"),
                None => "show".to_owned(),
            },
        }
    }
}
