//! Cosmetic English/Khmer switch.
//!
//! The document `lang` attribute is the source of truth in the browser; the
//! cell mirrors it so the flag also works off-browser.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::bindings::ViewBindings;
use crate::controllers::toast::Toaster;
use crate::state::language::Language;
use crate::state::toast::ToastKind;

pub struct LanguageToggle {
    current: Cell<Language>,
    toaster: Rc<Toaster>,
    #[cfg(feature = "csr")]
    root: Option<web_sys::Element>,
}

impl LanguageToggle {
    pub fn new(bindings: &ViewBindings, toaster: Rc<Toaster>) -> Self {
        #[cfg(feature = "csr")]
        let current = Language::from_lang_attr(
            bindings
                .root
                .as_ref()
                .and_then(|root| root.get_attribute("lang"))
                .as_deref(),
        );
        #[cfg(not(feature = "csr"))]
        let current = {
            let _ = bindings;
            Language::default()
        };
        Self {
            current: Cell::new(current),
            toaster,
            #[cfg(feature = "csr")]
            root: bindings.root.clone(),
        }
    }

    pub fn current(&self) -> Language {
        #[cfg(feature = "csr")]
        {
            if let Some(root) = &self.root {
                return Language::from_lang_attr(root.get_attribute("lang").as_deref());
            }
        }
        self.current.get()
    }

    /// Flip the language, write it to `<html lang>`, and confirm with a toast.
    pub fn toggle(&self) -> Language {
        let next = self.current().toggled();
        self.current.set(next);
        #[cfg(feature = "csr")]
        {
            if let Some(root) = &self.root {
                if let Err(e) = root.set_attribute("lang", next.lang_attr()) {
                    log::debug!("lang attribute rejected: {e:?}");
                }
            }
        }
        log::debug!("language switched to {}", next.lang_attr());
        self.toaster.notify(next.confirmation(), ToastKind::Success);
        next
    }

    /// [`LanguageToggle::toggle`] plus the toggle button label.
    #[cfg(feature = "csr")]
    pub fn toggle_with_button(&self, button: &web_sys::Element) -> Language {
        let next = self.toggle();
        button.set_inner_html(&next.button_html());
        next
    }
}
