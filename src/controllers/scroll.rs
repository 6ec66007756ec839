//! Scroll-driven effects: sticky header shadow and reveal-on-scroll.
//!
//! DESIGN
//! ======
//! The header listener runs on every scroll event with no throttling; the
//! work is one style write. Reveal uses a single `IntersectionObserver` for
//! the whole page and stops observing an element once it has been revealed,
//! so nothing is hidden again.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use crate::bindings::ViewBindings;
use crate::config::SiteConfig;
#[cfg(feature = "csr")]
use crate::error::SiteError;
#[cfg(feature = "csr")]
use crate::util::dom::set_style;

/// Inline styles applied before an element has been revealed.
pub const REVEAL_HIDDEN: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.4s ease, transform 0.4s ease"),
];

/// Inline styles applied once an element is in view.
pub const REVEAL_SHOWN: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Header `box-shadow` chosen by scroll offset.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderShadow {
    pub threshold_px: f64,
    pub raised: String,
    pub resting: String,
}

impl HeaderShadow {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            threshold_px: config.header_shadow_threshold_px,
            raised: config.header_shadow_raised.clone(),
            resting: config.header_shadow_resting.clone(),
        }
    }

    /// Raised strictly above the threshold, resting at or below it.
    pub fn for_offset(&self, scroll_y: f64) -> &str {
        if scroll_y > self.threshold_px { &self.raised } else { &self.resting }
    }
}

#[cfg(feature = "csr")]
struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

pub struct ScrollEffects {
    #[cfg(feature = "csr")]
    shadow: HeaderShadow,
    #[cfg(feature = "csr")]
    reveal_selectors: String,
    #[cfg(feature = "csr")]
    reveal_threshold: f64,
    #[cfg(feature = "csr")]
    header: Option<web_sys::HtmlElement>,
    #[cfg(feature = "csr")]
    reveal: RefCell<Option<RevealObserver>>,
}

impl ScrollEffects {
    pub fn new(bindings: &ViewBindings, config: &SiteConfig) -> Self {
        #[cfg(not(feature = "csr"))]
        let _ = (bindings, config);
        Self {
            #[cfg(feature = "csr")]
            shadow: HeaderShadow::from_config(config),
            #[cfg(feature = "csr")]
            reveal_selectors: config.reveal_selector_list(),
            #[cfg(feature = "csr")]
            reveal_threshold: config.reveal_threshold,
            #[cfg(feature = "csr")]
            header: bindings.header.clone(),
            #[cfg(feature = "csr")]
            reveal: RefCell::new(None),
        }
    }

    /// Register the scroll listener and hide every reveal target on the page.
    #[cfg(feature = "csr")]
    pub fn install(&self) -> Result<(), SiteError> {
        self.install_header_shadow()?;
        for el in crate::util::dom::query_all(&self.reveal_selectors) {
            self.prepare_reveal(&el)?;
        }
        Ok(())
    }

    /// Hide and observe reveal targets under `root` (freshly mounted cards).
    #[cfg(feature = "csr")]
    pub fn reveal_within(&self, root: &web_sys::Element) -> Result<(), SiteError> {
        for el in crate::util::dom::query_all_in(root, &self.reveal_selectors) {
            self.prepare_reveal(&el)?;
        }
        Ok(())
    }

    #[cfg(feature = "csr")]
    fn install_header_shadow(&self) -> Result<(), SiteError> {
        let (Some(window), Some(header)) = (web_sys::window(), self.header.clone()) else {
            return Ok(());
        };
        let shadow = self.shadow.clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            set_style(&header, "box-shadow", shadow.for_offset(scroll_y));
        });
        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        // Lives for the whole page.
        on_scroll.forget();
        Ok(())
    }

    #[cfg(feature = "csr")]
    fn prepare_reveal(&self, el: &web_sys::HtmlElement) -> Result<(), SiteError> {
        let mut slot = self.reveal.borrow_mut();
        if slot.is_none() {
            *slot = Some(new_reveal_observer(self.reveal_threshold)?);
        }
        let Some(reveal) = slot.as_ref() else {
            return Ok(());
        };
        for (property, value) in REVEAL_HIDDEN {
            set_style(el, property, value);
        }
        reveal.observer.observe(el);
        Ok(())
    }
}

#[cfg(feature = "csr")]
fn new_reveal_observer(threshold: f64) -> Result<RevealObserver, SiteError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() {
                    for (property, value) in REVEAL_SHOWN {
                        set_style(el, property, value);
                    }
                }
                observer.unobserve(&target);
            }
        },
    );
    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    Ok(RevealObserver { observer, _callback: callback })
}
