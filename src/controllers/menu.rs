//! Mobile navigation overlay.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::cell::Cell;

use crate::bindings::ViewBindings;
use crate::state::menu::MenuState;

pub struct MenuController {
    state: Cell<MenuState>,
    #[cfg(feature = "csr")]
    overlay: Option<web_sys::HtmlElement>,
    #[cfg(feature = "csr")]
    body: Option<web_sys::HtmlElement>,
}

impl MenuController {
    pub fn new(bindings: &ViewBindings) -> Self {
        #[cfg(not(feature = "csr"))]
        let _ = bindings;
        Self {
            state: Cell::new(MenuState::default()),
            #[cfg(feature = "csr")]
            overlay: bindings.mobile_menu.clone(),
            #[cfg(feature = "csr")]
            body: bindings.body.clone(),
        }
    }

    pub fn open(&self) {
        self.apply(MenuState { open: true });
    }

    pub fn close(&self) {
        self.apply(MenuState { open: false });
    }

    pub fn is_open(&self) -> bool {
        self.state.get().open
    }

    /// Close when the click landed on the backdrop of the open menu.
    pub fn close_if_backdrop(&self, target_is_backdrop: bool) -> bool {
        let close = self.state.get().closes_on_click(target_is_backdrop);
        if close {
            self.close();
        }
        close
    }

    /// Browser-event form of [`MenuController::close_if_backdrop`].
    #[cfg(feature = "csr")]
    pub fn close_if_outside_click(&self, event: &web_sys::Event) -> bool {
        let target_is_backdrop = match (event.target(), &self.overlay) {
            (Some(target), Some(overlay)) => {
                let target: &wasm_bindgen::JsValue = target.as_ref();
                let overlay: &wasm_bindgen::JsValue = overlay.as_ref();
                target == overlay
            }
            _ => false,
        };
        self.close_if_backdrop(target_is_backdrop)
    }

    /// Close the menu whenever one of `links` is clicked.
    #[cfg(feature = "csr")]
    pub fn wire_nav_links(
        menu: &std::rc::Rc<Self>,
        links: &[web_sys::HtmlElement],
    ) -> Result<(), crate::error::SiteError> {
        use wasm_bindgen::{JsCast, closure::Closure};

        for link in links {
            let menu = std::rc::Rc::clone(menu);
            let on_click = Closure::<dyn FnMut()>::new(move || menu.close());
            link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }
        Ok(())
    }

    fn apply(&self, next: MenuState) {
        self.state.set(next);
        // An absent overlay leaves the page untouched, body included.
        #[cfg(feature = "csr")]
        {
            use crate::util::dom::{clear_style, set_style};

            let Some(overlay) = &self.overlay else {
                return;
            };
            set_style(overlay, "display", next.overlay_display());
            if let Some(body) = &self.body {
                match next.body_overflow() {
                    Some(value) => set_style(body, "overflow", value),
                    None => clear_style(body, "overflow"),
                }
            }
        }
    }
}
