//! Toast notifier bound to the `#toast` element.
//!
//! A new message replaces the pending clear timer; dropping a `gloo-timers`
//! `Timeout` cancels it. The sequence check in `ToastState` backs this up.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

use crate::bindings::ViewBindings;
use crate::state::toast::{ToastKind, ToastMessage, ToastState};

pub struct Toaster {
    state: Rc<RefCell<ToastState>>,
    duration_ms: u32,
    #[cfg(feature = "csr")]
    element: Option<web_sys::HtmlElement>,
    #[cfg(feature = "csr")]
    pending: RefCell<Option<Timeout>>,
}

impl Toaster {
    pub fn new(bindings: &ViewBindings, duration_ms: u32) -> Self {
        #[cfg(not(feature = "csr"))]
        let _ = bindings;
        Self {
            state: Rc::new(RefCell::new(ToastState::default())),
            duration_ms,
            #[cfg(feature = "csr")]
            element: bindings.toast.clone(),
            #[cfg(feature = "csr")]
            pending: RefCell::new(None),
        }
    }

    /// Show `message` and schedule it to clear after the configured delay.
    pub fn notify(&self, message: &str, kind: ToastKind) {
        let seq = self.state.borrow_mut().show(message, kind);
        log::debug!("toast #{seq}: {message}");

        #[cfg(feature = "csr")]
        {
            let Some(el) = self.element.clone() else {
                return;
            };
            el.set_text_content(Some(message));
            el.set_class_name(&self.state.borrow().class_name());

            let state = Rc::clone(&self.state);
            let timeout = Timeout::new(self.duration_ms, move || {
                if state.borrow_mut().expire(seq) {
                    el.set_class_name("");
                }
            });
            // Replacing the handle drops, and so cancels, the previous timer.
            *self.pending.borrow_mut() = Some(timeout);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.duration_ms;
        }
    }

    /// Clear the toast now if `seq` is still the visible message.
    #[cfg(test)]
    pub(crate) fn expire(&self, seq: u64) -> bool {
        let cleared = self.state.borrow_mut().expire(seq);
        #[cfg(feature = "csr")]
        {
            if cleared {
                self.pending.borrow_mut().take();
                if let Some(el) = &self.element {
                    el.set_class_name("");
                }
            }
        }
        cleared
    }

    pub fn current(&self) -> Option<ToastMessage> {
        self.state.borrow().current().cloned()
    }

    #[cfg(test)]
    pub(crate) fn seq(&self) -> u64 {
        self.state.borrow().seq()
    }

    pub fn class_name(&self) -> String {
        self.state.borrow().class_name()
    }
}
