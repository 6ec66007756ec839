//! DOM-bound behaviour for the page chrome.
//!
//! ARCHITECTURE
//! ============
//! Each controller pairs a plain state type from `state` with the element
//! references it was handed from `bindings`. State transitions always run;
//! the DOM writes only exist in the `csr` build.

pub mod favourites;
pub mod language;
pub mod menu;
pub mod scroll;
pub mod toast;
