//! Utility helpers shared across site modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from controllers and
//! components so the pure parts stay testable off-browser.

#[cfg(feature = "csr")]
pub mod dom;
pub mod format;
pub mod storage;
