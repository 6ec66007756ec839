//! # tplus-web
//!
//! Leptos + WASM presentation layer for the Toyota Plus Cambodia showroom
//! site. Replaces the site's hand-written page script with a Rust-native
//! module: favourites persisted in `localStorage`, toast notifications,
//! vehicle cards rendered from the `carsData` collection, the mobile menu,
//! the language toggle and the scroll effects.
//!
//! Pure state and view-models build and test on the host. Everything that
//! touches the DOM is behind the `csr` feature and only compiles for the
//! browser build.

pub mod app;
pub mod bindings;
pub mod components;
pub mod config;
pub mod controllers;
#[cfg(feature = "csr")]
pub mod entry;
pub mod error;
pub mod state;
pub mod util;
