//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render vehicle listings from prepared view-models. They hold no
//! site state; favourite toggles are reported through callbacks.

pub mod car_card;
pub mod featured_cars;
