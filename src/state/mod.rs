//! Plain site state: vehicle records, favourites, and UI chrome flags.
//!
//! DESIGN
//! ======
//! Nothing in here touches the DOM. Controllers own the browser side and call
//! into these types, which keeps the rules testable on the host.

pub mod favourites;
pub mod language;
pub mod menu;
pub mod toast;
pub mod vehicle;
