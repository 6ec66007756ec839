//! Composition root.
//!
//! ARCHITECTURE
//! ============
//! `Site` owns one instance of every controller, wired to the same toaster
//! and the same resolved `ViewBindings`. The browser build keeps a single
//! `Site` in a thread-local registry so the exported JavaScript functions can
//! reach it; tests build their own with in-memory storage.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::bindings::ViewBindings;
use crate::components::car_card::CarCardView;
use crate::components::featured_cars::featured_card_views;
use crate::config::SiteConfig;
use crate::controllers::favourites::{DomIndicator, FavouritesController};
use crate::controllers::language::LanguageToggle;
use crate::controllers::menu::MenuController;
use crate::controllers::scroll::ScrollEffects;
use crate::controllers::toast::Toaster;
use crate::state::favourites::FavouritesStore;
use crate::state::vehicle::Vehicle;
use crate::util::storage::{KeyValueStore, LocalStorage};

pub struct Site<S = LocalStorage> {
    pub config: SiteConfig,
    pub toaster: Rc<Toaster>,
    pub favourites: FavouritesController<S, DomIndicator>,
    pub menu: Rc<MenuController>,
    pub language: LanguageToggle,
    pub scroll: ScrollEffects,
    /// Mounted card lists by container id; dropping a handle unmounts it.
    #[cfg(feature = "csr")]
    mounts: RefCell<std::collections::HashMap<String, Box<dyn std::any::Any>>>,
}

impl<S: KeyValueStore> Site<S> {
    pub fn with_storage(config: SiteConfig, bindings: &ViewBindings, storage: S) -> Self {
        let toaster = Rc::new(Toaster::new(bindings, config.toast_duration_ms));
        let store = FavouritesStore::new(storage, config.storage_key.clone());
        Self {
            favourites: FavouritesController::new(store, Rc::clone(&toaster), DomIndicator::new(bindings)),
            menu: Rc::new(MenuController::new(bindings)),
            language: LanguageToggle::new(bindings, Rc::clone(&toaster)),
            scroll: ScrollEffects::new(bindings, &config),
            toaster,
            config,
            #[cfg(feature = "csr")]
            mounts: RefCell::new(std::collections::HashMap::new()),
        }
    }

    /// Card view-models for the featured list, honouring current favourites.
    /// `count` falls back to the configured default.
    pub fn featured_cards(&self, vehicles: &[Vehicle], count: Option<usize>) -> Vec<CarCardView> {
        let count = count.unwrap_or(self.config.featured_count);
        featured_card_views(vehicles, &self.favourites.get(), &self.config, count)
    }
}

impl Site<LocalStorage> {
    pub fn new(config: SiteConfig, bindings: &ViewBindings) -> Self {
        Self::with_storage(config, bindings, LocalStorage)
    }
}

thread_local! {
    static SITE: RefCell<Option<Rc<Site>>> = const { RefCell::new(None) };
}

/// Make `site` the page-wide instance used by the exported functions.
pub fn install(site: Site) -> Rc<Site> {
    let site = Rc::new(site);
    SITE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&site)));
    site
}

/// Run `f` against the installed site; `None` before boot.
pub fn with_site<R>(f: impl FnOnce(&Site) -> R) -> Option<R> {
    let site = SITE.with(|slot| slot.borrow().clone())?;
    Some(f(&site))
}

#[cfg(feature = "csr")]
mod browser {
    use leptos::prelude::*;

    use super::{Site, with_site};
    use crate::components::featured_cars::FeaturedCars;
    use crate::controllers::menu::MenuController;
    use crate::error::SiteError;
    use crate::state::vehicle::{Inventory, VehicleId};

    impl Site {
        /// Wire page-level listeners: nav links, header shadow, reveal.
        pub fn start(&self, bindings: &crate::bindings::ViewBindings) {
            if let Err(e) = MenuController::wire_nav_links(&self.menu, &bindings.mobile_nav_links) {
                log::warn!("mobile nav links not wired: {e}");
            }
            if let Err(e) = self.scroll.install() {
                log::warn!("scroll effects disabled: {e}");
            }
        }

        /// Render the featured cards into `#container_id`, replacing whatever
        /// it held. No-op when the container or the vehicle data is missing.
        pub fn render_featured_cars(&self, container_id: &str, count: Option<usize>) -> Result<(), SiteError> {
            let Some(container) = crate::util::dom::element_by_id::<web_sys::HtmlElement>(container_id) else {
                log::debug!("featured container #{container_id} not found");
                return Ok(());
            };
            let Some(inventory) = Inventory::from_window(&self.config.inventory_global) else {
                log::debug!("{} not present; featured list skipped", self.config.inventory_global);
                return Ok(());
            };

            let cards = self.featured_cards(&inventory.vehicles, count);
            log::debug!("rendering {} featured cards into #{container_id}", cards.len());

            // Unmount any earlier render before clearing static content.
            self.mounts.borrow_mut().remove(container_id);
            container.set_inner_html("");

            let handle = leptos::mount::mount_to(container.clone(), move || {
                let on_toggle = Callback::new(|id: VehicleId| {
                    with_site(|site| site.favourites.toggle(&id));
                });
                view! { <FeaturedCars cards=cards on_toggle=on_toggle/> }
            });
            self.mounts.borrow_mut().insert(container_id.to_owned(), Box::new(handle));

            self.scroll.reveal_within(&container)
        }
    }
}
