//! JavaScript-facing exports.
//!
//! The site's markup calls these by their camelCase names from inline
//! handlers (`onclick="toggleFav(12)"`), so the host page assigns the module
//! exports onto `window` after `init()`. Every export is a no-op until the
//! site has booted.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::{self, Site, with_site};
use crate::bindings::ViewBindings;
use crate::config::SiteConfig;
use crate::state::toast::ToastKind;
use crate::state::vehicle::VehicleId;
use crate::util::dom::document;

/// Module entry point: install logging, then boot once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("logger already installed: {e}");
    }

    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() != "loading" {
        boot();
        return;
    }
    let on_ready = Closure::once(boot);
    if let Err(e) = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
        log::warn!("DOMContentLoaded listener rejected ({e:?}); booting now");
        boot();
        return;
    }
    on_ready.forget();
}

fn boot() {
    let config = SiteConfig::from_window();
    let bindings = ViewBindings::resolve();
    let site = app::install(Site::new(config, &bindings));
    site.start(&bindings);
    log::info!("showroom site ready");
}

/// Integral numbers and strings are ids; anything else is ignored.
fn vehicle_id(value: &JsValue) -> Option<VehicleId> {
    if let Some(n) = value.as_f64() {
        return VehicleId::from_js_number(n);
    }
    value.as_string().map(VehicleId::Text)
}

#[wasm_bindgen(js_name = openMobileMenu)]
pub fn open_mobile_menu() {
    with_site(|site| site.menu.open());
}

#[wasm_bindgen(js_name = closeMobileMenu)]
pub fn close_mobile_menu() {
    with_site(|site| site.menu.close());
}

#[wasm_bindgen(js_name = closeMobileMenuOutside)]
pub fn close_mobile_menu_outside(event: web_sys::Event) {
    with_site(|site| site.menu.close_if_outside_click(&event));
}

/// `kind` defaults to `success`; any other string shows a neutral toast.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: String, kind: Option<String>) {
    let kind = match kind.as_deref() {
        None => ToastKind::Success,
        raw => ToastKind::parse(raw),
    };
    with_site(|site| site.toaster.notify(&message, kind));
}

/// Favourite ids as a JavaScript array.
#[wasm_bindgen(js_name = getFavourites)]
pub fn get_favourites() -> JsValue {
    let ids = with_site(|site| site.favourites.get()).unwrap_or_default();
    let array = js_sys::Array::new();
    for id in ids.iter() {
        let value = match id {
            #[allow(clippy::cast_precision_loss)]
            VehicleId::Number(n) => JsValue::from_f64(*n as f64),
            VehicleId::Text(s) => JsValue::from_str(s),
        };
        array.push(&value);
    }
    array.into()
}

#[wasm_bindgen(js_name = toggleFav)]
pub fn toggle_fav(id: JsValue) {
    let Some(id) = vehicle_id(&id) else {
        log::debug!("toggleFav ignored non-id value {id:?}");
        return;
    };
    with_site(|site| site.favourites.toggle(&id));
}

#[wasm_bindgen(js_name = isFavourite)]
pub fn is_favourite(id: JsValue) -> bool {
    vehicle_id(&id).is_some_and(|id| with_site(|site| site.favourites.is_favourite(&id)).unwrap_or(false))
}

/// Render the newest `count` vehicles (default from config) into the
/// element with id `container_id`.
#[wasm_bindgen(js_name = renderFeaturedCars)]
pub fn render_featured_cars(container_id: String, count: Option<u32>) {
    let count = count.map(|c| c as usize);
    with_site(|site| {
        if let Err(e) = site.render_featured_cars(&container_id, count) {
            log::warn!("featured cars in #{container_id}: {e}");
        }
    });
}

#[wasm_bindgen(js_name = toggleLang)]
pub fn toggle_lang(button: web_sys::Element) {
    with_site(|site| site.language.toggle_with_button(&button));
}
