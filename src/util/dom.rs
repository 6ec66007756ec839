//! Thin `web-sys` wrappers used by the browser build.
//!
//! Style and class writes are best-effort: a failed write is logged at debug
//! level and otherwise ignored, matching how the page degrades when markup is
//! missing.

use wasm_bindgen::{JsCast, JsValue};

use crate::error::SiteError;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Element with `id`, cast to `T`. `None` when absent or of another type.
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// All `HtmlElement`s in the document matching `selector`.
pub fn query_all(selector: &str) -> Vec<web_sys::HtmlElement> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    match doc.query_selector_all(selector) {
        Ok(list) => html_elements(&list),
        Err(e) => {
            log::debug!("querySelectorAll({selector}) failed: {e:?}");
            Vec::new()
        }
    }
}

/// All `HtmlElement`s under `root` matching `selector`.
pub fn query_all_in(root: &web_sys::Element, selector: &str) -> Vec<web_sys::HtmlElement> {
    match root.query_selector_all(selector) {
        Ok(list) => html_elements(&list),
        Err(e) => {
            log::debug!("querySelectorAll({selector}) failed: {e:?}");
            Vec::new()
        }
    }
}

fn html_elements(list: &web_sys::NodeList) -> Vec<web_sys::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("style {property}={value} rejected: {e:?}");
    }
}

pub fn clear_style(el: &web_sys::HtmlElement, property: &str) {
    if let Err(e) = el.style().remove_property(property) {
        log::debug!("style {property} removal rejected: {e:?}");
    }
}

pub fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::debug!("class {class} toggle rejected: {e:?}");
    }
}

/// JSON text of `window[name]`, or `None` when the global is unset.
pub fn global_json(name: &str) -> Result<Option<String>, SiteError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json = js_sys::JSON::stringify(&value)?;
    Ok(json.as_string())
}
