//! DOM element references resolved once at startup.
//!
//! ARCHITECTURE
//! ============
//! Controllers never look elements up by id on their own. `ViewBindings`
//! resolves the page's fixed elements when the site boots and each controller
//! receives the references it needs. A missing element is `None` and the
//! corresponding behaviour becomes a no-op.
//!
//! Off-browser builds carry no element references at all.

pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const TOAST_ID: &str = "toast";
pub const HEADER_ID: &str = "header";
pub const FAV_BUTTON_ID: &str = "favBtn";
pub const MOBILE_NAV_LINKS: &str = ".mobile-nav-links a";
/// Attribute tying a favourite button to a vehicle id.
pub const FAV_ID_ATTR: &str = "data-fav-id";

/// Attribute selector for every element tagged with `id`.
pub fn fav_selector(id: &str) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[{FAV_ID_ATTR}=\"{escaped}\"]")
}

#[derive(Clone, Debug, Default)]
pub struct ViewBindings {
    /// `<html>`, carrier of the `lang` attribute.
    #[cfg(feature = "csr")]
    pub root: Option<web_sys::Element>,
    #[cfg(feature = "csr")]
    pub body: Option<web_sys::HtmlElement>,
    #[cfg(feature = "csr")]
    pub mobile_menu: Option<web_sys::HtmlElement>,
    #[cfg(feature = "csr")]
    pub mobile_nav_links: Vec<web_sys::HtmlElement>,
    #[cfg(feature = "csr")]
    pub toast: Option<web_sys::HtmlElement>,
    #[cfg(feature = "csr")]
    pub header: Option<web_sys::HtmlElement>,
    /// Standalone favourite button on the vehicle detail page.
    #[cfg(feature = "csr")]
    pub fav_button: Option<web_sys::Element>,
}

impl ViewBindings {
    /// Resolve every fixed element from the current document.
    #[cfg(feature = "csr")]
    pub fn resolve() -> Self {
        use crate::util::dom::{document, element_by_id, query_all};

        let doc = document();
        let bindings = Self {
            root: doc.as_ref().and_then(web_sys::Document::document_element),
            body: doc.as_ref().and_then(web_sys::Document::body),
            mobile_menu: element_by_id(MOBILE_MENU_ID),
            mobile_nav_links: query_all(MOBILE_NAV_LINKS),
            toast: element_by_id(TOAST_ID),
            header: element_by_id(HEADER_ID),
            fav_button: element_by_id(FAV_BUTTON_ID),
        };
        log::debug!(
            "bindings: menu={} toast={} header={} fav_button={} nav_links={}",
            bindings.mobile_menu.is_some(),
            bindings.toast.is_some(),
            bindings.header.is_some(),
            bindings.fav_button.is_some(),
            bindings.mobile_nav_links.len(),
        );
        bindings
    }
}
