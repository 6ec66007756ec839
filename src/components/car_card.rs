//! Vehicle card: view-model and component.
//!
//! DESIGN
//! ======
//! `CarCardView::build` turns a vehicle record into display-ready strings
//! (formatting, fallbacks, grade badge). `CarCard` only lays those strings
//! out; its attribute values and the image fallback come from the small
//! helpers below, so everything worth testing lives outside the view.

#[cfg(test)]
#[path = "car_card_test.rs"]
mod car_card_test;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::vehicle::{Vehicle, VehicleId};
use crate::util::format::{group_thousands, to_khr};

/// Shown for missing trim, transmission and fuel.
pub const MISSING: &str = "—";
/// Shown for a missing origin.
pub const DEFAULT_ORIGIN: &str = "Imported";

/// Condition grade style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeClass {
    S,
    A,
    B,
    C,
    D,
    E,
    R,
    NotAvailable,
}

impl GradeClass {
    /// Case-insensitive lookup; unknown codes map to `NotAvailable`.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_uppercase().as_str() {
            "S" => Self::S,
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            "D" => Self::D,
            "E" => Self::E,
            "R" => Self::R,
            _ => Self::NotAvailable,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::S => "grade-s",
            Self::A => "grade-a",
            Self::B => "grade-b",
            Self::C => "grade-c",
            Self::D => "grade-d",
            Self::E => "grade-e",
            Self::R => "grade-r",
            Self::NotAvailable => "grade-na",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeBadge {
    pub class: GradeClass,
    pub label: String,
}

impl GradeBadge {
    #[must_use]
    pub fn class_attr(&self) -> String {
        format!("car-badge card-grade-badge {}", self.class.css_class())
    }
}

/// Class list of the favourite button.
#[must_use]
pub fn fav_button_class(favourite: bool) -> &'static str {
    if favourite { "car-fav active" } else { "car-fav" }
}

/// Image to swap in after `current` failed to load. `None` once the
/// placeholder itself is the broken image, so the swap happens at most once.
#[must_use]
pub fn image_fallback<'a>(current: &str, placeholder: &'a str) -> Option<&'a str> {
    (current != placeholder).then_some(placeholder)
}

/// Display-ready card contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarCardView {
    pub id: VehicleId,
    pub href: String,
    pub image_src: String,
    pub fallback_image: String,
    pub image_alt: String,
    pub name: String,
    pub subtitle: String,
    pub grade: Option<GradeBadge>,
    pub favourite: bool,
    pub km_label: String,
    pub transmission: String,
    pub fuel: String,
    pub origin: String,
    pub price_label: String,
    pub price_khr_label: String,
}

impl CarCardView {
    /// Value of the `data-fav-id` attribute that favourite syncing matches.
    #[must_use]
    pub fn fav_id(&self) -> String {
        self.id.to_string()
    }

    #[must_use]
    pub fn build(vehicle: &Vehicle, favourite: bool, config: &SiteConfig) -> Self {
        let brand = &config.brand;
        let grade = vehicle.grade().map(|code| GradeBadge {
            class: GradeClass::from_code(code),
            label: format!("Grade {code}"),
        });
        Self {
            id: vehicle.id.clone(),
            href: format!("{}?id={}", config.detail_page, vehicle.id),
            image_src: vehicle.image.clone(),
            fallback_image: config.placeholder_image.clone(),
            image_alt: format!("{} {brand} {}", vehicle.year, vehicle.model),
            name: format!("{brand} {}", vehicle.model),
            subtitle: format!("{} · {}", vehicle.year, vehicle.trim().unwrap_or(MISSING)),
            grade,
            favourite,
            km_label: format!("{} km", group_thousands(vehicle.km)),
            transmission: vehicle.transmission().unwrap_or(MISSING).to_owned(),
            fuel: vehicle.fuel().unwrap_or(MISSING).to_owned(),
            origin: vehicle.origin().unwrap_or(DEFAULT_ORIGIN).to_owned(),
            price_label: format!("${}", group_thousands(vehicle.price)),
            price_khr_label: format!("≈ {} KHR", group_thousands(to_khr(vehicle.price, config.khr_per_usd))),
        }
    }
}

/// A clickable vehicle card with a favourite button.
#[component]
pub fn CarCard(card: CarCardView, on_toggle: Callback<VehicleId>) -> impl IntoView {
    let fav_id = card.fav_id();
    let CarCardView {
        id,
        href,
        image_src,
        fallback_image,
        image_alt,
        name,
        subtitle,
        grade,
        favourite,
        km_label,
        transmission,
        fuel,
        origin,
        price_label,
        price_khr_label,
    } = card;

    let src = RwSignal::new(image_src);
    let on_image_error = move |_| {
        let next = src.with_untracked(|current| image_fallback(current, &fallback_image).map(str::to_owned));
        if let Some(next) = next {
            src.set(next);
        }
    };

    let on_fav_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_toggle.run(id.clone());
    };

    let badge = grade.map(|badge| {
        let class = badge.class_attr();
        view! {
            <span class=class>{badge.label}</span>
        }
    });

    view! {
        <div class="car-card">
            <div class="car-card-img">
                <a href=href.clone()>
                    <img src=move || src.get() alt=image_alt loading="lazy" on:error=on_image_error/>
                </a>
                {badge}
                <button
                    class=fav_button_class(favourite)
                    data-fav-id=fav_id
                    title="Save to Favourites"
                    on:click=on_fav_click
                >
                    <i class="fas fa-heart"></i>
                </button>
            </div>

            <div class="car-card-body">
                <a href=href.clone()>
                    <div class="car-name">{name}</div>
                    <div class="car-sub">{subtitle}</div>
                </a>

                <div class="car-specs">
                    <span class="car-spec">
                        <i class="fas fa-tachometer-alt"></i>
                        " "
                        {km_label}
                    </span>
                    <span class="car-spec">
                        <i class="fas fa-cog"></i>
                        " "
                        {transmission}
                    </span>
                    <span class="car-spec">
                        <i class="fas fa-gas-pump"></i>
                        " "
                        {fuel}
                    </span>
                    <span class="car-spec">
                        <i class="fas fa-map-marker-alt"></i>
                        " "
                        {origin}
                    </span>
                </div>

                <div class="car-price-row">
                    <div>
                        <div class="car-price">{price_label}</div>
                        <small style="color:var(--grey);font-size:12px;">{price_khr_label}</small>
                    </div>
                    <a href=href class="btn btn-primary btn-sm">
                        "Details "
                        <i class="fas fa-arrow-right"></i>
                    </a>
                </div>
            </div>
        </div>
    }
}
