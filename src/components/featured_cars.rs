//! Featured vehicles for the landing page: newest first.

#[cfg(test)]
#[path = "featured_cars_test.rs"]
mod featured_cars_test;

use std::cmp::Reverse;

use leptos::prelude::*;

use crate::components::car_card::{CarCard, CarCardView};
use crate::config::SiteConfig;
use crate::state::favourites::FavouriteSet;
use crate::state::vehicle::{Vehicle, VehicleId};

/// First `count` vehicles by year, newest first. Equal years keep their
/// original order.
pub fn select_featured(vehicles: &[Vehicle], count: usize) -> Vec<&Vehicle> {
    let mut ordered: Vec<&Vehicle> = vehicles.iter().collect();
    ordered.sort_by_key(|v| Reverse(v.year));
    ordered.truncate(count);
    ordered
}

/// Card view-models for the featured selection.
pub fn featured_card_views(
    vehicles: &[Vehicle],
    favourites: &FavouriteSet,
    config: &SiteConfig,
    count: usize,
) -> Vec<CarCardView> {
    select_featured(vehicles, count)
        .into_iter()
        .map(|v| CarCardView::build(v, favourites.contains(&v.id), config))
        .collect()
}

/// Renders a list of prepared cards.
#[component]
pub fn FeaturedCars(cards: Vec<CarCardView>, on_toggle: Callback<VehicleId>) -> impl IntoView {
    cards
        .into_iter()
        .map(|card| view! { <CarCard card=card on_toggle=on_toggle/> })
        .collect_view()
}
