//! Item Card Component
//!
//! One marketplace listing, wish or offer.

use leptos::prelude::*;

use crate::models::ItemKind;
use crate::resolver::Listing;

#[component]
pub fn ItemCard(listing: Listing) -> impl IntoView {
    let badge = match listing.kind {
        ItemKind::Wish => "Wish",
        ItemKind::Offer => "Offer",
    };
    let badge_class = match listing.kind {
        ItemKind::Wish => "item-badge wish",
        ItemKind::Offer => "item-badge offer",
    };

    view! {
        <div class="item-card">
            {listing.image.as_ref().map(|url| view! {
                <img class="item-image" src=url.clone() alt=listing.title.clone() />
            })}
            <div class="item-body">
                <span class=badge_class>{badge}</span>
                <h3 class="item-title">{listing.title.clone()}</h3>
                {listing.description.as_ref().map(|d| view! {
                    <p class="item-description">{d.clone()}</p>
                })}
                <span class="item-date">{listing.created_at.clone()}</span>
            </div>
        </div>
    }
}
