//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod item_card;
mod location_picker;
mod register_form;
mod search_input;
mod toast;
mod wish_offer_content;

pub use filter_bar::FilterBar;
pub use item_card::ItemCard;
pub use location_picker::LocationPicker;
pub use register_form::RegisterForm;
pub use search_input::SearchInput;
pub use toast::ToastTray;
pub use wish_offer_content::WishOfferContent;
