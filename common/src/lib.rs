//! Atelier Portfolio Common Library
//!
//! Web(WASM)フロントエンドと共有される型とビューロジック

pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod locale;
pub mod render;
pub mod view;

pub use catalog::{matches_filter, parse_catalog, Artwork, LocalizedText, Year};
pub use contact::ContactMessage;
pub use error::{Error, Result};
pub use locale::{Dictionary, Lang};
pub use render::{categories, compose_alt, compose_caption, featured_cards, gallery_cards, Card, Slide};
pub use view::ViewState;
