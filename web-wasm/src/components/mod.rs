//! 画面コンポーネント

pub mod contact;
pub mod featured;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod lightbox;
