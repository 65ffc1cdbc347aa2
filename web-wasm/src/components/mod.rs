//! UIコンポーネント

pub mod gallery_grid;
pub mod header;
pub mod lightbox;
pub mod search_bar;
pub mod tag_bar;
