//! Media Gallery Common Library
//!
//! Web(WASM)から使う、DOMに依存しない状態と計算

pub mod config;
pub mod error;
pub mod filter;
pub mod lightbox;
pub mod manifest;
pub mod modal;
pub mod path;
pub mod reveal;
pub mod state;
pub mod tag_index;
pub mod types;

pub use config::GalleryConfig;
pub use error::{Error, Result};
pub use filter::{compute_display_list, FilterState};
pub use lightbox::{focus_trap_step, LightboxKey, LightboxState, TabStep};
pub use manifest::{load_manifest, parse_manifest, sort_newest_first};
pub use modal::{ModalSession, ModalSurface};
pub use path::image_src;
pub use reveal::RevealState;
pub use state::{
    CardView, GalleryState, LightboxView, LoadState, TagBarView, TagChip, TagToggle,
    LOAD_FAILED_MESSAGE, NO_MATCHES_MESSAGE,
};
pub use tag_index::{TagEntry, TagIndex};
pub use types::Item;
