uniffi::setup_scaffolding!();

pub mod card;
pub mod catalog;
pub mod config;
pub mod display;
pub mod favorites;
pub mod ffi;
pub mod interaction;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod search;
pub mod tree;
pub mod view;

pub use card::{build_card, CardOptions, Section};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, Settings};
pub use display::{Controller, Frame, FrameSlot, Surface};
pub use favorites::{
    Favorites, FavoritesSet, FileStore, KeyValueStore, MemoryStore, StoreError,
};
pub use interaction::{Debouncer, Interaction, UiEvent};
pub use model::*;
pub use pipeline::{run, Criteria, RecipeFilter, SortOrder};
pub use search::search;
pub use tree::{render_steps, StepNode, StepTree};
pub use view::Node;
