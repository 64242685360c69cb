//! UniFFI bindings for host UIs (iOS, Android, desktop shells).
//!
//! The host owns the actual widgets and the clock. It forwards gestures to
//! [`FfiRecipeBook`], calls `tick` from a timer while a search is pending,
//! and redraws from the returned [`FfiFrame`]. Step trees are flattened to
//! `(text, depth)` lines because UniFFI records cannot be recursive.

use crate::catalog::{samples, Catalog, CatalogError};
use crate::config::{ConfigError, Settings};
use crate::display::{Controller, Frame, FrameSlot};
use crate::favorites::{FileStore, KeyValueStore, MemoryStore, StoreError};
use crate::interaction::{Interaction, UiEvent};
use crate::model::Step;
use crate::tree::{render_steps, StepTree};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeBookError {
    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

impl From<CatalogError> for RecipeBookError {
    fn from(e: CatalogError) -> Self {
        RecipeBookError::CatalogError {
            message: e.to_string(),
        }
    }
}

impl From<ConfigError> for RecipeBookError {
    fn from(e: ConfigError) -> Self {
        RecipeBookError::ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<StoreError> for RecipeBookError {
    fn from(e: StoreError) -> Self {
        RecipeBookError::StorageError {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for RecipeBookError {
    fn from(e: serde_json::Error) -> Self {
        RecipeBookError::ParseError {
            message: e.to_string(),
        }
    }
}

/// One line of a flattened step tree.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiStepLine {
    pub text: String,
    /// Nesting depth, 0 for top-level steps
    pub depth: u32,
}

/// One displayed recipe card.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCard {
    pub id: u32,
    pub title: String,
    pub is_favorite: bool,
    /// Card markup, collapsible sections hidden
    pub html: String,
    pub steps: Vec<FfiStepLine>,
    pub ingredients: Vec<String>,
}

/// Full replacement for the displayed recipe list.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFrame {
    pub cards: Vec<FfiCard>,
    pub shown: u32,
    pub total: u32,
    pub counter_text: String,
    pub query: String,
    pub active_filter: String,
    pub active_sort: String,
    /// Markup of the whole list container
    pub html: String,
}

/// Persistence chosen by the host at construction time.
#[derive(Debug)]
enum HostStore {
    Memory(MemoryStore),
    File(FileStore),
}

impl KeyValueStore for HostStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            HostStore::Memory(store) => store.get(key),
            HostStore::File(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            HostStore::Memory(store) => store.set(key, value),
            HostStore::File(store) => store.set(key, value),
        }
    }
}

/// A running recipe list: catalog, criteria, favorites and the last frame.
#[derive(uniffi::Object)]
pub struct FfiRecipeBook {
    inner: Mutex<Interaction<HostStore, FrameSlot>>,
}

#[uniffi::export]
impl FfiRecipeBook {
    /// Creates a recipe book.
    ///
    /// * `settings_yaml` - settings document; empty for defaults
    /// * `catalog_yaml` - recipes to show; when absent, the settings'
    ///   `catalog_path` is loaded, falling back to the built-in classics
    /// * `storage_dir` - directory for persisted favorites; when absent,
    ///   favorites only live for the session
    #[uniffi::constructor]
    pub fn new(
        settings_yaml: String,
        catalog_yaml: Option<String>,
        storage_dir: Option<String>,
    ) -> Result<Arc<Self>, RecipeBookError> {
        let settings = Settings::from_yaml_str(&settings_yaml)?;
        let catalog = match (&catalog_yaml, &settings.catalog_path) {
            (Some(yaml), _) => Catalog::from_yaml_str(yaml)?,
            (None, Some(path)) => Catalog::load(path)?,
            (None, None) => samples::classics(),
        };
        let store = match storage_dir {
            Some(dir) => HostStore::File(FileStore::new(dir)),
            None => HostStore::Memory(MemoryStore::new()),
        };

        let controller = Controller::new(catalog, settings, store, FrameSlot::new());
        Ok(Arc::new(FfiRecipeBook {
            inner: Mutex::new(Interaction::new(controller)),
        }))
    }

    /// Renders the initial list with default criteria.
    pub fn start(&self) -> FfiFrame {
        let mut inner = self.lock();
        inner.start();
        frame_of(&inner)
    }

    /// Records new search box text. The list updates on a later `tick`.
    pub fn search_input(&self, text: String, now_ms: u64) {
        self.lock()
            .handle(UiEvent::SearchInput(text), Duration::from_millis(now_ms));
    }

    /// Applies a settled search. Returns the new frame if one was rendered.
    pub fn tick(&self, now_ms: u64) -> Option<FfiFrame> {
        let mut inner = self.lock();
        if inner.tick(Duration::from_millis(now_ms)) {
            Some(frame_of(&inner))
        } else {
            None
        }
    }

    /// Milliseconds timestamp at which the pending search is due.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.lock()
            .next_deadline()
            .map(|deadline| u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn select_filter(&self, tag: String, now_ms: u64) -> FfiFrame {
        self.apply(UiEvent::FilterSelected(tag), now_ms)
    }

    pub fn select_sort(&self, tag: String, now_ms: u64) -> FfiFrame {
        self.apply(UiEvent::SortSelected(tag), now_ms)
    }

    pub fn toggle_favorite(&self, id: u32, now_ms: u64) -> FfiFrame {
        self.apply(UiEvent::FavoriteToggled(id), now_ms)
    }

    /// The most recently rendered frame, computing one if nothing has been
    /// rendered yet.
    pub fn frame(&self) -> FfiFrame {
        frame_of(&self.lock())
    }
}

impl FfiRecipeBook {
    fn lock(&self) -> MutexGuard<'_, Interaction<HostStore, FrameSlot>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn apply(&self, event: UiEvent, now_ms: u64) -> FfiFrame {
        let mut inner = self.lock();
        inner.handle(event, Duration::from_millis(now_ms));
        frame_of(&inner)
    }
}

fn frame_of(interaction: &Interaction<HostStore, FrameSlot>) -> FfiFrame {
    let controller = interaction.controller();
    match controller.surface().frame() {
        Some(frame) => to_ffi_frame(frame, controller),
        None => to_ffi_frame(&controller.compute(), controller),
    }
}

fn to_ffi_frame(frame: &Frame, controller: &Controller<HostStore, FrameSlot>) -> FfiFrame {
    let favorites = controller.favorites();
    let cards = frame
        .ids
        .iter()
        .zip(&frame.cards)
        .filter_map(|(id, card)| {
            let recipe = controller.catalog().get(*id)?;
            Some(FfiCard {
                id: *id,
                title: recipe.title.clone(),
                is_favorite: favorites.contains(*id),
                html: card.to_html(),
                steps: step_lines(&render_steps(&recipe.steps, 0)),
                ingredients: recipe.ingredients.clone(),
            })
        })
        .collect();

    FfiFrame {
        cards,
        shown: frame.shown as u32,
        total: frame.total as u32,
        counter_text: frame.counter_text(),
        query: frame.query.clone(),
        active_filter: frame.active_filter.clone(),
        active_sort: frame.active_sort.clone(),
        html: frame.to_html(),
    }
}

fn step_lines(tree: &StepTree) -> Vec<FfiStepLine> {
    tree.flatten()
        .into_iter()
        .map(|(depth, text)| FfiStepLine {
            text: text.to_string(),
            depth: depth as u32,
        })
        .collect()
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Renders a JSON step array (strings and `{text, substeps}` objects) into
/// depth-tagged lines in reading order.
#[uniffi::export]
pub fn render_steps_json(steps_json: String) -> Result<Vec<FfiStepLine>, RecipeBookError> {
    let steps: Vec<Step> = serde_json::from_str(&steps_json)?;
    Ok(step_lines(&render_steps(&steps, 0)))
}

/// Installs the default log subscriber. Returns false if one was already set.
#[uniffi::export]
pub fn init_logging() -> bool {
    crate::logging::init()
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_default_book_uses_classics() {
        let book = FfiRecipeBook::new(String::new(), None, None).unwrap();
        let frame = book.start();
        assert_eq!(frame.total, 8);
        assert_eq!(frame.counter_text, "Showing 8 of 8 recipes");
        assert_eq!(frame.active_filter, "all");
    }

    #[test]
    fn test_catalog_yaml_and_steps() {
        let catalog = indoc! {r#"
            - id: 1
              title: Pasta Alfredo
              ingredients: [Pasta, Butter]
              steps:
                - Boil pasta
                - text: Prepare sauce
                  substeps: [Heat butter]
        "#};
        let book = FfiRecipeBook::new(String::new(), Some(catalog.to_string()), None).unwrap();
        let frame = book.frame();

        assert_eq!(frame.cards.len(), 1);
        let card = &frame.cards[0];
        assert_eq!(card.ingredients, vec!["Pasta", "Butter"]);
        assert_eq!(
            card.steps,
            vec![
                FfiStepLine { text: "Boil pasta".to_string(), depth: 0 },
                FfiStepLine { text: "Prepare sauce".to_string(), depth: 0 },
                FfiStepLine { text: "Heat butter".to_string(), depth: 1 },
            ]
        );
        assert!(card.html.contains(r#"class="step level-1""#));
    }

    #[test]
    fn test_search_waits_for_tick() {
        let book = FfiRecipeBook::new("search_debounce_ms: 100".to_string(), None, None).unwrap();
        book.start();

        book.search_input("pizza".to_string(), 1_000);
        assert_eq!(book.next_deadline_ms(), Some(1_100));
        assert!(book.tick(1_050).is_none());

        let frame = book.tick(1_100).unwrap();
        assert_eq!(frame.shown, 1);
        assert_eq!(frame.query, "pizza");
        assert_eq!(frame.cards[0].title, "Margherita Pizza");
    }

    #[test]
    fn test_favorites_persist_across_books() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap().to_string();

        let book = FfiRecipeBook::new(String::new(), None, Some(dir.clone())).unwrap();
        let frame = book.toggle_favorite(5, 0);
        assert!(frame.cards.iter().any(|c| c.id == 5 && c.is_favorite));

        let reopened = FfiRecipeBook::new(String::new(), None, Some(dir)).unwrap();
        let frame = reopened.select_filter("favorites".to_string(), 0);
        assert_eq!(frame.cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_deadline_saturates() {
        let book = FfiRecipeBook::new(String::new(), None, None).unwrap();
        book.start();
        book.search_input("greek".to_string(), 1_000);
        assert_eq!(book.next_deadline_ms(), Some(1_300));

        book.search_input("greek".to_string(), u64::MAX);
        assert_eq!(book.next_deadline_ms(), Some(u64::MAX));
    }

    #[test]
    fn test_sort_selection() {
        let book = FfiRecipeBook::new(String::new(), None, None).unwrap();
        let frame = book.select_sort("time".to_string(), 0);
        assert_eq!(frame.active_sort, "time");
        assert_eq!(frame.cards[0].title, "Greek Salad");
    }

    #[test]
    fn test_bad_settings() {
        let result = FfiRecipeBook::new("search_debounce_ms: later".to_string(), None, None);
        assert!(matches!(result, Err(RecipeBookError::ConfigError { .. })));
    }

    #[test]
    fn test_bad_catalog() {
        let result = FfiRecipeBook::new(String::new(), Some("- id: 1\n- id: 1".to_string()), None);
        assert!(matches!(result, Err(RecipeBookError::CatalogError { .. })));
    }

    #[test]
    fn test_render_steps_json() {
        let lines = render_steps_json(r#"["a", {"text": "b", "substeps": ["c"]}]"#.to_string()).unwrap();
        assert_eq!(lines.iter().map(|l| l.depth).collect::<Vec<_>>(), vec![0, 0, 1]);

        let result = render_steps_json("[1]".to_string());
        assert!(matches!(result, Err(RecipeBookError::ParseError { .. })));
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
