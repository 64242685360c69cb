//! Display controller.
//!
//! Any change to the criteria or the favorites set runs the whole pipeline
//! over the full catalog, rebuilds every card and hands the result to the
//! [`Surface`] in one call. There is no incremental update path.

use crate::card::{build_card, CardOptions};
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::favorites::{Favorites, FavoritesSet, KeyValueStore};
use crate::pipeline::{run, Criteria, RecipeFilter, SortOrder};
use crate::view::{el, Node};
use serde::Serialize;

/// Everything the host needs to redraw the recipe list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Ids of the displayed recipes, in display order
    pub ids: Vec<u32>,
    pub cards: Vec<Node>,
    pub shown: usize,
    pub total: usize,
    pub query: String,
    /// Tag of the filter control last selected, exactly as received
    pub active_filter: String,
    /// Tag of the sort control last selected, exactly as received
    pub active_sort: String,
}

impl Frame {
    /// "Showing N of M recipes"
    pub fn counter_text(&self) -> String {
        format!("Showing {} of {} recipes", self.shown, self.total)
    }

    /// Whether a filter control carrying `tag` should be marked active.
    /// Only the control whose tag was selected is active, even when that
    /// tag fell back to "all".
    pub fn is_filter_active(&self, tag: &str) -> bool {
        tag == self.active_filter
    }

    pub fn is_sort_active(&self, tag: &str) -> bool {
        tag == self.active_sort
    }

    /// Active state for each filter control, in the order given.
    pub fn filter_buttons(&self, tags: &[&str]) -> Vec<(String, bool)> {
        tags.iter()
            .map(|tag| (tag.to_string(), self.is_filter_active(tag)))
            .collect()
    }

    /// Active state for each sort control, in the order given.
    pub fn sort_buttons(&self, tags: &[&str]) -> Vec<(String, bool)> {
        tags.iter()
            .map(|tag| (tag.to_string(), self.is_sort_active(tag)))
            .collect()
    }

    /// The whole recipe list as one container node.
    pub fn to_node(&self) -> Node {
        el("div")
            .attr("id", "recipe-container")
            .children(self.cards.iter().cloned())
    }

    pub fn to_html(&self) -> String {
        self.to_node().to_html()
    }
}

/// The host side of the rendering boundary.
pub trait Surface {
    /// Replaces everything currently displayed with `frame`.
    fn present(&mut self, frame: &Frame);
}

/// Surface that keeps the most recent frame and counts replacements.
#[derive(Debug, Default)]
pub struct FrameSlot {
    frame: Option<Frame>,
    presented: usize,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Number of bulk replacements received so far.
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl Surface for FrameSlot {
    fn present(&mut self, frame: &Frame) {
        self.frame = Some(frame.clone());
        self.presented += 1;
    }
}

/// Owns the display state and drives the surface.
pub struct Controller<S, V> {
    catalog: Catalog,
    settings: Settings,
    card_options: CardOptions,
    criteria: Criteria,
    filter_tag: String,
    sort_tag: String,
    favorites: Favorites<S>,
    surface: V,
}

impl<S: KeyValueStore, V: Surface> Controller<S, V> {
    /// Creates a controller with default criteria and the favorites set
    /// loaded from `store`. Nothing is presented until the first change or
    /// an explicit [`Controller::refresh`].
    pub fn new(catalog: Catalog, settings: Settings, store: S, surface: V) -> Self {
        let favorites = Favorites::load(store, settings.favorites_key.clone());
        Controller {
            catalog,
            settings,
            card_options: CardOptions::default(),
            criteria: Criteria::default(),
            filter_tag: RecipeFilter::All.tag(),
            sort_tag: SortOrder::None.tag().to_string(),
            favorites,
            surface,
        }
    }

    pub fn with_card_options(mut self, options: CardOptions) -> Self {
        self.card_options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn favorites(&self) -> &FavoritesSet {
        self.favorites.set()
    }

    pub fn store(&self) -> &S {
        self.favorites.store()
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Computes the frame for the current state without presenting it.
    pub fn compute(&self) -> Frame {
        let favorites = self.favorites.set();
        let shown = run(
            &self.catalog,
            &self.criteria,
            favorites,
            self.settings.quick_threshold_minutes,
        );

        Frame {
            ids: shown.iter().map(|recipe| recipe.id).collect(),
            cards: shown
                .iter()
                .map(|recipe| build_card(recipe, favorites, self.card_options))
                .collect(),
            shown: shown.len(),
            total: self.catalog.len(),
            query: self.criteria.query.clone(),
            active_filter: self.filter_tag.clone(),
            active_sort: self.sort_tag.clone(),
        }
    }

    /// Recomputes everything and presents it.
    pub fn refresh(&mut self) {
        let frame = self.compute();
        tracing::info!(
            "Displaying {} recipes (filter: {}, sort: {})",
            frame.shown,
            frame.active_filter,
            frame.active_sort
        );
        self.surface.present(&frame);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.refresh();
    }

    pub fn set_filter(&mut self, filter: RecipeFilter) {
        self.filter_tag = filter.tag();
        self.criteria.filter = filter;
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort_tag = sort.tag().to_string();
        self.criteria.sort = sort;
        self.refresh();
    }

    /// Applies the filter control carrying `tag`. The tag itself is what
    /// gets marked active; an unknown tag filters like "all".
    pub fn select_filter(&mut self, tag: &str) {
        self.criteria.filter = RecipeFilter::from_tag(tag);
        self.filter_tag = tag.to_string();
        self.refresh();
    }

    pub fn select_sort(&mut self, tag: &str) {
        self.criteria.sort = SortOrder::from_tag(tag);
        self.sort_tag = tag.to_string();
        self.refresh();
    }

    pub fn filter_buttons(&self, tags: &[&str]) -> Vec<(String, bool)> {
        tags.iter()
            .map(|tag| (tag.to_string(), *tag == self.filter_tag))
            .collect()
    }

    pub fn sort_buttons(&self, tags: &[&str]) -> Vec<(String, bool)> {
        tags.iter()
            .map(|tag| (tag.to_string(), *tag == self.sort_tag))
            .collect()
    }

    /// Flips favorite membership of `id`, persists it and re-renders.
    /// Returns the new membership.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        if !self.catalog.contains(id) {
            tracing::debug!("Toggling favorite for unknown recipe {}", id);
        }
        let now_favorite = self.favorites.toggle(id);
        self.refresh();
        now_favorite
    }
}
