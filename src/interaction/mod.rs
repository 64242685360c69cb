//! Translation of host UI events into controller calls.
//!
//! Filter, sort and favorite events apply immediately. Search input is held
//! in a [`Debouncer`] and only reaches the controller once typing has
//! settled, which makes this the one place where event ordering matters: a
//! filter change that arrives while a search is pending renders with the old
//! query, and the pending query is applied on the next [`Interaction::tick`]
//! after its deadline.

use crate::display::{Controller, Surface};
use crate::favorites::KeyValueStore;
use std::time::Duration;

mod debounce;

pub use debounce::Debouncer;

/// A user gesture captured by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search box now contains this text
    SearchInput(String),
    /// A filter control carrying this tag was activated
    FilterSelected(String),
    /// A sort control carrying this tag was activated
    SortSelected(String),
    /// The favorite control of this recipe was activated
    FavoriteToggled(u32),
}

pub struct Interaction<S, V> {
    controller: Controller<S, V>,
    search: Debouncer<String>,
}

impl<S: KeyValueStore, V: Surface> Interaction<S, V> {
    /// Wraps a controller, using its settings for the search quiet period.
    pub fn new(controller: Controller<S, V>) -> Self {
        let delay = controller.settings().search_debounce();
        Interaction {
            controller,
            search: Debouncer::new(delay),
        }
    }

    /// Initial render with default criteria.
    pub fn start(&mut self) {
        self.controller.refresh();
    }

    pub fn controller(&self) -> &Controller<S, V> {
        &self.controller
    }

    /// Whether a search is waiting for its quiet period to pass.
    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// When the pending search is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.search.deadline()
    }

    pub fn handle(&mut self, event: UiEvent, now: Duration) {
        tracing::trace!("Handling {:?}", event);
        match event {
            UiEvent::SearchInput(text) => self.search.schedule(text, now),
            UiEvent::FilterSelected(tag) => self.controller.select_filter(&tag),
            UiEvent::SortSelected(tag) => self.controller.select_sort(&tag),
            UiEvent::FavoriteToggled(id) => {
                self.controller.toggle_favorite(id);
            }
        }
    }

    /// Applies the pending search if its quiet period has elapsed. Returns
    /// whether a recompute happened.
    pub fn tick(&mut self, now: Duration) -> bool {
        match self.search.poll(now) {
            Some(query) => {
                self.controller.set_query(query);
                true
            }
            None => false,
        }
    }
}
