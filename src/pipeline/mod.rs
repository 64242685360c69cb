//! Search, filter and sort stages and their fixed composition.
//!
//! Every stage takes a slice of recipe references and returns a fresh
//! vector; nothing here mutates the catalog.

use crate::catalog::Catalog;
use crate::favorites::FavoritesSet;
use crate::model::Recipe;
use crate::search::search;

mod filter;
mod sort;

pub use filter::{apply_filter, RecipeFilter};
pub use sort::{apply_sort, locale_cmp, sort_by_name, sort_by_time, SortOrder};

/// Everything that decides which recipes are shown and in what order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    pub query: String,
    pub filter: RecipeFilter,
    pub sort: SortOrder,
}

impl Criteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_filter(mut self, filter: RecipeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Runs search, then filter, then sort over the whole catalog.
///
/// # Examples
///
/// ```
/// use recipe_book::{catalog::samples, run, Criteria, FavoritesSet, RecipeFilter, SortOrder};
///
/// let catalog = samples::classics();
/// let criteria = Criteria::default()
///     .with_filter(RecipeFilter::Quick)
///     .with_sort(SortOrder::Time);
/// let shown = run(&catalog, &criteria, &FavoritesSet::new(), 30);
/// assert_eq!(shown[0].title, "Greek Salad");
/// ```
pub fn run<'a>(
    catalog: &'a Catalog,
    criteria: &Criteria,
    favorites: &FavoritesSet,
    quick_threshold: u32,
) -> Vec<&'a Recipe> {
    let all: Vec<&Recipe> = catalog.iter().collect();
    let found = search(&all, &criteria.query);
    let filtered = apply_filter(&found, &criteria.filter, favorites, quick_threshold);
    apply_sort(&filtered, criteria.sort)
}
