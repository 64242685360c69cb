use crate::favorites::FavoritesSet;
use crate::model::{Difficulty, Recipe};
use std::fmt;

const CATEGORY_PREFIX: &str = "category:";

/// The active filter control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecipeFilter {
    #[default]
    All,
    Favorites,
    Difficulty(Difficulty),
    /// Recipes strictly quicker than the configured threshold
    Quick,
    Category(String),
}

impl RecipeFilter {
    /// Parses a control tag. Unrecognized tags mean "no filter".
    ///
    /// Recognized tags: `all`, `favorites`, `easy`, `medium`, `hard`,
    /// `quick` and `category:<name>`.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        match tag {
            "favorites" => RecipeFilter::Favorites,
            "quick" => RecipeFilter::Quick,
            _ => {
                if let Some(difficulty) = Difficulty::from_tag(tag) {
                    return RecipeFilter::Difficulty(difficulty);
                }
                match tag.strip_prefix(CATEGORY_PREFIX).map(str::trim) {
                    Some(category) if !category.is_empty() => {
                        RecipeFilter::Category(category.to_string())
                    }
                    _ => RecipeFilter::All,
                }
            }
        }
    }

    /// The tag a control for this filter carries.
    pub fn tag(&self) -> String {
        match self {
            RecipeFilter::All => "all".to_string(),
            RecipeFilter::Favorites => "favorites".to_string(),
            RecipeFilter::Difficulty(difficulty) => difficulty.as_str().to_string(),
            RecipeFilter::Quick => "quick".to_string(),
            RecipeFilter::Category(category) => format!("{CATEGORY_PREFIX}{category}"),
        }
    }

    /// Whether a single recipe passes this filter.
    pub fn accepts(&self, recipe: &Recipe, favorites: &FavoritesSet, quick_threshold: u32) -> bool {
        match self {
            RecipeFilter::All => true,
            RecipeFilter::Favorites => favorites.contains(recipe.id),
            RecipeFilter::Difficulty(difficulty) => recipe.difficulty == Some(*difficulty),
            RecipeFilter::Quick => recipe.time.is_some_and(|time| time < quick_threshold),
            RecipeFilter::Category(category) => recipe
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category)),
        }
    }
}

impl fmt::Display for RecipeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

/// Keep the recipes accepted by `filter`, in input order.
pub fn apply_filter<'a>(
    recipes: &[&'a Recipe],
    filter: &RecipeFilter,
    favorites: &FavoritesSet,
    quick_threshold: u32,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .copied()
        .filter(|recipe| filter.accepts(recipe, favorites, quick_threshold))
        .collect()
}
