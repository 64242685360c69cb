use super::Step;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty rating of a recipe.
///
/// Serialized in lowercase (`easy`, `medium`, `hard`) to match the tags used
/// by the filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parses a filter tag. Returns `None` for anything other than the three
    /// known levels.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry.
///
/// Only `id` and `title` are required on the wire; every other field
/// defaults to empty so both the nested-steps data and the
/// difficulty/time data deserialize into the same type.
///
/// # Examples
///
/// ```
/// use recipe_book::{Difficulty, Recipe};
///
/// let recipe: Recipe = serde_yaml::from_str(
///     "id: 4\ntitle: Greek Salad\ntime: 15\ndifficulty: easy\n",
/// )?;
/// assert_eq!(recipe.difficulty, Some(Difficulty::Easy));
/// assert!(recipe.steps.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique, stable identifier
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Total time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Recipe {
    /// Creates a recipe with only an id and a title.
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Recipe {
            id,
            title: title.into(),
            description: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            time: None,
            difficulty: None,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time = Some(minutes);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Every string the free-text search looks at: title, description and
    /// each ingredient, in that order.
    pub fn searchable_text(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.description.as_deref())
            .chain(self.ingredients.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_difficulty_tags() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_tag(difficulty.as_str()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_tag("Easy"), None);
        assert_eq!(Difficulty::from_tag("quick"), None);
    }

    #[test]
    fn test_recipe_minimal_yaml() {
        let recipe: Recipe = serde_yaml::from_str("id: 7\ntitle: Pad Thai").unwrap();
        assert_eq!(recipe, Recipe::new(7, "Pad Thai"));
    }

    #[test]
    fn test_recipe_full_yaml() {
        let recipe: Recipe = serde_yaml::from_str(indoc! {r#"
            id: 1
            title: Pasta Alfredo
            description: Creamy pasta
            time: 25
            difficulty: medium
            category: pasta
            ingredients: [Pasta, Butter]
            steps:
              - Boil pasta
              - text: Prepare sauce
                substeps: [Heat butter]
        "#})
        .unwrap();

        assert_eq!(recipe.time, Some(25));
        assert_eq!(recipe.difficulty, Some(Difficulty::Medium));
        assert_eq!(recipe.category.as_deref(), Some("pasta"));
        assert_eq!(recipe.ingredients, vec!["Pasta", "Butter"]);
        assert_eq!(recipe.steps.len(), 2);
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let result: Result<Recipe, _> =
            serde_yaml::from_str("id: 1\ntitle: X\ndifficulty: extreme");
        assert!(result.is_err());
    }

    #[test]
    fn test_searchable_text_order() {
        let recipe = Recipe::new(1, "Toast")
            .with_description("Crunchy")
            .with_ingredients(["Bread", "Butter"]);
        let text: Vec<&str> = recipe.searchable_text().collect();
        assert_eq!(text, vec!["Toast", "Crunchy", "Bread", "Butter"]);
    }

    #[test]
    fn test_searchable_text_without_description() {
        let recipe = Recipe::new(1, "Toast").with_ingredients(["Bread"]);
        let text: Vec<&str> = recipe.searchable_text().collect();
        assert_eq!(text, vec!["Toast", "Bread"]);
    }
}
