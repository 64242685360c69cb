//! Recipe card composition.
//!
//! A card is a pure function of one recipe and the favorites set. Both
//! collapsible sections start hidden; the host flips the `visible` class and
//! relabels the toggle with [`Section::toggle_label`].

use crate::favorites::FavoritesSet;
use crate::model::Recipe;
use crate::tree::render_steps;
use crate::view::{el, Node};

/// Class that marks a collapsible section as expanded
pub const VISIBLE_CLASS: &str = "visible";

/// A collapsible part of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Steps,
    Ingredients,
}

impl Section {
    /// Value of the toggle button's `data-toggle` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Steps => "steps",
            Section::Ingredients => "ingredients",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "steps" => Some(Section::Steps),
            "ingredients" => Some(Section::Ingredients),
            _ => None,
        }
    }

    /// Class of the container the toggle shows and hides.
    pub fn container_class(self) -> &'static str {
        match self {
            Section::Steps => "steps-container",
            Section::Ingredients => "ingredients-container",
        }
    }

    /// Button label for the given visibility: "Show Steps", "Hide Ingredients", ...
    pub fn toggle_label(self, visible: bool) -> String {
        let verb = if visible { "Hide" } else { "Show" };
        let name = match self {
            Section::Steps => "Steps",
            Section::Ingredients => "Ingredients",
        };
        format!("{verb} {name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    /// Render the favorite toggle
    pub favorites_enabled: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        CardOptions {
            favorites_enabled: true,
        }
    }
}

/// Builds the display unit for one recipe.
pub fn build_card(recipe: &Recipe, favorites: &FavoritesSet, options: CardOptions) -> Node {
    let mut card = el("div")
        .class("recipe-card")
        .attr("data-recipe-id", recipe.id.to_string())
        .child(el("h3").text(recipe.title.as_str()));

    if options.favorites_enabled {
        card = card.child(favorite_button(recipe.id, favorites.contains(recipe.id)));
    }

    if let Some(meta) = meta_line(recipe) {
        card = card.child(meta);
    }

    if let Some(description) = &recipe.description {
        card = card.child(el("p").class("description").text(description.as_str()));
    }

    card.child(toggle_button(Section::Steps))
        .child(toggle_button(Section::Ingredients))
        .child(
            el("div")
                .class(Section::Steps.container_class())
                .child(render_steps(&recipe.steps, 0).to_node()),
        )
        .child(
            el("div").class(Section::Ingredients.container_class()).child(
                el("ul").children(
                    recipe
                        .ingredients
                        .iter()
                        .map(|ingredient| el("li").text(ingredient.as_str())),
                ),
            ),
        )
}

fn favorite_button(id: u32, is_favorite: bool) -> Node {
    let button = el("button")
        .class("favorite-btn")
        .attr("data-favorite", id.to_string())
        .attr("aria-pressed", is_favorite.to_string());
    if is_favorite {
        button.class("active").text("★")
    } else {
        button.text("☆")
    }
}

fn toggle_button(section: Section) -> Node {
    el("button")
        .class("toggle-btn")
        .attr("data-toggle", section.as_str())
        .text(section.toggle_label(false))
}

fn meta_line(recipe: &Recipe) -> Option<Node> {
    if recipe.time.is_none() && recipe.difficulty.is_none() && recipe.category.is_none() {
        return None;
    }

    let mut meta = el("div").class("recipe-meta");
    if let Some(time) = recipe.time {
        meta = meta.child(el("span").class("time").text(format!("⏱️ {time} min")));
    }
    if let Some(difficulty) = recipe.difficulty {
        meta = meta.child(
            el("span")
                .class("difficulty")
                .class(difficulty.as_str())
                .text(difficulty.as_str()),
        );
    }
    if let Some(category) = &recipe.category {
        meta = meta.child(el("span").class("category").text(category.as_str()));
    }
    Some(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::samples;

    #[test]
    fn test_card_structure() {
        let catalog = samples::everyday();
        let card = build_card(catalog.get(1).unwrap(), &FavoritesSet::new(), CardOptions::default());

        assert_eq!(card.get_attr("data-recipe-id"), Some("1"));
        assert_eq!(card.child_nodes()[0].text_content(), "Pasta Alfredo");

        let steps = card.find_by_class("steps-container").unwrap();
        assert!(!steps.has_class(VISIBLE_CLASS));
        assert_eq!(steps.find_all_by_class("step").len(), 9);
        assert_eq!(steps.find_all_by_class("level-2").len(), 2);

        let ingredients = card.find_by_class("ingredients-container").unwrap();
        assert!(!ingredients.has_class(VISIBLE_CLASS));
        assert_eq!(ingredients.text_content(), "PastaButterGarlicCreamCheeseSalt");
    }

    #[test]
    fn test_toggle_buttons_start_collapsed() {
        let catalog = samples::everyday();
        let card = build_card(catalog.get(2).unwrap(), &FavoritesSet::new(), CardOptions::default());

        let labels: Vec<String> = card
            .find_all_by_class("toggle-btn")
            .iter()
            .map(|b| b.text_content())
            .collect();
        assert_eq!(labels, vec!["Show Steps", "Show Ingredients"]);
    }

    #[test]
    fn test_favorite_indicator() {
        let catalog = samples::everyday();
        let recipe = catalog.get(1).unwrap();

        let plain = build_card(recipe, &FavoritesSet::new(), CardOptions::default());
        let button = plain.find_by_class("favorite-btn").unwrap();
        assert!(!button.has_class("active"));
        assert_eq!(button.get_attr("aria-pressed"), Some("false"));

        let favorites: FavoritesSet = [1].into_iter().collect();
        let starred = build_card(recipe, &favorites, CardOptions::default());
        let button = starred.find_by_class("favorite-btn").unwrap();
        assert!(button.has_class("active"));
        assert_eq!(button.get_attr("data-favorite"), Some("1"));
    }

    #[test]
    fn test_favorites_can_be_disabled() {
        let catalog = samples::everyday();
        let card = build_card(
            catalog.get(1).unwrap(),
            &FavoritesSet::new(),
            CardOptions {
                favorites_enabled: false,
            },
        );
        assert!(card.find_by_class("favorite-btn").is_none());
    }

    #[test]
    fn test_metadata_line() {
        let catalog = samples::classics();
        let card = build_card(catalog.get(3).unwrap(), &FavoritesSet::new(), CardOptions::default());

        let meta = card.find_by_class("recipe-meta").unwrap();
        assert!(meta.text_content().contains("180 min"));
        let badge = meta.find_by_class("difficulty").unwrap();
        assert!(badge.has_class("hard"));
        assert_eq!(
            card.find_by_class("description").unwrap().text_content(),
            "Buttery flaky French pastries."
        );
    }

    #[test]
    fn test_no_metadata_line_without_metadata() {
        let card = build_card(&Recipe::new(1, "Toast"), &FavoritesSet::new(), CardOptions::default());
        assert!(card.find_by_class("recipe-meta").is_none());
        assert!(card.find_by_class("description").is_none());
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Section::Steps.toggle_label(false), "Show Steps");
        assert_eq!(Section::Steps.toggle_label(true), "Hide Steps");
        assert_eq!(Section::Ingredients.toggle_label(true), "Hide Ingredients");
        assert_eq!(Section::from_tag("ingredients"), Some(Section::Ingredients));
        assert_eq!(Section::from_tag("notes"), None);
    }

    #[test]
    fn test_card_escapes_title() {
        let card = build_card(
            &Recipe::new(1, "Mac & <Cheese>"),
            &FavoritesSet::new(),
            CardOptions::default(),
        );
        assert!(card.to_html().contains("<h3>Mac &amp; &lt;Cheese&gt;</h3>"));
    }
}
