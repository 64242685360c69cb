use crate::model::Recipe;

mod model;

pub use model::SearchQuery;

/// Keep recipes whose title, description or any ingredient contains `query`,
/// ignoring case.
///
/// The match is a literal substring test: no tokenization, no fuzziness.
/// Leading and trailing whitespace is dropped from `query` before matching,
/// so `"  greek "` matches "Greek Salad". A blank query returns every recipe.
/// Input order is preserved and the input is never modified.
pub fn search<'a>(recipes: &[&'a Recipe], query: &str) -> Vec<&'a Recipe> {
    match SearchQuery::parse(query) {
        Some(query) => recipes
            .iter()
            .copied()
            .filter(|recipe| query.matches(recipe))
            .collect(),
        None => recipes.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_recipes() -> Vec<Recipe> {
        vec![
            Recipe::new(1, "Pasta Alfredo")
                .with_description("Creamy Italian pasta")
                .with_ingredients(["Pasta", "Butter", "Garlic", "Cream"]),
            Recipe::new(2, "Vegetable Sandwich").with_ingredients(["Bread", "Tomato", "Butter"]),
            Recipe::new(3, "Greek Salad").with_description("Fresh veggies with feta."),
        ]
    }

    fn ids(recipes: &[&Recipe]) -> Vec<u32> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_title_match() {
        let recipes = test_recipes();
        let refs: Vec<&Recipe> = recipes.iter().collect();
        assert_eq!(ids(&search(&refs, "sandwich")), vec![2]);
    }

    #[test]
    fn test_search_trims_query() {
        let recipes = test_recipes();
        let refs: Vec<&Recipe> = recipes.iter().collect();
        assert_eq!(ids(&search(&refs, "  greek ")), vec![3]);
        assert_eq!(ids(&search(&refs, "\tbutter\n")), vec![1, 2]);
        assert!(search(&refs, "salad greek").is_empty());
    }

    #[test]
    fn test_search_description_match() {
        let recipes = test_recipes();
        let refs: Vec<&Recipe> = recipes.iter().collect();
        assert_eq!(ids(&search(&refs, "FETA")), vec![3]);
    }

    #[test]
    fn test_search_ingredient_match() {
        let recipes = test_recipes();
        let refs: Vec<&Recipe> = recipes.iter().collect();
        assert_eq!(ids(&search(&refs, "butter")), vec![1, 2]);
    }

    #[test]
    fn test_search_blank_query_is_identity() {
        let recipes = test_recipes();
        let refs: Vec<&Recipe> = recipes.iter().collect();
        assert_eq!(ids(&search(&refs, "")), vec![1, 2, 3]);
        assert_eq!(ids(&search(&refs, "   \t")), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_query_is_trimmed() {
        let recipes = test_recipes();
        let refs: Vec<&Recipe> = recipes.iter().collect();
        assert_eq!(ids(&search(&refs, "  greek ")), vec![3]);
    }

    #[test]
    fn test_search_no_matches() {
        let recipes = test_recipes();
        let refs: Vec<&Recipe> = recipes.iter().collect();
        assert!(search(&refs, "nonexistent").is_empty());
    }

    #[test]
    fn test_search_is_literal() {
        let recipes = vec![
            Recipe::new(1, "Mac (and) cheese"),
            Recipe::new(2, "Mac and cheese"),
        ];
        let refs: Vec<&Recipe> = recipes.iter().collect();
        assert_eq!(ids(&search(&refs, "(and)")), vec![1]);
        assert_eq!(ids(&search(&refs, "m.c")), Vec::<u32>::new());
    }

    #[test]
    fn test_search_query_accessors() {
        let query = SearchQuery::parse(" Pasta ").unwrap();
        assert_eq!(query.as_str(), "Pasta");
        assert!(query.is_match("pasta alfredo"));
        assert!(SearchQuery::parse(" ").is_none());
    }

    fn recipe_strategy() -> impl Strategy<Value = Recipe> {
        (
            any::<u32>(),
            "[a-cA-C ]{0,6}",
            prop::option::of("[a-cA-C ]{0,6}"),
            prop::collection::vec("[a-cA-C]{0,4}", 0..4),
        )
            .prop_map(|(id, title, description, ingredients)| Recipe {
                description,
                ..Recipe::new(id, title).with_ingredients(ingredients)
            })
    }

    proptest! {
        #[test]
        fn test_search_sound_and_complete(
            recipes in prop::collection::vec(recipe_strategy(), 0..8),
            query in "[a-cA-C]{1,3}"
        ) {
            let refs: Vec<&Recipe> = recipes.iter().collect();
            let found = search(&refs, &query);
            let needle = query.to_lowercase();
            let expected: Vec<&Recipe> = refs
                .iter()
                .copied()
                .filter(|r| r.searchable_text().any(|t| t.to_lowercase().contains(&needle)))
                .collect();

            prop_assert_eq!(found, expected);
        }

        #[test]
        fn test_search_blank_identity(
            recipes in prop::collection::vec(recipe_strategy(), 0..8),
            query in "[ \t]{0,4}"
        ) {
            let refs: Vec<&Recipe> = recipes.iter().collect();
            prop_assert_eq!(search(&refs, &query), refs.clone());
        }
    }
}
