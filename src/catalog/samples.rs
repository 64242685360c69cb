//! Compiled-in sample catalogs.

use super::Catalog;
use crate::model::{Difficulty, Recipe, Step};

/// Two everyday recipes with ingredient lists and nested steps.
pub fn everyday() -> Catalog {
    Catalog {
        recipes: vec![
            Recipe::new(1, "Pasta Alfredo")
                .with_ingredients(["Pasta", "Butter", "Garlic", "Cream", "Cheese", "Salt"])
                .with_steps(vec![
                    Step::instruction("Boil pasta"),
                    Step::composite(
                        "Prepare sauce",
                        vec![
                            Step::instruction("Heat butter"),
                            Step::instruction("Add garlic"),
                            Step::composite(
                                "Add cream and cheese",
                                vec![
                                    Step::instruction("Stir continuously"),
                                    Step::instruction("Simmer for 5 minutes"),
                                ],
                            ),
                        ],
                    ),
                    Step::instruction("Mix pasta with sauce"),
                    Step::instruction("Serve hot"),
                ]),
            Recipe::new(2, "Vegetable Sandwich")
                .with_ingredients(["Bread", "Tomato", "Cucumber", "Butter", "Salt"])
                .with_steps(vec![
                    Step::instruction("Slice vegetables"),
                    Step::instruction("Butter the bread"),
                    Step::instruction("Assemble sandwich"),
                    Step::instruction("Serve"),
                ]),
        ],
    }
}

/// Eight recipes carrying time, difficulty and category metadata.
pub fn classics() -> Catalog {
    let entry = |id: u32,
                 title: &str,
                 time: u32,
                 difficulty: Difficulty,
                 description: &str,
                 category: &str| {
        Recipe::new(id, title)
            .with_time(time)
            .with_difficulty(difficulty)
            .with_description(description)
            .with_category(category)
    };

    Catalog {
        recipes: vec![
            entry(1, "Classic Spaghetti Carbonara", 25, Difficulty::Easy, "A creamy Italian pasta dish.", "pasta"),
            entry(2, "Chicken Tikka Masala", 45, Difficulty::Medium, "Tender chicken in spiced sauce.", "curry"),
            entry(3, "Homemade Croissants", 180, Difficulty::Hard, "Buttery flaky French pastries.", "baking"),
            entry(4, "Greek Salad", 15, Difficulty::Easy, "Fresh veggies with feta.", "salad"),
            entry(5, "Beef Wellington", 120, Difficulty::Hard, "Beef wrapped in pastry.", "meat"),
            entry(6, "Vegetable Stir Fry", 20, Difficulty::Easy, "Quick mixed vegetables.", "vegetarian"),
            entry(7, "Pad Thai", 30, Difficulty::Medium, "Thai noodles with peanuts.", "noodles"),
            entry(8, "Margherita Pizza", 60, Difficulty::Medium, "Classic Italian pizza.", "pizza"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_have_unique_ids() {
        for catalog in [everyday(), classics()] {
            assert!(Catalog::new(catalog.recipes().to_vec()).is_ok());
        }
    }

    #[test]
    fn test_everyday_nesting() {
        let catalog = everyday();
        let alfredo = catalog.get(1).unwrap();
        assert_eq!(alfredo.steps.len(), 4);
        assert_eq!(alfredo.steps[1].substeps().len(), 3);
    }

    #[test]
    fn test_classics_metadata() {
        let catalog = classics();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.iter().all(|r| r.time.is_some() && r.difficulty.is_some()));
    }
}
