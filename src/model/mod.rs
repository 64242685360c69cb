//! Core data types shared by every stage of the renderer.
//!
//! Recipes and steps are read-only for the lifetime of the process. They are
//! deserialized once from a catalog source (or built from the compiled-in
//! samples) and then only ever borrowed.

mod recipe;
mod step;

pub use recipe::{Difficulty, Recipe};
pub use step::Step;
