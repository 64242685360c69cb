//! The fixed, ordered recipe collection.
//!
//! A catalog is built once at startup, either from the compiled-in
//! [`samples`] or from YAML/JSON files on disk, and never changes afterwards.

use crate::model::Recipe;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

pub mod samples;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog source does not exist: {0}")]
    NotFound(Utf8PathBuf),

    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog file {path}: {message}")]
    ParseError { path: Utf8PathBuf, message: String },

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),

    #[error("Failed to read directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),
}

/// A catalog document holds either a list of recipes or a single recipe.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Many(Vec<Recipe>),
    One(Box<Recipe>),
}

impl CatalogDocument {
    fn into_recipes(self) -> Vec<Recipe> {
        match self {
            CatalogDocument::Many(recipes) => recipes,
            CatalogDocument::One(recipe) => vec![*recipe],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
        }
        Ok(Catalog { recipes })
    }

    /// Parses a YAML document containing one recipe or a list of recipes.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        Catalog::new(parse_document(yaml, Utf8Path::new("<inline>"))?)
    }

    /// Loads a catalog from a file, or from every recipe file under a
    /// directory.
    pub fn load(path: &Utf8Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        if path.is_dir() {
            Catalog::from_dir(path)
        } else {
            Catalog::from_path(path)
        }
    }

    /// Loads a single YAML or JSON catalog file.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let recipes = parse_document(&content, path)?;
        tracing::debug!("Loaded {} recipes from {}", recipes.len(), path);
        Catalog::new(recipes)
    }

    /// Loads every `*.yaml`, `*.yml` and `*.json` file below `base_dir`.
    ///
    /// Files are visited in path order; recipes keep their order within a
    /// file.
    pub fn from_dir(base_dir: &Utf8Path) -> Result<Self, CatalogError> {
        if !base_dir.is_dir() {
            return Err(CatalogError::NotFound(base_dir.to_path_buf()));
        }

        let mut paths = Vec::new();
        for ext in ["yaml", "yml", "json"] {
            let pattern = base_dir.join(format!("**/*.{ext}"));
            for entry in glob::glob(pattern.as_str())? {
                let path = Utf8PathBuf::from_path_buf(entry?)
                    .map_err(|p| CatalogError::InvalidPath(p.display().to_string()))?;
                paths.push(path);
            }
        }
        paths.sort();

        let mut recipes = Vec::new();
        for path in &paths {
            let content = std::fs::read_to_string(path)?;
            recipes.extend(parse_document(&content, path)?);
        }

        tracing::info!(
            "Loaded {} recipes from {} files under {}",
            recipes.len(),
            paths.len(),
            base_dir
        );
        Catalog::new(recipes)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

fn parse_document(content: &str, path: &Utf8Path) -> Result<Vec<Recipe>, CatalogError> {
    let parsed = if path.extension() == Some("json") {
        serde_json::from_str::<CatalogDocument>(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<CatalogDocument>(content).map_err(|e| e.to_string())
    };

    parsed
        .map(CatalogDocument::into_recipes)
        .map_err(|message| CatalogError::ParseError {
            path: path.to_path_buf(),
            message,
        })
}
