use crate::model::Recipe;
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The active sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    None,
    Name,
    Time,
}

impl SortOrder {
    /// Parses a control tag. Unrecognized tags mean "leave order alone".
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "name" => SortOrder::Name,
            "time" => SortOrder::Time,
            _ => SortOrder::None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::Name => "name",
            SortOrder::Time => "time",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returns a sorted copy. `SortOrder::None` returns the input order as is.
pub fn apply_sort<'a>(recipes: &[&'a Recipe], order: SortOrder) -> Vec<&'a Recipe> {
    match order {
        SortOrder::None => recipes.to_vec(),
        SortOrder::Name => sort_by_name(recipes),
        SortOrder::Time => sort_by_time(recipes),
    }
}

/// Ascending by title using dictionary-style ordering. Stable.
pub fn sort_by_name<'a>(recipes: &[&'a Recipe]) -> Vec<&'a Recipe> {
    let mut sorted = recipes.to_vec();
    sorted.sort_by(|a, b| locale_cmp(&a.title, &b.title));
    sorted
}

/// Ascending by time. Recipes without a time go last. Stable.
pub fn sort_by_time<'a>(recipes: &[&'a Recipe]) -> Vec<&'a Recipe> {
    let mut sorted = recipes.to_vec();
    sorted.sort_by(|a, b| match (a.time, b.time) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// Dictionary ordering in three tiers. Base letters compare first with
/// accents and case ignored, so "Éclair" sorts between "Apple" and
/// "Zucchini". Accents break the remaining ties (unaccented first), then
/// case (lowercase first).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.chars()
                .map(|c| (c.is_uppercase(), c))
                .cmp(b.chars().map(|c| (c.is_uppercase(), c)))
        })
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}
