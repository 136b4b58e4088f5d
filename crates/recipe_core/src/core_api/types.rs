use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeKind {
    Crafting,
    Cooking,
}

impl RecipeKind {
    pub const ALL: [RecipeKind; 2] = [RecipeKind::Crafting, RecipeKind::Cooking];

    /// Prefix substituted into the `<{tag}Recipes>` section markers.
    pub fn tag(&self) -> &'static str {
        match *self {
            Self::Crafting => "crafting",
            Self::Cooking => "cooking",
        }
    }

    pub fn done_verb(&self) -> &'static str {
        match *self {
            Self::Crafting => "crafted",
            Self::Cooking => "cooked",
        }
    }
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RecipeKind {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "crafting" | "craft" => Ok(Self::Crafting),
            "cooking" | "cook" => Ok(Self::Cooking),
            _ => Err(CoreError::new(
                CoreErrorCode::UnknownRecipeKind,
                format!("unknown recipe kind '{value}', expected one of: crafting, cooking"),
            )),
        }
    }
}

/// Learned recipes of one kind, keyed by name. A later record with the same
/// name replaces the earlier count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeBook {
    entries: BTreeMap<String, u32>,
    records_scanned: usize,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, count: u32) -> Option<u32> {
        self.records_scanned += 1;
        self.entries.insert(name.into(), count)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records read, duplicates included.
    pub fn records_scanned(&self) -> usize {
        self.records_scanned
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, &count)| (name.as_str(), count))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for RecipeBook {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut book = RecipeBook::new();
        for (name, count) in iter {
            book.insert(name, count);
        }
        book
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeEntry {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Classification {
    pub crafted: BTreeSet<String>,
    pub uncrafted: BTreeSet<String>,
    pub unlearned: BTreeSet<String>,
    pub learned: BTreeSet<String>,
}

impl Classification {
    /// Learned with a count of zero.
    pub fn learned_uncrafted(&self) -> BTreeSet<String> {
        self.uncrafted.difference(&self.unlearned).cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Summary {
    pub kind: RecipeKind,
    pub reference_total: usize,
    pub learned: usize,
    pub crafted: usize,
    pub uncrafted: usize,
    pub unlearned: usize,
    pub fraction_remaining: f64,
}

impl Summary {
    pub fn is_complete(&self) -> bool {
        self.uncrafted == 0
    }
}
