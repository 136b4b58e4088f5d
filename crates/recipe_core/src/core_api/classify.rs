use std::collections::BTreeSet;

use super::types::{Classification, RecipeBook, RecipeKind, Summary};

pub fn classify<S: AsRef<str>>(reference: &[S], recipes: &RecipeBook) -> Classification {
    let unlearned: BTreeSet<String> = reference
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !recipes.contains(name))
        .map(ToOwned::to_owned)
        .collect();

    let mut crafted = BTreeSet::new();
    let mut uncrafted = unlearned.clone();
    let mut learned = BTreeSet::new();
    for (name, count) in recipes.iter() {
        learned.insert(name.to_string());
        if count > 0 {
            crafted.insert(name.to_string());
        } else {
            uncrafted.insert(name.to_string());
        }
    }

    Classification {
        crafted,
        uncrafted,
        unlearned,
        learned,
    }
}

/// Remaining fraction is `uncrafted / reference_total`, zero for an empty
/// reference set.
pub fn summarize(
    kind: RecipeKind,
    reference_total: usize,
    classification: &Classification,
) -> Summary {
    let uncrafted = classification.uncrafted.len();
    let fraction_remaining = if reference_total == 0 {
        0.0
    } else {
        uncrafted as f64 / reference_total as f64
    };

    Summary {
        kind,
        reference_total,
        learned: classification.learned.len(),
        crafted: classification.crafted.len(),
        uncrafted,
        unlearned: classification.unlearned.len(),
        fraction_remaining,
    }
}
