mod classify;
mod engine;
mod error;
pub mod recipe_catalog;
mod types;

pub use classify::{classify, summarize};
pub use engine::{Engine, Session, find_section, load_save_blob, parse_recipes, resolve_save_path};
pub use error::{CoreError, CoreErrorCode};
pub use types::{Classification, RecipeBook, RecipeEntry, RecipeKind, Summary};
