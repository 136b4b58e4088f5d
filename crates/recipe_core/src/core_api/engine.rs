use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::layout::{ByteRange, Section, locate_section};
use crate::reader::{RecordReader, ScanError};

use super::classify::{classify, summarize};
use super::error::{CoreError, CoreErrorCode};
use super::recipe_catalog;
use super::types::{Classification, RecipeBook, RecipeEntry, RecipeKind, Summary};

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

#[derive(Debug)]
pub struct Session {
    kind: RecipeKind,
    section: ByteRange,
    recipes: RecipeBook,
    classification: Classification,
    summary: Summary,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    pub fn open_path<P: AsRef<Path>>(
        &self,
        path: P,
        kind: RecipeKind,
    ) -> Result<Session, CoreError> {
        let blob = load_save_blob(path)?;
        self.open_str(&blob, kind)
    }

    pub fn open_str(&self, blob: &str, kind: RecipeKind) -> Result<Session, CoreError> {
        let section = find_section(blob, kind.tag())?;
        let recipes = parse_recipes(section.text, kind.tag())?;
        Ok(Session::new(kind, section.range, recipes))
    }

    /// Opens one session per kind in [`RecipeKind::ALL`] order. Fails on the
    /// first kind that cannot be read.
    pub fn open_all(&self, blob: &str) -> Result<Vec<Session>, CoreError> {
        RecipeKind::ALL
            .iter()
            .map(|&kind| self.open_str(blob, kind))
            .collect()
    }
}

impl Session {
    fn new(kind: RecipeKind, section: ByteRange, recipes: RecipeBook) -> Self {
        let reference = recipe_catalog::reference_items(kind);
        let classification = classify(reference, &recipes);
        let summary = summarize(kind, reference.len(), &classification);

        Self {
            kind,
            section,
            recipes,
            classification,
            summary,
        }
    }

    pub fn kind(&self) -> RecipeKind {
        self.kind
    }

    /// Byte range of the section body inside the loaded blob.
    pub fn section_range(&self) -> ByteRange {
        self.section
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn count(&self, name: &str) -> Option<u32> {
        self.recipes.get(name)
    }

    pub fn entries(&self) -> Vec<RecipeEntry> {
        self.recipes
            .iter()
            .map(|(name, count)| RecipeEntry {
                name: name.to_string(),
                count,
            })
            .collect()
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn crafted(&self) -> &BTreeSet<String> {
        &self.classification.crafted
    }

    pub fn uncrafted(&self) -> &BTreeSet<String> {
        &self.classification.uncrafted
    }

    pub fn unlearned(&self) -> &BTreeSet<String> {
        &self.classification.unlearned
    }

    pub fn learned(&self) -> &BTreeSet<String> {
        &self.classification.learned
    }

    /// Learned names missing from the built-in table for this kind.
    pub fn unlisted(&self) -> BTreeSet<String> {
        self.recipes
            .names()
            .filter(|name| !recipe_catalog::is_reference_item(self.kind, name))
            .map(ToOwned::to_owned)
            .collect()
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

/// A save folder `Saves/Name_123` holds its main save as `Name_123`; any
/// other path is returned unchanged.
pub fn resolve_save_path(path: &Path) -> PathBuf {
    if path.is_dir()
        && let Some(name) = path.file_name()
    {
        return path.join(name);
    }
    path.to_path_buf()
}

/// Reads the first line of the save file. Later lines are ignored.
pub fn load_save_blob<P: AsRef<Path>>(path: P) -> Result<String, CoreError> {
    let path = resolve_save_path(path.as_ref());
    let file = File::open(&path).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Io,
            format!("failed to open {}: {e}", path.display()),
        )
    })?;

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Io,
            format!("failed to read {}: {e}", path.display()),
        )
    })?;

    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

pub fn find_section<'a>(blob: &'a str, tag: &str) -> Result<Section<'a>, CoreError> {
    locate_section(blob, tag).ok_or_else(|| {
        CoreError::new(
            CoreErrorCode::SectionNotFound,
            format!("no <{tag}Recipes> section found in save data"),
        )
    })
}

pub fn parse_recipes(section_text: &str, tag: &str) -> Result<RecipeBook, CoreError> {
    let mut book = RecipeBook::new();
    for record in RecordReader::new(section_text) {
        let record = record.map_err(|e| scan_error(tag, e))?;
        let count = record.count().map_err(|e| scan_error(tag, e))?;
        book.insert(record.name, count);
    }
    Ok(book)
}

fn scan_error(tag: &str, err: ScanError) -> CoreError {
    let code = match err {
        ScanError::InvalidCount { .. } => CoreErrorCode::InvalidCount,
        ScanError::UnexpectedTag { .. } | ScanError::UnterminatedField { .. } => {
            CoreErrorCode::MalformedRecord
        }
    };
    CoreError::new(code, format!("{tag} recipes: {err}"))
}
