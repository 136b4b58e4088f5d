//! Locating a recipe section inside a single-line save blob.
//!
//! Sections are bounded by `<{tag}Recipes>` and `</{tag}Recipes>`. Matching is
//! greedy: the section runs from the first open marker to the last close
//! marker, so two same-type sections in one blob are reported as one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarkers {
    pub open: String,
    pub close: String,
}

impl SectionMarkers {
    pub fn for_tag(tag: &str) -> Self {
        Self {
            open: format!("<{tag}Recipes>"),
            close: format!("</{tag}Recipes>"),
        }
    }
}

/// A located section: the text strictly between the markers and where it
/// sits in the blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub range: ByteRange,
    pub text: &'a str,
}

/// Returns `None` when either marker is missing or the last close marker
/// does not come after the first open marker.
pub fn locate_section<'a>(blob: &'a str, tag: &str) -> Option<Section<'a>> {
    let markers = SectionMarkers::for_tag(tag);
    let open_at = blob.find(&markers.open)?;
    let start = open_at + markers.open.len();
    let end = blob.rfind(&markers.close)?;
    if end < start {
        return None;
    }

    Some(Section {
        range: ByteRange { start, end },
        text: &blob[start..end],
    })
}
