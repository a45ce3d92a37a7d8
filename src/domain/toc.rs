//! Table of contents for rendered posts: stable heading anchors and
//! scroll-driven active section tracking.

use std::collections::HashSet;

use serde::Serialize;

/// Pixels reserved for the fixed site header when scrolling to a heading.
pub const HEADER_OFFSET_PX: f64 = 100.0;

/// Viewport root margin, as fractions of the viewport height, mirroring
/// `-10% 0% -70% 0%`: only the band between 10% and 30% from the top counts.
const ROOT_MARGIN_TOP: f64 = 0.10;
const ROOT_MARGIN_BOTTOM: f64 = 0.70;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOfContents {
    entries: Vec<TocEntry>,
}

impl TableOfContents {
    pub fn push(&mut self, entry: TocEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `None` when the document has no headings, so nothing is rendered.
    pub fn non_empty(self) -> Option<Vec<TocEntry>> {
        (!self.entries.is_empty()).then_some(self.entries)
    }
}

/// Hands out unique anchor ids in document order.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    used: HashSet<String>,
}

impl AnchorRegistry {
    /// Reuses an explicit id when present, otherwise slugifies the heading
    /// text. Collisions get `-1`, `-2`, ... suffixes.
    pub fn assign(&mut self, explicit: Option<&str>, text: &str) -> String {
        let base = explicit
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| heading_slug(text));

        let mut candidate = base.clone();
        let mut n = 0;
        while self.used.contains(&candidate) {
            n += 1;
            candidate = format!("{base}-{n}");
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

pub fn heading_slug(text: &str) -> String {
    let slug = slug::slugify(text);
    if slug.is_empty() { "section".to_string() } else { slug }
}

/// Position of a rendered heading relative to the viewport top, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingPosition {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl HeadingPosition {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        HeadingPosition { id: id.into(), top, bottom: top + height }
    }
}

/// Tracks which heading is current as the reader scrolls.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    viewport_height: f64,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new(viewport_height: f64) -> Self {
        SectionTracker { viewport_height, active: None }
    }

    pub fn resize(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
    }

    fn band(&self) -> (f64, f64) {
        (
            self.viewport_height * ROOT_MARGIN_TOP,
            self.viewport_height * (1.0 - ROOT_MARGIN_BOTTOM),
        )
    }

    pub fn intersects(&self, heading: &HeadingPosition) -> bool {
        let (band_top, band_bottom) = self.band();
        heading.bottom >= band_top && heading.top <= band_bottom
    }

    /// Feeds the latest heading positions. Among the headings inside the band
    /// the one nearest the top becomes active; with none inside, the previous
    /// active heading is kept.
    pub fn observe(&mut self, headings: &[HeadingPosition]) -> Option<&str> {
        let nearest = headings
            .iter()
            .filter(|h| self.intersects(h))
            .min_by(|a, b| a.top.total_cmp(&b.top));

        if let Some(heading) = nearest {
            self.active = Some(heading.id.clone());
        }
        self.active()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Marks a TOC entry active after a click and returns where to scroll and
    /// the fragment to push onto the URL.
    pub fn jump_to(&mut self, id: &str, heading_top: f64, scroll_y: f64) -> ScrollTarget {
        self.active = Some(id.to_string());
        ScrollTarget {
            top: scroll_offset(heading_top, scroll_y),
            fragment: fragment(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTarget {
    pub top: f64,
    pub fragment: String,
}

/// Absolute scroll position that leaves the heading just below the header.
pub fn scroll_offset(heading_top: f64, scroll_y: f64) -> f64 {
    (heading_top + scroll_y - HEADER_OFFSET_PX).max(0.0)
}

pub fn fragment(id: &str) -> String {
    format!("#{id}")
}
