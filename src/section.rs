//! Page sections and the geometry seam the navigation bar depends on.
//!
//! The page is a fixed set of anchorable blocks. Navigation never looks at a
//! section's content, only at two things per section:
//!
//! - a stable identifier ([`SectionId`], rendered as the element `id`)
//! - its current bounding box relative to the viewport ([`Bounds`])
//!
//! Both come through the [`SectionRegistry`] trait. In the browser the
//! registry is the DOM; in tests and in the CLI it is a [`PageLayout`], a
//! list of document rectangles that answers viewport-relative bounds for a
//! given scroll offset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One anchorable content block of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Products,
    Gallery,
    Testimonials,
    Contact,
}

impl SectionId {
    /// Every section, in navbar link order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Products,
        SectionId::Gallery,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// Element id and URL fragment (`#about`).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Products => "products",
            SectionId::Gallery => "gallery",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    /// Label used in the navbar.
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Products => "Products",
            SectionId::Gallery => "Gallery",
            SectionId::Testimonials => "Testimonials",
            SectionId::Contact => "Contact",
        }
    }

    /// Label used in the footer's quick links.
    pub fn footer_label(self) -> &'static str {
        match self {
            SectionId::About => "About Us",
            SectionId::Contact => "Contact Us",
            other => other.nav_label(),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section id: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    /// Parses an anchor, tolerating a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.strip_prefix('#').unwrap_or(s);
        SectionId::ALL
            .into_iter()
            .find(|id| id.anchor() == anchor)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a section relative to the top of the viewport, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Inclusive on both edges.
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// The sections mounted on the page, in document order, plus a way to ask
/// where each one currently is.
pub trait SectionRegistry {
    /// Registered sections in document order.
    fn sections(&self) -> &[SectionId];

    /// Current viewport-relative bounds, `None` if the section is not mounted.
    fn bounds(&self, id: SectionId) -> Option<Bounds>;

    /// Current vertical scroll offset of the document, in px.
    fn scroll_offset(&self) -> f64;
}

/// Section order before layout: everything registered, nothing measured.
impl SectionRegistry for Vec<SectionId> {
    fn sections(&self) -> &[SectionId] {
        self
    }

    fn bounds(&self, _id: SectionId) -> Option<Bounds> {
        None
    }

    fn scroll_offset(&self) -> f64 {
        0.0
    }
}

/// A section placed in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

/// Static document layout that acts as a registry at a given scroll offset.
#[derive(Debug, Clone)]
pub struct PageLayout {
    order: Vec<SectionId>,
    placements: Vec<Placement>,
    scroll_offset: f64,
}

impl PageLayout {
    /// Stack sections top to bottom with the given heights.
    pub fn stacked(sections: &[(SectionId, f64)]) -> Self {
        let mut top = 0.0;
        let mut placements = Vec::with_capacity(sections.len());
        for &(id, height) in sections {
            placements.push(Placement { id, top, height });
            top += height;
        }
        Self::from_placements(placements)
    }

    /// Arbitrary placements; gaps and overlaps are allowed.
    pub fn from_placements(placements: Vec<Placement>) -> Self {
        Self {
            order: placements.iter().map(|p| p.id).collect(),
            placements,
            scroll_offset: 0.0,
        }
    }

    /// Keep the section registered but report it as not mounted.
    pub fn with_missing(mut self, id: SectionId) -> Self {
        self.placements.retain(|p| p.id != id);
        self
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    /// Total document height covered by placements.
    pub fn document_height(&self) -> f64 {
        self.placements
            .iter()
            .map(|p| p.top + p.height)
            .fold(0.0, f64::max)
    }
}

impl SectionRegistry for PageLayout {
    fn sections(&self) -> &[SectionId] {
        &self.order
    }

    fn bounds(&self, id: SectionId) -> Option<Bounds> {
        self.placements.iter().find(|p| p.id == id).map(|p| {
            let top = p.top - self.scroll_offset;
            Bounds {
                top,
                bottom: top + p.height,
            }
        })
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }
}
