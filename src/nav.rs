//! Scroll-spy navigation state.
//!
//! The navbar owns a [`NavigationState`] and feeds it [`NavEvent`]s. Every
//! transition goes through [`NavigationState::update`], which reads section
//! geometry from a [`SectionRegistry`] and may hand back a [`NavEffect`] for
//! the host to perform (the smooth scroll itself).
//!
//! ```text
//! NavigationState + NavEvent + registry  →  update()  →  NavigationState, Option<NavEffect>
//! ```
//!
//! ## Active section rule
//!
//! The viewport's vertical midpoint is compared against every registered
//! section in document order. The first section whose top is at or above the
//! midpoint and whose bottom is at or below it wins. When none qualifies
//! (a gap between sections, or past the last one) the previously active
//! section is kept, so the highlight never flickers back to a default.
//!
//! Link clicks set the active section immediately instead of waiting for the
//! scroll they trigger to arrive.

use crate::menu::{MenuEvent, MobileMenu};
use crate::section::{SectionId, SectionRegistry};

/// Default pixel offset past which the navbar switches to its solid style.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// Initial measurement once the page is laid out.
    Mounted { offset: f64, viewport_height: f64 },
    Scrolled { offset: f64, viewport_height: f64 },
    /// A navbar, footer or call-to-action link targeting an anchor.
    LinkClicked { target: String },
    MenuToggled,
    PointerDown { inside_nav: bool },
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEffect {
    /// Smooth-scroll the document so `top` (document coordinate) is at the
    /// top of the viewport.
    ScrollTo { section: SectionId, top: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    active: SectionId,
    menu: MobileMenu,
    scrolled: bool,
    scroll_offset: f64,
    scroll_threshold: f64,
}

impl NavigationState {
    /// Start with the first registered section active. `None` when the
    /// registry has no sections, since nothing could ever be active.
    pub fn new(registry: &impl SectionRegistry, scroll_threshold: f64) -> Option<Self> {
        let active = registry.sections().first().copied()?;
        Some(Self {
            active,
            menu: MobileMenu::default(),
            scrolled: false,
            scroll_offset: registry.scroll_offset(),
            scroll_threshold,
        })
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn update(
        &mut self,
        event: NavEvent,
        registry: &impl SectionRegistry,
    ) -> Option<NavEffect> {
        match event {
            NavEvent::Mounted {
                offset,
                viewport_height,
            }
            | NavEvent::Scrolled {
                offset,
                viewport_height,
            } => {
                self.scroll_offset = offset;
                self.scrolled = offset > self.scroll_threshold;
                if let Some(id) = spy(registry, viewport_height) {
                    self.active = id;
                }
                None
            }
            NavEvent::LinkClicked { target } => {
                self.menu.update(MenuEvent::LinkSelected);
                self.follow_link(&target, registry)
            }
            NavEvent::MenuToggled => {
                self.menu.update(MenuEvent::Toggle);
                None
            }
            NavEvent::PointerDown { inside_nav } => {
                self.menu.update(MenuEvent::PointerDown { inside_nav });
                None
            }
        }
    }

    fn follow_link(&mut self, target: &str, registry: &impl SectionRegistry) -> Option<NavEffect> {
        let id = match target.parse::<SectionId>() {
            Ok(id) if registry.sections().contains(&id) => id,
            Ok(id) => {
                tracing::warn!(section = %id, "link target is not registered on this page");
                return None;
            }
            Err(err) => {
                tracing::warn!(%err, "ignoring link to unknown section");
                return None;
            }
        };
        let Some(bounds) = registry.bounds(id) else {
            tracing::warn!(section = %id, "link target is not mounted");
            return None;
        };
        self.active = id;
        Some(NavEffect::ScrollTo {
            section: id,
            top: registry.scroll_offset() + bounds.top,
        })
    }
}

/// The section under the viewport's vertical midpoint, first match in
/// document order.
pub fn spy(registry: &impl SectionRegistry, viewport_height: f64) -> Option<SectionId> {
    let midpoint = viewport_height / 2.0;
    registry
        .sections()
        .iter()
        .copied()
        .find(|&id| registry.bounds(id).is_some_and(|b| b.contains(midpoint)))
}
