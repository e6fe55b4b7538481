//! # QalimTech Site
//!
//! The one-page brochure site for QalimTech Farms, a poultry and pig farm.
//! A fixed navbar links to six anchored sections (hero, about, products,
//! gallery, testimonials, contact), followed by a footer with a newsletter
//! signup.
//!
//! # Architecture: State Machines Plus a Renderer
//!
//! Every interactive piece of the page is an explicit state object driven by
//! discrete events:
//!
//! ```text
//! NavigationState  ← Mounted / Scrolled / LinkClicked / MenuToggled / PointerDown
//! ContactForm      ← Edit / Submit / Resolved   → Send(payload)
//! NewsletterForm   ← Edit / Submit / Resolved   → Subscription
//! Lightbox         ← Open / ImageClicked / BackdropClicked / Escape / Next / Previous
//! ```
//!
//! Transitions are pure: `update(event)` mutates the state and may return an
//! effect for the host to perform (scroll somewhere, send a payload). The host
//! is either the browser script shipped with the page or the CLI.
//!
//! The generator renders a snapshot of those states to HTML with Maud, so what
//! the page shows is always a function of the state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`section`] | Section ids, viewport bounds, and the `SectionRegistry` geometry seam |
//! | [`nav`] | Scroll-spy active section, scrolled flag, link clicks |
//! | [`menu`] | Mobile menu open/closed |
//! | [`validate`] | Field rules shared by both forms |
//! | [`submit`] | Submission phases, the `SubmissionSink` trait, the JSON-lines `Outbox` |
//! | [`contact`] | Contact form state machine |
//! | [`newsletter`] | Footer newsletter form state machine |
//! | [`lightbox`] | Gallery lightbox |
//! | [`config`] | `config.toml` layering over stock defaults, validation, color CSS |
//! | [`content`] | `content.toml` page copy with the same layering |
//! | [`generate`] | Maud rendering and the `dist/` writer |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Geometry Behind a Trait
//!
//! Scroll-spy needs the current bounding box of each section. Navigation asks
//! a [`section::SectionRegistry`] instead of touching a document, which lets
//! tests drive it with a [`section::PageLayout`] of plain rectangles.
//!
//! ## Submission as an Effect
//!
//! Forms never perform I/O. Submitting yields the payload and parks the form
//! in `Submitting`; whoever delivered it feeds the outcome back. A second
//! submit while one is in flight is ignored, so duplicates cannot happen.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup is
//! a build error and all interpolation is auto-escaped.

pub mod config;
pub mod contact;
pub mod content;
pub mod generate;
pub mod lightbox;
pub mod menu;
pub mod nav;
pub mod newsletter;
pub mod output;
pub mod section;
pub mod submit;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
