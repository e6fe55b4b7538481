//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output leads with what the page contains (sections, their headings, how
//! many items each carries) and shows filesystem paths only as indented
//! context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Sections
//! 001 home: Welcome to Qalimtech Farms
//! 002 about: About QalimTech Farms (3 features)
//! 003 gallery: Our Gallery (6 images, lightbox)
//!
//! Sources
//!     config.toml
//!     content.toml (stock copy)
//!     assets/
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html
//! style.css
//! site.js
//!
//! Generated 6 sections, 3 files, 12 assets → dist
//! ```
//!
//! ## Contact / Subscribe
//!
//! ```text
//! Not sent
//!     name: Name is required
//!     email: Email is invalid
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::config::{CONFIG_FILE, SiteConfig};
use crate::content::{CONTENT_FILE, SiteContent};
use crate::generate::{ASSETS_DIR, GenerateReport};
use crate::section::SectionId;
use crate::submit::Phase;
use crate::validate::{Field, ValidationError};
use std::collections::BTreeMap;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Heading plus item count for one section.
fn section_summary(id: SectionId, config: &SiteConfig, content: &SiteContent) -> String {
    match id {
        SectionId::Home => format!("{} {}", content.hero.title, content.hero.highlight),
        SectionId::About => format!(
            "{} ({})",
            content.about.heading,
            plural(content.about.features.len(), "feature", "features")
        ),
        SectionId::Products => format!(
            "{} ({})",
            content.products.heading,
            plural(content.products.items.len(), "product", "products")
        ),
        SectionId::Gallery => {
            let count = plural(content.gallery.images.len(), "image", "images");
            if config.gallery.lightbox {
                format!("{} ({count}, lightbox)", content.gallery.heading)
            } else {
                format!("{} ({count})", content.gallery.heading)
            }
        }
        SectionId::Testimonials => format!(
            "{} ({})",
            content.testimonials.heading,
            plural(content.testimonials.items.len(), "testimonial", "testimonials")
        ),
        SectionId::Contact => format!("{} ({})", content.contact.heading, content.contact.email),
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the `check` command: resolved sections and which sources exist.
pub fn format_check_output(
    config: &SiteConfig,
    content: &SiteContent,
    source_root: &Path,
) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for (i, id) in config.navigation.sections.iter().enumerate() {
        lines.push(format!(
            "{} {}: {}",
            format_index(i + 1),
            id,
            section_summary(*id, config, content)
        ));
    }

    lines.push(String::new());
    lines.push("Sources".to_string());
    for file in [CONFIG_FILE, CONTENT_FILE] {
        if source_root.join(file).exists() {
            lines.push(format!("{}{}", indent(1), file));
        } else {
            let fallback = if file == CONFIG_FILE {
                "stock defaults"
            } else {
                "stock copy"
            };
            lines.push(format!("{}{} ({})", indent(1), file, fallback));
        }
    }
    if source_root.join(ASSETS_DIR).is_dir() {
        lines.push(format!("{}{}/", indent(1), ASSETS_DIR));
    }
    lines
}

pub fn print_check_output(config: &SiteConfig, content: &SiteContent, source_root: &Path) {
    for line in format_check_output(config, content, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the `build` command: files written and a one-line summary.
pub fn format_generate_output(report: &GenerateReport, output_root: &Path) -> Vec<String> {
    let mut lines: Vec<String> = report.files.clone();
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {} → {}",
        plural(report.sections.len(), "section", "sections"),
        plural(report.files.len(), "file", "files"),
        plural(report.assets_copied, "asset", "assets"),
        output_root.display()
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport, output_root: &Path) {
    for line in format_generate_output(report, output_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Contact / Subscribe
// ============================================================================

/// Format a form submission: per-field errors, or the final phase.
pub fn format_submission_output(
    phase: &Phase,
    errors: &BTreeMap<Field, ValidationError>,
    destination: &Path,
) -> Vec<String> {
    if !errors.is_empty() {
        let mut lines = vec!["Not sent".to_string()];
        for (field, error) in errors {
            lines.push(format!("{}{}: {}", indent(1), field, error));
        }
        return lines;
    }
    match phase {
        Phase::Succeeded => vec![format!("Sent → {}", destination.display())],
        Phase::Failed(reason) => vec![format!("Failed: {}", reason)],
        Phase::Submitting => vec!["Sending...".to_string()],
        Phase::Editing => vec!["Not sent".to_string()],
    }
}

pub fn print_submission_output(
    phase: &Phase,
    errors: &BTreeMap<Field, ValidationError>,
    destination: &Path,
) {
    for line in format_submission_output(phase, errors, destination) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
