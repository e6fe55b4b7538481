//! HTML site generation.
//!
//! Renders the one-page brochure from the site config, the page copy and a
//! [`PageState`] snapshot. The generator renders the initial state (home
//! active, menu closed, empty forms, lightbox closed); tests render other
//! states to check that every piece of UI state is reflected in the markup.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html      # navbar + sections in configured order + footer
//! ├── style.css       # color variables from config + static/style.css
//! ├── site.js         # browser wiring for nav, menu, lightbox, forms
//! └── images/...      # everything under site/assets/, copied verbatim
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and fingerprinted with a short
//! SHA-256 prefix in their query string so redeploys bust caches.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.

use crate::config::{self, ConfigError, SiteConfig};
use crate::contact::ContactForm;
use crate::content::{self, ContentError, SiteContent};
use crate::lightbox::Lightbox;
use crate::nav::NavigationState;
use crate::newsletter::NewsletterForm;
use crate::section::SectionId;
use crate::submit::Phase;
use crate::validate::Field;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

pub const ASSETS_DIR: &str = "assets";

const CONTACT_THANKS: &str =
    "Thank you! Your message has been sent. We'll get back to you soon.";

/// Every piece of UI state the page renders.
#[derive(Debug, Clone)]
pub struct PageState {
    pub nav: NavigationState,
    pub contact: ContactForm,
    pub newsletter: NewsletterForm,
    pub lightbox: Lightbox,
}

impl PageState {
    /// State on first paint: first section active, nothing open, forms empty.
    pub fn initial(config: &SiteConfig, content: &SiteContent) -> Result<Self, ConfigError> {
        let nav = NavigationState::new(
            &config.navigation.sections,
            config.navigation.scroll_threshold,
        )
        .ok_or_else(|| {
            ConfigError::Validation("navigation.sections must not be empty".to_string())
        })?;
        Ok(Self {
            nav,
            contact: ContactForm::new(),
            newsletter: NewsletterForm::new(),
            lightbox: Lightbox::new(content.gallery.sources()),
        })
    }
}

/// URLs of the generated stylesheet and script, fingerprinted.
#[derive(Debug, Clone)]
pub struct AssetLinks {
    pub css: String,
    pub js: String,
}

/// What a build produced, for CLI output.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub sections: Vec<SectionId>,
    pub files: Vec<String>,
    pub assets_copied: usize,
}

fn fingerprint(body: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(body.as_bytes()));
    digest[..10].to_string()
}

/// Load config and content from `source`, render the page into `output`.
pub fn generate(source: &Path, output: &Path) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source)?;
    let content = content::load_content(source)?;

    fs::create_dir_all(output)?;

    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );
    let links = AssetLinks {
        css: format!("style.css?v={}", fingerprint(&css)),
        js: format!("site.js?v={}", fingerprint(JS)),
    };
    fs::write(output.join("style.css"), &css)?;
    fs::write(output.join("site.js"), JS)?;

    let state = PageState::initial(&config, &content)?;
    let page = render_page(&config, &content, &state, &links);
    fs::write(output.join("index.html"), page.into_string())?;
    tracing::info!(output = %output.display(), "rendered index.html");

    let assets_copied = copy_assets(&source.join(ASSETS_DIR), output)?;

    Ok(GenerateReport {
        sections: config.navigation.sections.clone(),
        files: vec![
            "index.html".to_string(),
            "style.css".to_string(),
            "site.js".to_string(),
        ],
        assets_copied,
    })
}

/// Copy `assets/` into the output root. Missing directory copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        tracing::debug!(dir = %src.display(), "no assets directory");
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    tracing::info!(count = copied, "copied assets");
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(config: &SiteConfig, links: &AssetLinks, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(config.site.description);
                title { (config.site.title) }
                link rel="stylesheet" href=(links.css);
            }
            body data-scroll-threshold=(config.navigation.scroll_threshold.to_string()) {
                (content)
                script src=(links.js) defer {}
            }
        }
    }
}

/// Full page for the given state.
pub fn render_page(
    config: &SiteConfig,
    content: &SiteContent,
    state: &PageState,
    links: &AssetLinks,
) -> Markup {
    let sections = &config.navigation.sections;
    let body = html! {
        (render_navbar(content, sections, &state.nav))
        main {
            @for id in sections {
                (render_section(*id, config, content, state))
            }
        }
        (render_footer(content, sections, &state.newsletter, &config.contact.endpoint))
    };
    base_document(config, links, body)
}

/// Mounted sections in link order, which differs from document order.
fn link_order(sections: &[SectionId]) -> Vec<SectionId> {
    SectionId::ALL
        .into_iter()
        .filter(|id| sections.contains(id))
        .collect()
}

/// Fixed navbar: brand, desktop links, hamburger, mobile panel.
pub fn render_navbar(
    content: &SiteContent,
    sections: &[SectionId],
    nav: &NavigationState,
) -> Markup {
    let linked = link_order(sections);
    let links = |class: &str| {
        html! {
            @for id in &linked {
                @let active = *id == nav.active();
                a class=(if active { format!("{class} active") } else { class.to_string() })
                    href={ "#" (id.anchor()) }
                    data-target=(id.anchor())
                    aria-current=[active.then_some("true")] {
                    (id.nav_label())
                }
            }
        }
    };
    html! {
        nav #navbar.navbar.scrolled[nav.is_scrolled()] {
            div.navbar-inner {
                a.brand href="#home" data-target="home" {
                    img src=(content.brand.logo) alt={ (content.brand.name) " Logo" };
                    span { (content.brand.name) }
                }
                div.nav-links { (links("nav-link")) }
                button.menu-toggle type="button" aria-controls="mobile-menu"
                    aria-expanded=(flag(nav.menu_open())) aria-label="Toggle menu" {
                    span.bar {} span.bar {} span.bar {}
                }
            }
            div #mobile-menu.mobile-menu.open[nav.menu_open()] {
                (links("mobile-link"))
            }
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn section_frame(id: SectionId, class: &str, inner: Markup) -> Markup {
    html! {
        section id=(id.anchor()) class=(class) data-reveal {
            div.container { (inner) }
        }
    }
}

fn heading(title: &str, intro: &str) -> Markup {
    html! {
        header.section-header {
            h2 { (title) }
            div.rule {}
            @if !intro.is_empty() {
                p.section-intro { (intro) }
            }
        }
    }
}

fn render_section(
    id: SectionId,
    config: &SiteConfig,
    content: &SiteContent,
    state: &PageState,
) -> Markup {
    match id {
        SectionId::Home => render_hero(content),
        SectionId::About => render_about(content),
        SectionId::Products => render_products(content),
        SectionId::Gallery => render_gallery(content, &state.lightbox, config.gallery.lightbox),
        SectionId::Testimonials => render_testimonials(content),
        SectionId::Contact => render_contact(content, &state.contact, &config.contact.endpoint),
    }
}

fn render_hero(content: &SiteContent) -> Markup {
    let hero = &content.hero;
    let background = format!("background-image: url('{}');", hero.background);
    let inner = html! {
        div.hero-content {
            span.badge { (hero.badge) }
            h1 {
                (hero.title) br;
                span.highlight { (hero.highlight) }
            }
            p.lead { (hero.lead) }
            div.cta-row {
                a.btn.btn-primary href={ "#" (hero.primary.target.anchor()) }
                    data-target=(hero.primary.target.anchor()) { (hero.primary.label) }
                a.btn.btn-outline href={ "#" (hero.secondary.target.anchor()) }
                    data-target=(hero.secondary.target.anchor()) { (hero.secondary.label) }
            }
        }
    };
    html! {
        section id=(SectionId::Home.anchor()) class="hero" data-reveal {
            div.hero-bg style=(background) {}
            div.hero-overlay {}
            div.container { (inner) }
        }
    }
}

fn render_about(content: &SiteContent) -> Markup {
    let about = &content.about;
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, Parser::new(&about.body));

    section_frame(
        SectionId::About,
        "about",
        html! {
            (heading(&about.heading, &about.tagline))
            div.two-col {
                div.about-text {
                    (PreEscaped(body_html))
                    div.feature-grid {
                        @for feature in &about.features {
                            div.feature {
                                h3 { (feature.title) }
                                p { (feature.description) }
                            }
                        }
                    }
                }
                div.about-media {
                    img src=(about.image) alt="About Us" loading="lazy";
                    div.stat-badge {
                        p.stat-value { (about.badge_value) }
                        p.stat-label { (about.badge_label) }
                    }
                }
            }
        },
    )
}

fn render_products(content: &SiteContent) -> Markup {
    let products = &content.products;
    section_frame(
        SectionId::Products,
        "products",
        html! {
            (heading(&products.heading, &products.intro))
            div.product-grid {
                @for product in &products.items {
                    article.product-card {
                        img src=(product.image) alt=(product.name) loading="lazy";
                        div.product-body {
                            h3 { (product.name) }
                            p { (product.description) }
                            @if !product.features.is_empty() {
                                ul.product-features {
                                    @for feature in &product.features {
                                        li { (feature) }
                                    }
                                }
                            }
                            div.product-footer {
                                span.price { (product.price) }
                                a.btn.btn-primary href="#contact" data-target="contact" {
                                    "Order Now"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Gallery grid plus, when enabled, the lightbox overlay.
pub fn render_gallery(content: &SiteContent, lightbox: &Lightbox, enabled: bool) -> Markup {
    let gallery = &content.gallery;
    section_frame(
        SectionId::Gallery,
        "gallery",
        html! {
            (heading(&gallery.heading, &gallery.intro))
            div.gallery-grid {
                @for image in &gallery.images {
                    figure.gallery-item data-src=[enabled.then_some(&image.src)] {
                        img src=(image.src) alt=(image.alt) loading="lazy";
                        @if !image.title.is_empty() || !image.caption.is_empty() {
                            figcaption {
                                @if !image.title.is_empty() { h3 { (image.title) } }
                                @if !image.caption.is_empty() { p { (image.caption) } }
                            }
                        }
                    }
                }
            }
            @if enabled {
                (render_lightbox(lightbox))
            }
        },
    )
}

fn render_lightbox(lightbox: &Lightbox) -> Markup {
    let open = lightbox.is_open();
    html! {
        div #lightbox.lightbox.open[open] role="dialog" aria-modal="true"
            aria-hidden=(flag(!open)) hidden[!open] {
            button.lightbox-close type="button" aria-label="Close" { "×" }
            img.lightbox-image src=[lightbox.selected()] alt="Enlarged gallery image";
        }
    }
}

fn render_testimonials(content: &SiteContent) -> Markup {
    let testimonials = &content.testimonials;
    section_frame(
        SectionId::Testimonials,
        "testimonials",
        html! {
            (heading(&testimonials.heading, ""))
            div.testimonial-grid {
                @for t in &testimonials.items {
                    blockquote.testimonial {
                        div.testimonial-author {
                            @if !t.avatar.is_empty() {
                                img.avatar src=(t.avatar) alt=(t.name) loading="lazy";
                            }
                            div {
                                p.author-name { (t.name) }
                                p.author-role { (t.role) }
                            }
                        }
                        p.testimonial-body { "\u{201c}" (t.content) "\u{201d}" }
                    }
                }
            }
        },
    )
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Email => "Your Email",
        Field::Phone => "Your Phone Number",
        Field::Message => "Your Message",
    }
}

fn field_placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "John Doe",
        Field::Email => "john@example.com",
        Field::Phone => "+123 456 7890",
        Field::Message => "How can we help you?",
    }
}

fn render_field(form: &ContactForm, field: Field) -> Markup {
    let error = form.error(field);
    let error_id = format!("{}-error", field.key());
    let disabled = form.submitting();
    let input_type = match field {
        Field::Email => "email",
        Field::Phone => "tel",
        _ => "text",
    };
    html! {
        div.field.has-error[error.is_some()] {
            label for=(field.key()) { (field_label(field)) }
            @match field {
                Field::Message => {
                    textarea id=(field.key()) name=(field.key())
                        placeholder=(field_placeholder(field))
                        aria-invalid=[error.is_some().then_some("true")]
                        aria-describedby=[error.is_some().then_some(&error_id)]
                        disabled[disabled] { (form.value(field)) }
                }
                _ => {
                    input id=(field.key()) name=(field.key()) type=(input_type)
                        value=(form.value(field))
                        placeholder=(field_placeholder(field))
                        aria-invalid=[error.is_some().then_some("true")]
                        aria-describedby=[error.is_some().then_some(&error_id)]
                        disabled[disabled];
                }
            }
            p.field-error id=(error_id) hidden[error.is_none()] {
                @if let Some(e) = error { (e.to_string()) }
            }
        }
    }
}

fn status_banner(phase: &Phase, success: &str) -> Markup {
    html! {
        @match phase {
            Phase::Succeeded => {
                p.form-status.success role="status" { (success) }
            }
            Phase::Failed(reason) => {
                p.form-status.failure role="alert" {
                    "Something went wrong: " (reason) ". Please try again."
                }
            }
            _ => {
                p.form-status role="status" hidden {}
            }
        }
    }
}

/// Contact details panel and the contact form in its current state.
pub fn render_contact(content: &SiteContent, form: &ContactForm, endpoint: &str) -> Markup {
    let contact = &content.contact;
    let submitting = form.submitting();
    section_frame(
        SectionId::Contact,
        "contact",
        html! {
            (heading(&contact.heading, &contact.intro))
            div.two-col {
                div.contact-info {
                    h3 { "Contact Information" }
                    dl {
                        dt { "Email Us At" }
                        dd { a href={ "mailto:" (contact.email) } { (contact.email) } }
                        dt { "Call Us At" }
                        dd {
                            a href={ "tel:" (contact.phone.replace(' ', "")) } { (contact.phone) }
                        }
                        dt { "Visit Our Farm" }
                        dd { (contact.address.join(", ")) }
                    }
                    (render_socials(content))
                    div.hours {
                        p.hours-title { "Business Hours" }
                        ul {
                            @for h in &contact.hours {
                                li { span { (h.days) ":" } span { (h.hours) } }
                            }
                        }
                    }
                }
                form #contact-form.contact-form novalidate
                    data-endpoint=[(!endpoint.is_empty()).then_some(endpoint)]
                    aria-busy=(flag(submitting)) {
                    h3 { "Send a Message" }
                    @for field in Field::ALL {
                        (render_field(form, field))
                    }
                    button.btn.btn-primary.submit type="submit" disabled[submitting] {
                        @if submitting { "Sending..." } @else { "Send Message" }
                    }
                    (status_banner(form.phase(), CONTACT_THANKS))
                }
            }
        },
    )
}

fn render_socials(content: &SiteContent) -> Markup {
    html! {
        @if !content.contact.socials.is_empty() {
            ul.socials {
                @for social in &content.contact.socials {
                    li {
                        a href=(social.url) target="_blank" rel="noopener"
                            aria-label=(social.name) {
                            (social.name)
                        }
                    }
                }
            }
        }
    }
}

/// Footer: brand blurb, quick links, contact info, socials, newsletter.
pub fn render_footer(
    content: &SiteContent,
    sections: &[SectionId],
    newsletter: &NewsletterForm,
    endpoint: &str,
) -> Markup {
    let error = newsletter.error();
    let submitting = newsletter.phase().is_submitting();
    html! {
        footer.site-footer {
            div.container.footer-grid {
                div.footer-brand {
                    h3 { (content.brand.name) }
                    p { (content.footer.blurb) }
                }
                div {
                    h4 { "Quick Links" }
                    ul.quick-links {
                        @for id in link_order(sections) {
                            li {
                                a href={ "#" (id.anchor()) } data-target=(id.anchor()) {
                                    (id.footer_label())
                                }
                            }
                        }
                    }
                }
                div {
                    h4 { "Contact Info" }
                    p { (content.contact.email) }
                    p { (content.contact.phone) }
                    p {
                        @for (i, line) in content.contact.address.iter().enumerate() {
                            @if i > 0 { br; }
                            (line)
                        }
                    }
                }
                div {
                    h4 { "Connect With Us" }
                    (render_socials(content))
                    h4 { "Newsletter" }
                    p { (content.footer.newsletter_intro) }
                    form #newsletter-form.newsletter-form novalidate
                        data-endpoint=[(!endpoint.is_empty()).then_some(endpoint)] {
                        div.field.has-error[error.is_some()] {
                            input #newsletter-email type="email" name="email"
                                placeholder="Your email address" value=(newsletter.email())
                                aria-label="Email address"
                                aria-invalid=[error.is_some().then_some("true")]
                                disabled[submitting];
                            p.field-error hidden[error.is_none()] {
                                @if let Some(e) = error { (e.to_string()) }
                            }
                        }
                        button.btn.btn-primary type="submit" disabled[submitting] { "Subscribe" }
                        (status_banner(newsletter.phase(), "Thanks for subscribing!"))
                    }
                }
            }
            div.footer-bottom {
                p { "\u{a9} " span data-year {} " " (content.brand.name) ". All rights reserved." }
                @if !content.footer.credit.is_empty() {
                    p.credit { (content.footer.credit) }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FormEvent;
    use crate::lightbox::LightboxEvent;
    use crate::nav::NavEvent;
    use crate::newsletter::NewsletterEvent;
    use crate::section::SectionRegistry;
    use crate::submit::SubmissionError;
    use crate::test_helpers::{fill_contact, setup_fixtures, stock_layout};
    use tempfile::TempDir;

    fn links() -> AssetLinks {
        AssetLinks {
            css: "style.css".into(),
            js: "site.js".into(),
        }
    }

    fn stock() -> (SiteConfig, SiteContent, PageState) {
        let config = SiteConfig::default();
        let content = SiteContent::default();
        let state = PageState::initial(&config, &content).unwrap();
        (config, content, state)
    }

    #[test]
    fn page_has_doctype_and_title() {
        let (config, content, state) = stock();
        let html = render_page(&config, &content, &state, &links()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>QalimTech Farms</title>"));
        assert!(html.contains(r#"data-scroll-threshold="50""#));
    }

    #[test]
    fn hero_tag_opens_with_its_id_like_every_section() {
        let (config, content, state) = stock();
        let html = render_page(&config, &content, &state, &links()).into_string();
        for id in &config.navigation.sections {
            let class = if *id == SectionId::Home { "hero" } else { id.anchor() };
            let tag = format!(r#"<section id="{}" class="{class}""#, id.anchor());
            assert!(html.contains(&tag), "missing {tag}");
        }
    }

    #[test]
    fn empty_section_list_is_rejected_before_rendering() {
        let (mut config, content, _) = stock();
        config.navigation.sections.clear();
        let err = PageState::initial(&config, &content).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn sections_render_in_configured_order() {
        let (config, content, state) = stock();
        let html = render_page(&config, &content, &state, &links()).into_string();
        let positions: Vec<usize> = config
            .navigation
            .sections
            .iter()
            .map(|id| {
                html.find(&format!(r#"<section id="{}""#, id.anchor()))
                    .unwrap_or_else(|| panic!("section {id} missing"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn omitted_sections_are_not_rendered_or_linked() {
        let (mut config, content, _) = stock();
        config.navigation.sections = vec![SectionId::Home, SectionId::Contact];
        let state = PageState::initial(&config, &content).unwrap();
        let html = render_page(&config, &content, &state, &links()).into_string();
        assert!(!html.contains(r#"id="gallery""#));
        assert!(!html.contains(r##"href="#gallery""##));
        assert!(html.contains(r#"id="contact""#));
    }

    #[test]
    fn navbar_marks_only_active_link() {
        let layout = stock_layout();
        let (_, content, _) = stock();
        let mut nav = NavigationState::new(&layout, 50.0).unwrap();
        nav.update(
            NavEvent::LinkClicked {
                target: "products".into(),
            },
            &layout,
        );
        let html = render_navbar(&content, layout.sections(), &nav).into_string();
        assert!(html.contains(r##"class="nav-link active" href="#products""##));
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert_eq!(html.matches(r#"aria-current="true""#).count(), 2);
    }

    #[test]
    fn nav_links_use_link_order_not_document_order() {
        let (config, content, state) = stock();
        let html = render_navbar(&content, &config.navigation.sections, &state.nav).into_string();
        let products = html.find(r##"href="#products""##).unwrap();
        let gallery = html.find(r##"href="#gallery""##).unwrap();
        assert!(products < gallery);
    }

    #[test]
    fn navbar_reflects_scroll_and_menu() {
        let mut layout = stock_layout();
        let (_, content, _) = stock();
        let mut nav = NavigationState::new(&layout, 50.0).unwrap();
        let closed = render_navbar(&content, layout.sections(), &nav).into_string();
        assert!(closed.contains(r#"aria-expanded="false""#));
        assert!(!closed.contains("mobile-menu open"));

        layout.scroll_to(300.0);
        nav.update(
            NavEvent::Scrolled {
                offset: 300.0,
                viewport_height: 800.0,
            },
            &layout,
        );
        nav.update(NavEvent::MenuToggled, &layout);
        let html = render_navbar(&content, layout.sections(), &nav).into_string();
        assert!(html.contains("navbar scrolled"));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("mobile-menu open"));
    }

    #[test]
    fn contact_form_shows_inline_errors() {
        let (_, content, _) = stock();
        let mut form = fill_contact("", "not-an-email", "", "hi");
        form.update(FormEvent::Submit);
        let html = render_contact(&content, &form, "").into_string();
        assert!(html.contains("Name is required"));
        assert!(html.contains("Email is invalid"));
        assert!(!html.contains("Message is required"));
        assert_eq!(html.matches(r#"aria-invalid="true""#).count(), 2);
        assert!(html.contains(r#"value="not-an-email""#));
    }

    #[test]
    fn contact_form_disables_submit_while_sending() {
        let (_, content, _) = stock();
        let mut form = fill_contact("Ada", "a@b.com", "", "hi");
        form.update(FormEvent::Submit);
        let html = render_contact(&content, &form, "").into_string();
        assert!(html.contains("Sending..."));
        assert!(html.contains(r#"type="submit" disabled"#));
        assert!(html.contains(r#"aria-busy="true""#));
    }

    #[test]
    fn contact_form_banners() {
        let (_, content, _) = stock();
        let mut form = fill_contact("Ada", "a@b.com", "", "hi");
        form.update(FormEvent::Submit);
        form.update(FormEvent::Resolved(Err(SubmissionError::Rejected(
            "offline".into(),
        ))));
        let failed = render_contact(&content, &form, "").into_string();
        assert!(failed.contains("form-status failure"));
        assert!(failed.contains("offline"));
        assert!(failed.contains(r#"value="Ada""#));

        form.update(FormEvent::Submit);
        form.update(FormEvent::Resolved(Ok(())));
        let done = render_contact(&content, &form, "").into_string();
        assert!(done.contains("form-status success"));
        assert!(!done.contains(r#"value="Ada""#));
    }

    #[test]
    fn endpoint_becomes_data_attribute() {
        let (_, content, state) = stock();
        let html = render_contact(&content, &state.contact, "https://api.example/contact")
            .into_string();
        assert!(html.contains(r#"data-endpoint="https://api.example/contact""#));
        let bare = render_contact(&content, &state.contact, "").into_string();
        assert!(!bare.contains("data-endpoint"));
    }

    #[test]
    fn lightbox_renders_selected_image() {
        let (_, content, mut state) = stock();
        let closed = render_gallery(&content, &state.lightbox, true).into_string();
        assert!(closed.contains(r#"aria-hidden="true""#));

        state
            .lightbox
            .update(LightboxEvent::Open("images/gallery-3.jpg".into()));
        state.lightbox.update(LightboxEvent::ImageClicked);
        let open = render_gallery(&content, &state.lightbox, true).into_string();
        assert!(open.contains("lightbox open"));
        assert!(open.contains(r#"class="lightbox-image" src="images/gallery-3.jpg""#));
    }

    #[test]
    fn gallery_without_lightbox() {
        let (_, content, state) = stock();
        let html = render_gallery(&content, &state.lightbox, false).into_string();
        assert!(!html.contains(r#"id="lightbox""#));
        assert!(!html.contains("data-src"));
        assert_eq!(html.matches("gallery-item").count(), 6);
    }

    #[test]
    fn footer_newsletter_error_and_links() {
        let (config, content, _) = stock();
        let mut newsletter = NewsletterForm::new();
        newsletter.update(NewsletterEvent::Edit("farm".into()));
        newsletter.update(NewsletterEvent::Submit);
        let html = render_footer(&content, &config.navigation.sections, &newsletter, "")
            .into_string();
        assert!(html.contains("Email is invalid"));
        assert!(html.contains("About Us"));
        assert!(html.contains("Contact Us"));
        assert!(html.contains("Agric Ojo"));
    }

    #[test]
    fn about_body_markdown_is_rendered() {
        let (config, mut content, state) = stock();
        content.about.body = "We raise **free-range** birds.".into();
        let html = render_page(&config, &content, &state, &links()).into_string();
        assert!(html.contains("<strong>free-range</strong>"));
    }

    #[test]
    fn copy_is_escaped() {
        let (config, mut content, state) = stock();
        content.hero.lead = "<script>alert('x')</script>".into();
        let html = render_page(&config, &content, &state, &links()).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn hero_ctas_target_sections() {
        let (config, content, state) = stock();
        let html = render_page(&config, &content, &state, &links()).into_string();
        assert!(html.contains(r##"href="#about" data-target="about">Learn More"##));
        assert!(html.contains(r##"href="#contact" data-target="contact">Contact Us"##));
    }

    #[test]
    fn generate_writes_site_and_copies_assets() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::create_dir_all(source.path().join("assets/images")).unwrap();
        fs::write(source.path().join("assets/images/hero.jpg"), b"jpg").unwrap();
        fs::write(source.path().join("assets/favicon.ico"), b"ico").unwrap();

        let report = generate(source.path(), output.path()).unwrap();
        assert_eq!(report.assets_copied, 2);
        assert_eq!(report.sections.len(), 6);
        assert!(output.path().join("images/hero.jpg").exists());

        let index = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(index.contains("style.css?v="));
        let css = fs::read_to_string(output.path().join("style.css")).unwrap();
        assert!(css.contains("--color-accent: #f59e0b"));
        assert!(output.path().join("site.js").exists());
    }

    #[test]
    fn generate_fixture_site() {
        let source = setup_fixtures();
        let output = TempDir::new().unwrap();
        let report = generate(source.path(), output.path()).unwrap();
        assert_eq!(
            report.sections,
            vec![
                SectionId::Home,
                SectionId::About,
                SectionId::Gallery,
                SectionId::Products,
                SectionId::Contact,
            ]
        );
        assert_eq!(report.assets_copied, 4);

        let index = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(index.contains("<title>QalimTech Farms | Fixture</title>"));
        assert!(index.contains(r#"data-scroll-threshold="80""#));
        assert!(index.contains("Around the Farm"));
        assert!(index.contains(r#"data-src="images/pasture.jpg""#));
        assert!(!index.contains(r#"id="testimonials""#));
        assert!(index.contains("Fixture lead copy"));
    }

    #[test]
    fn generate_reports_bad_config() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(source.path().join("config.toml"), "[navigation]\nsections = []\n").unwrap();
        let err = generate(source.path(), output.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Config(ConfigError::Validation(_))));
    }

    #[test]
    fn fingerprint_is_stable_and_short() {
        assert_eq!(fingerprint("a"), fingerprint("a"));
        assert_ne!(fingerprint("a"), fingerprint("b"));
        assert_eq!(fingerprint("a").len(), 10);
    }
}
