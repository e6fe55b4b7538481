//! Browser tests for the page script: navigation, menu, lightbox and forms.
//!
//! Run with: `cargo test --test browser_site -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("browser-site")
}

fn ensure_fixtures_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_qalimtech-site");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("fixtures/site").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run qalimtech-site");
        assert!(status.success(), "fixture generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_index() -> Arc<Tab> {
    ensure_fixtures_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab.wait_for_element("#contact-form").unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn clicking_the_enlarged_image_keeps_lightbox_open() {
    let tab = load_index();
    let val = eval(
        &tab,
        r#"(function() {
            document.querySelector('.gallery-item[data-src="images/feed.jpg"]').click();
            document.querySelector('.lightbox-image').click();
            const box = document.getElementById('lightbox');
            return box.classList.contains('open') + '|' +
                document.querySelector('.lightbox-image').getAttribute('src');
        })()"#,
    );
    assert_eq!(val.as_str(), Some("true|images/feed.jpg"));
}

#[test]
#[ignore]
fn backdrop_and_escape_close_lightbox() {
    let tab = load_index();
    let val = eval(
        &tab,
        r#"(function() {
            const box = document.getElementById('lightbox');
            document.querySelector('.gallery-item[data-src="images/coop.jpg"]').click();
            box.click();
            const afterBackdrop = box.classList.contains('open');
            document.querySelector('.gallery-item[data-src="images/coop.jpg"]').click();
            document.dispatchEvent(new KeyboardEvent('keydown', { key: 'Escape' }));
            return [afterBackdrop, box.classList.contains('open')].join('|');
        })()"#,
    );
    assert_eq!(val.as_str(), Some("false|false"));
}

#[test]
#[ignore]
fn arrow_keys_wrap_through_gallery() {
    let tab = load_index();
    let val = eval(
        &tab,
        r#"(function() {
            document.querySelector('.gallery-item[data-src="images/feed.jpg"]').click();
            document.dispatchEvent(new KeyboardEvent('keydown', { key: 'ArrowRight' }));
            return document.querySelector('.lightbox-image').getAttribute('src');
        })()"#,
    );
    assert_eq!(val.as_str(), Some("images/coop.jpg"));
}

#[test]
#[ignore]
fn nav_link_click_sets_active_immediately() {
    let tab = load_index();
    let val = eval(
        &tab,
        r#"(function() {
            document.querySelector('.nav-link[data-target="contact"]').click();
            return Array.from(document.querySelectorAll('.nav-link.active'))
                .map(a => a.dataset.target).join(',');
        })()"#,
    );
    assert_eq!(val.as_str(), Some("contact"));
}

#[test]
#[ignore]
fn menu_closes_on_outside_pointer_down() {
    let tab = load_index();
    let val = eval(
        &tab,
        r#"(function() {
            const menu = document.getElementById('mobile-menu');
            document.querySelector('.menu-toggle').click();
            const opened = menu.classList.contains('open');
            const press = new MouseEvent('mousedown', { bubbles: true });
            document.querySelector('main').dispatchEvent(press);
            return [opened, menu.classList.contains('open')].join('|');
        })()"#,
    );
    assert_eq!(val.as_str(), Some("true|false"));
}

#[test]
#[ignore]
fn invalid_contact_submit_shows_inline_errors() {
    let tab = load_index();
    let val = eval(
        &tab,
        r#"(function() {
            document.getElementById('email').value = 'not-an-email';
            document.getElementById('message').value = 'hi';
            document.querySelector('#contact-form button[type=submit]').click();
            return Array.from(document.querySelectorAll('#contact-form .field-error'))
                .filter(p => !p.hidden).map(p => p.textContent).join('|');
        })()"#,
    );
    assert_eq!(val.as_str(), Some("Name is required|Email is invalid"));
}

#[test]
#[ignore]
fn footer_year_is_filled() {
    let tab = load_index();
    let val = eval(&tab, r#"document.querySelector('[data-year]').textContent"#);
    let year = val.as_str().expect("year is not a string");
    assert_eq!(year.len(), 4, "year was {year:?}");
}
