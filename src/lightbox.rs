//! Gallery lightbox: closed, or open on exactly one image.
//!
//! A click on the enlarged image is swallowed by the image and never reaches
//! the backdrop, so [`LightboxEvent::ImageClicked`] leaves the state alone.
//! The backdrop, the close button and Escape all close it. Arrow keys step
//! through the gallery with wrap-around. Opening with a blank source does
//! nothing.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    Open(String),
    ImageClicked,
    BackdropClicked,
    CloseClicked,
    Escape,
    Next,
    Previous,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<String>,
    selected: Option<String>,
}

impl Lightbox {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn update(&mut self, event: LightboxEvent) {
        match event {
            LightboxEvent::Open(src) if src.trim().is_empty() => {
                tracing::debug!("ignoring lightbox open without a source");
            }
            LightboxEvent::Open(src) => self.selected = Some(src),
            LightboxEvent::ImageClicked => {}
            LightboxEvent::BackdropClicked
            | LightboxEvent::CloseClicked
            | LightboxEvent::Escape => self.selected = None,
            LightboxEvent::Next => self.step(1),
            LightboxEvent::Previous => self.step(-1),
        }
    }

    fn step(&mut self, delta: isize) {
        let Some(current) = self.selected.as_deref() else {
            return;
        };
        let Some(pos) = self.images.iter().position(|src| src == current) else {
            return;
        };
        let len = self.images.len() as isize;
        let next = (pos as isize + delta).rem_euclid(len) as usize;
        self.selected = Some(self.images[next].clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Lightbox {
        Lightbox::new(
            ["img1.png", "img2.png", "img3.png"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }

    #[test]
    fn starts_closed() {
        assert_eq!(gallery().selected(), None);
    }

    #[test]
    fn clicking_the_image_keeps_it_open() {
        let mut lb = gallery();
        lb.update(LightboxEvent::Open("img3.png".into()));
        lb.update(LightboxEvent::ImageClicked);
        assert_eq!(lb.selected(), Some("img3.png"));
    }

    #[test]
    fn backdrop_closes() {
        let mut lb = gallery();
        lb.update(LightboxEvent::Open("img3.png".into()));
        lb.update(LightboxEvent::BackdropClicked);
        assert_eq!(lb.selected(), None);
    }

    #[test]
    fn close_button_and_escape_close() {
        let mut lb = gallery();
        lb.update(LightboxEvent::Open("img1.png".into()));
        lb.update(LightboxEvent::CloseClicked);
        assert!(!lb.is_open());

        lb.update(LightboxEvent::Open("img1.png".into()));
        lb.update(LightboxEvent::Escape);
        assert!(!lb.is_open());
    }

    #[test]
    fn opening_another_image_replaces_selection() {
        let mut lb = gallery();
        lb.update(LightboxEvent::Open("img1.png".into()));
        lb.update(LightboxEvent::Open("img2.png".into()));
        assert_eq!(lb.selected(), Some("img2.png"));
    }

    #[test]
    fn arrows_wrap_around() {
        let mut lb = gallery();
        lb.update(LightboxEvent::Open("img3.png".into()));
        lb.update(LightboxEvent::Next);
        assert_eq!(lb.selected(), Some("img1.png"));
        lb.update(LightboxEvent::Previous);
        assert_eq!(lb.selected(), Some("img3.png"));
    }

    #[test]
    fn arrows_do_nothing_when_closed_or_off_gallery() {
        let mut lb = gallery();
        lb.update(LightboxEvent::Next);
        assert_eq!(lb.selected(), None);

        lb.update(LightboxEvent::Open("elsewhere.png".into()));
        lb.update(LightboxEvent::Next);
        assert_eq!(lb.selected(), Some("elsewhere.png"));
    }

    #[test]
    fn blank_source_does_not_open() {
        let mut lb = gallery();
        lb.update(LightboxEvent::Open(String::new()));
        assert!(!lb.is_open());

        lb.update(LightboxEvent::Open("img2.png".into()));
        lb.update(LightboxEvent::Open("   ".into()));
        assert_eq!(lb.selected(), Some("img2.png"));
    }

    #[test]
    fn closing_when_closed_is_harmless() {
        let mut lb = gallery();
        lb.update(LightboxEvent::BackdropClicked);
        assert!(!lb.is_open());
    }
}
