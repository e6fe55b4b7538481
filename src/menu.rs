//! Mobile menu open/closed state.

/// Events the mobile menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger / close button.
    Toggle,
    /// Any navigation link was chosen.
    LinkSelected,
    /// A pointer press somewhere on the page.
    PointerDown { inside_nav: bool },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn update(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::Toggle => self.open = !self.open,
            MenuEvent::LinkSelected => self.open = false,
            MenuEvent::PointerDown { inside_nav } => {
                if !inside_nav {
                    self.open = false;
                }
            }
        }
    }
}
