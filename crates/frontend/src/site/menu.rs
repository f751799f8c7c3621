use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Clicks inside these elements never dismiss the menu.
const MENU_SELECTOR: &str = ".menu-toggle, .main-nav";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Document click; returns whether the menu was dismissed.
    pub fn click(&mut self, inside_menu: bool) -> bool {
        if self.open && !inside_menu {
            self.open = false;
            return true;
        }
        false
    }
}

/// Mobile menu state, dismissed by any click outside the toggle and the nav.
pub fn use_menu() -> RwSignal<MenuState> {
    let menu = RwSignal::new(MenuState::default());
    let _ = window_event_listener(leptos::ev::click, move |ev| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(MENU_SELECTOR).ok().flatten())
            .is_some();
        if menu.with_untracked(|m| m.is_open()) {
            menu.update(|m| {
                m.click(inside);
            });
        }
    });
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_dismisses() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.click(true));
        assert!(menu.is_open());
        assert!(menu.click(false));
        assert!(!menu.is_open());
        // Closed menu ignores clicks.
        assert!(!menu.click(false));
    }
}
