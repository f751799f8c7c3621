use crate::pages::admin::AdminPage;
use crate::pages::home::HomePage;
use crate::shared::browser;
use leptos::prelude::*;

/// Page controllers, selected once from the location path at mount.
///
/// `/login` and `/logout` are served by the backend and never reach here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Admin,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/admin" => Page::Admin,
            _ => Page::Home,
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    match Page::from_path(&browser::current_path()) {
        Page::Admin => view! { <AdminPage /> }.into_any(),
        Page::Home => view! { <HomePage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/admin"), Page::Admin);
        assert_eq!(Page::from_path("/admin/"), Page::Admin);
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/index.html"), Page::Home);
    }
}
