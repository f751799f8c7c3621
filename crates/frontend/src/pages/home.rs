use leptos::prelude::*;

use crate::domain::a001_order::ui::upload::UploadWidget;
use crate::shared::browser;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::site::featured::FeaturedProducts;
use crate::site::loading_screen::LoadingScreen;
use crate::site::menu::use_menu;
use crate::site::reveal::use_reveal;
use crate::site::ripple::use_ripple;
use crate::site::scroll::use_scroll_state;
use crate::site::swipe::use_swipe_navigation;

const NAV_LINKS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("categories", "Categories"),
    ("featured", "Featured"),
    ("upload", "Print Orders"),
];

/// (front icon, title, back text)
const CATEGORIES: [(&str, &str, &str); 4] = [
    ("📚", "Books", "School textbooks, guides and reference books for every class."),
    ("✏️", "Stationery", "Pens, pencils, notebooks and everything for the desk."),
    ("🎨", "Art Supplies", "Colours, brushes, sketchbooks and craft material."),
    ("🖨️", "Printing", "Documents, projects and photos printed while you wait."),
];

/// Smooth-scroll to an in-page section instead of jumping.
fn scroll_to_section(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(target) = target {
        browser::smooth_scroll_into_view(&target);
    }
}

#[component]
fn CategoryCard(icon_text: &'static str, title: &'static str, back: &'static str) -> impl IntoView {
    let flipped = RwSignal::new(false);

    view! {
        <div class="category-card reveal" on:click=move |_| flipped.update(|f| *f = !*f)>
            <div class="category-card-inner" class:is-flipped=move || flipped.get()>
                <div class="category-card-front">
                    <span class="category-icon">{icon_text}</span>
                    <h3>{title}</h3>
                </div>
                <div class="category-card-back">
                    <p>{back}</p>
                </div>
            </div>
        </div>
    }
}

/// Public landing page with the order upload form.
#[component]
pub fn HomePage() -> impl IntoView {
    let timing = use_config().timing;
    let scroll = use_scroll_state();
    let menu = use_menu();

    use_reveal(timing.reveal_stagger_ms);
    use_swipe_navigation(timing.swipe_threshold_px);
    use_ripple(timing.ripple_ms);

    let nav = NAV_LINKS
        .iter()
        .map(|&(id, label)| {
            view! {
                <a
                    href=format!("#{}", id)
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(id);
                        menu.update(|m| m.close());
                    }
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <LoadingScreen />
        <div
            class="scroll-progress"
            style=move || format!("width: {}%;", scroll.get().progress)
        ></div>

        <header class="site-header" class:scrolled=move || scroll.get().scrolled>
            <div class="logo">"Print & Stationery"</div>
            <nav class="main-nav" class:active=move || menu.get().is_open()>
                {nav}
            </nav>
            <div class="header-actions">
                <ThemeToggle />
                <button
                    class="menu-toggle"
                    class:active=move || menu.get().is_open()
                    aria-label="Toggle menu"
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    <span
                        class="menu-toggle__icon"
                        style=move || {
                            if menu.get().is_open() { "transform: rotate(90deg);" } else { "transform: rotate(0deg);" }
                        }
                    >
                        {move || icon(if menu.get().is_open() { "x" } else { "menu" })}
                    </span>
                </button>
            </div>
        </header>

        <main>
            <section id="home" class="hero">
                <div class="hero-content reveal">
                    <h1>"Everything for School, Office and Art"</h1>
                    <p>"Books, stationery and same-day printing from your neighbourhood shop."</p>
                    <a
                        href="#upload"
                        class="btn btn-primary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("upload");
                        }
                    >
                        "Send Files to Print"
                    </a>
                </div>
            </section>

            <section id="categories" class="categories">
                <h2 class="section-title reveal">"Shop by Category"</h2>
                <div class="category-grid">
                    {CATEGORIES
                        .iter()
                        .map(|&(icon_text, title, back)| {
                            view! { <CategoryCard icon_text=icon_text title=title back=back /> }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="featured" class="featured">
                <h2 class="section-title reveal">"Featured Products"</h2>
                <FeaturedProducts />
            </section>

            <section id="upload" class="upload-section">
                <h2 class="section-title reveal">"Print Orders"</h2>
                <p class="section-subtitle reveal">
                    "Upload your documents with your name and phone number. We will call you when they are ready."
                </p>
                <UploadWidget />
            </section>
        </main>

        <footer class="site-footer">
            <p>"Print & Stationery. Open Monday to Saturday, 9 AM to 8 PM."</p>
        </footer>
    }
}
