//! CardAnimated: a Thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in the site stylesheet. Lists pass a
//! growing `delay_ms` for a staggered entrance.
//!
//! ```rust,ignore
//! <CardAnimated class="order-card pending" delay_ms=100>
//!     <p>"Content"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.3s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
