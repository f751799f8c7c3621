use leptos::prelude::*;

/// Offset that centres the follower icon on the pointer.
const FOLLOWER_OFFSET: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const FEATURED_PRODUCTS: [Product; 4] = [
    Product {
        icon: "📘",
        title: "NCERT Textbooks",
        description: "Complete set for all classes and subjects, CBSE compliant.",
        color: "#4facfe",
    },
    Product {
        icon: "🖊️",
        title: "Pilot V5 Pens",
        description: "Smooth, reliable, and premium writing experience.",
        color: "#f093fb",
    },
    Product {
        icon: "📒",
        title: "Classmate Notebooks",
        description: "Durable, stylish, and perfect for students.",
        color: "#667eea",
    },
    Product {
        icon: "🎨",
        title: "Camel Art Supplies",
        description: "Vibrant watercolors, crayons, and sketch pens.",
        color: "#764ba2",
    },
];

impl Product {
    fn icon_background(&self) -> String {
        format!(
            "background: linear-gradient(135deg, {0}, {0}dd);",
            self.color
        )
    }

    /// Border and glow while hovered.
    pub fn hover_style(&self) -> String {
        format!(
            "--card-color: {0}; border-color: {0}; box-shadow: 0 15px 30px {0}40;",
            self.color
        )
    }

    pub fn idle_style(&self) -> String {
        format!("--card-color: {};", self.color)
    }
}

/// Follower icon position relative to the card.
pub fn follower_position(client: (f64, f64), card_origin: (f64, f64)) -> (f64, f64) {
    (
        client.0 - card_origin.0 - FOLLOWER_OFFSET,
        client.1 - card_origin.1 - FOLLOWER_OFFSET,
    )
}

#[component]
fn FeaturedCard(product: Product) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let follower = RwSignal::new((0.0f64, 0.0f64));
    let card_ref = NodeRef::<leptos::html::Article>::new();

    let on_move = move |ev: leptos::ev::MouseEvent| {
        if let Some(card) = card_ref.get_untracked() {
            let rect = card.get_bounding_client_rect();
            follower.set(follower_position(
                (ev.client_x() as f64, ev.client_y() as f64),
                (rect.left(), rect.top()),
            ));
        }
    };

    view! {
        <article
            node_ref=card_ref
            class="card reveal"
            style=move || {
                if hovered.get() { product.hover_style() } else { product.idle_style() }
            }
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
            on:mousemove=on_move
        >
            <div class="card-icon" style=product.icon_background()>{product.icon}</div>
            <div class="card-content">
                <h3>{product.title}</h3>
                <p>{product.description}</p>
            </div>
            <div
                class="follower-icon"
                style=move || {
                    let (x, y) = follower.get();
                    format!(
                        "position: absolute; pointer-events: none; font-size: 2rem; \
                         transition: opacity 0.3s ease; opacity: {}; left: {}px; top: {}px;",
                        if hovered.get() { 1 } else { 0 },
                        x,
                        y
                    )
                }
            >
                {product.icon}
            </div>
        </article>
    }
}

#[component]
pub fn FeaturedProducts() -> impl IntoView {
    view! {
        <div id="featured-cards-container" class="featured-cards">
            {FEATURED_PRODUCTS
                .iter()
                .map(|product| view! { <FeaturedCard product=*product /> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follower_offset() {
        assert_eq!(follower_position((150.0, 90.0), (100.0, 50.0)), (30.0, 20.0));
    }

    #[test]
    fn test_hover_style_uses_accent() {
        let style = FEATURED_PRODUCTS[0].hover_style();
        assert!(style.contains("border-color: #4facfe"));
        assert!(style.contains("0 15px 30px #4facfe40"));
    }
}
