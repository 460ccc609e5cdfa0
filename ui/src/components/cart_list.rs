use dioxus::prelude::*;

use shelf_common::view::{CartView, EMPTY_CART_MESSAGE};

use super::session_store::session_cart;

#[component]
pub fn CartList() -> Element {
    // Read once when the page mounts.
    let view = use_hook(|| match session_cart().load() {
        Ok(cart) => CartView::of(&cart),
        Err(e) => {
            tracing::error!("Failed to read cart: {e}");
            CartView::Empty
        }
    });

    let content = match view {
        CartView::Empty => rsx! { p { "{EMPTY_CART_MESSAGE}" } },
        CartView::Lines { lines, grand_total_label } => rsx! {
            {lines.into_iter().map(|line| rsx! {
                div { class: "cart-item", key: "{line.id}",
                    h3 { "{line.title}" }
                    p { "{line.price_label}" }
                    p { "{line.quantity_label}" }
                    p { "{line.total_label}" }
                }
            })}
            div { class: "cart-total",
                h2 { "{grand_total_label}" }
            }
        },
    };

    rsx! {
        div { id: "cartList", {content} }
    }
}
