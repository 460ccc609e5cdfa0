use dioxus::prelude::*;

use shelf_common::config::CatalogConfig;
use shelf_common::inventory::decode_documents;
use shelf_common::pagination::PageWindow;
use shelf_common::view::{
    CatalogBlock, CatalogView, ItemCard, ADD_TO_CART_LABEL, LIMITED_STOCK_HEADING,
    NO_ITEMS_MESSAGE, OUT_OF_STOCK_LABEL,
};

use super::app::Route;
use super::inventory_client::fetch_documents;
use super::session_store::add_to_cart;

#[component]
pub fn InventoryList() -> Element {
    let config = use_context::<CatalogConfig>();
    let admin = config.admin_mode;
    let mut window = use_signal(|| PageWindow::new(config.items_per_page));

    // Fetched once per page load; paging re-renders from memory.
    let url = config.documents_url();
    let inventory = use_resource(move || {
        let url = url.clone();
        async move {
            tracing::info!("Fetching inventory from {url}");
            let result = fetch_documents(&url).await.map(|docs| decode_documents(&docs));
            match &result {
                Ok(items) => tracing::info!(count = items.len(), "Inventory loaded"),
                Err(e) => tracing::error!("Error fetching inventory: {e}"),
            }
            result
        }
    });

    let (total, view) = {
        let guard = inventory.read();
        let fetched = (*guard).as_ref();
        let total = fetched.and_then(|r| r.as_ref().ok()).map_or(0, Vec::len);
        (total, CatalogView::from_fetch(fetched, window(), admin))
    };

    let (show_previous, show_next) = match &view {
        CatalogView::Page(page) => (page.show_previous, page.show_next),
        _ => (false, false),
    };

    let visible = |shown: bool| if shown { "display: inline-block;" } else { "display: none;" };
    let previous_style = visible(show_previous);
    let next_style = visible(show_next);

    let list = match view {
        CatalogView::Loading => rsx! { p { class: "loading", "Loading..." } },
        CatalogView::Failed(message) => rsx! { p { class: "fetch-error", "{message}" } },
        CatalogView::Empty => rsx! { p { class: "empty-state", "{NO_ITEMS_MESSAGE}" } },
        CatalogView::Page(page) => rsx! {
            {page.blocks.into_iter().map(|block| match block {
                CatalogBlock::LimitedHeading => rsx! {
                    h2 { class: "limited-stock", style: "color: red;", "{LIMITED_STOCK_HEADING}" }
                },
                CatalogBlock::Divider => rsx! { hr {} },
                CatalogBlock::Card(card) => {
                    let key = card.id.clone();
                    rsx! { ItemCardView { key: "{key}", card } }
                }
            })}
        },
    };

    rsx! {
        div { class: "catalog",
            div { id: "inventoryList", {list} }
            div { class: "pagination",
                button {
                    id: "prevPageBtn",
                    style: previous_style,
                    onclick: move |_| {
                        if window.write().previous() {
                            tracing::debug!(page = window.peek().current_page(), "Previous page");
                        }
                    },
                    "Previous"
                }
                button {
                    id: "nextPageBtn",
                    style: next_style,
                    onclick: move |_| {
                        if window.write().next(total) {
                            tracing::debug!(page = window.peek().current_page(), "Next page");
                        }
                    },
                    "Next"
                }
            }
        }
    }
}

#[component]
fn ItemCardView(card: ItemCard) -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "item",
            img { src: "{card.image_url}", alt: "{card.title}" }
            h3 { "{card.title}" }
            p { "{card.description}" }
            p { "{card.price_label}" }
            if let Some(entry) = card.cart_entry.clone() {
                button {
                    class: "add-to-cart",
                    onclick: move |_| {
                        add_to_cart(entry.clone());
                        nav.push(Route::Cart {});
                    },
                    "{ADD_TO_CART_LABEL}"
                }
            } else {
                p { class: "out-of-stock", "{OUT_OF_STOCK_LABEL}" }
            }
        }
    }
}
