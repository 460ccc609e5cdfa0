use dioxus::prelude::*;

use shelf_common::config::CatalogConfig;

use super::cart_list::CartList;
use super::inventory_list::InventoryList;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Inventory {},
    #[route("/cart")]
    Cart {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(CatalogConfig::from_env);

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "shelf-app",
            header { class: "app-header",
                h1 { "Inventory" }
                nav {
                    button {
                        onclick: move |_| { nav.push(Route::Inventory {}); },
                        "Shop"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Cart {}); },
                        "Cart"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: the paginated catalog.
#[component]
fn Inventory() -> Element {
    rsx! { InventoryList {} }
}

/// Route component: the session cart.
#[component]
fn Cart() -> Element {
    rsx! { CartList {} }
}
