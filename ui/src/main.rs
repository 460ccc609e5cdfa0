mod components;

use components::app::App;

fn main() {
    #[cfg(target_family = "wasm")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    #[cfg(not(target_family = "wasm"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "shelf_ui=debug,shelf_common=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting shelf UI");
    dioxus::launch(App);
}
