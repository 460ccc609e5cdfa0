//! WASM HTTP client for the inventory collection.
//!
//! One CORS `GET` against the Firestore REST list endpoint; decoding is left
//! to `shelf_common::firestore`.

use shelf_common::error::CatalogError;
use shelf_common::firestore::{parse_list_response, Document};

/// Fetch every document of the collection at `url`.
pub async fn fetch_documents(url: &str) -> Result<Vec<Document>, CatalogError> {
    let (status, body) = get_text(url).await?;
    parse_list_response(status, &body)
}

#[cfg(target_family = "wasm")]
async fn get_text(url: &str) -> Result<(u16, String), CatalogError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let network = |what: &str, e: wasm_bindgen::JsValue| {
        CatalogError::Network(format!("{what}: {}", js_message(&e)))
    };

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::Cors);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| network("Failed to create request", e))?;

    let window =
        web_sys::window().ok_or_else(|| CatalogError::Network("No window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| CatalogError::Network(js_message(&e)))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| CatalogError::Network("Response is not a Response object".to_string()))?;

    let text = JsFuture::from(resp.text().map_err(|e| network("Failed to get text", e))?)
        .await
        .map_err(|e| network("Failed to read body", e))?;

    let body = text
        .as_string()
        .ok_or_else(|| CatalogError::Network("Response body is not a string".to_string()))?;

    Ok((resp.status(), body))
}

/// Best-effort readable text for a thrown JS value.
#[cfg(target_family = "wasm")]
fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn get_text(_url: &str) -> Result<(u16, String), CatalogError> {
    Err(CatalogError::Network(
        "Inventory client only available in WASM".to_string(),
    ))
}
