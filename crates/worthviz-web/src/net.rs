//! Fetching the dataset over HTTP.

use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch a text resource relative to the page.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {url}: {:?}", e))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow!("fetch {url}: not a Response: {:?}", e))?;
    if !response.ok() {
        return Err(anyhow!("fetch {url}: HTTP {}", response.status()));
    }
    let body = response.text().map_err(|e| anyhow!("{:?}", e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("read body of {url}: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow!("body of {url} was not text"))
}
