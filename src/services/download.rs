use crate::config::Config;
use crate::models::error::AppError;
use chrono::{DateTime, Utc};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, Url};

/// `invoices_<team>_<YYYY-MM-DDTHH-MM-SS>.xlsx`, with the timestamp in UTC.
pub fn export_file_name(team_name: &str, now: DateTime<Utc>) -> String {
    format!(
        "invoices_{}_{}.xlsx",
        sanitize_file_component(team_name),
        now.format("%Y-%m-%dT%H-%M-%S")
    )
}

fn sanitize_file_component(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Wraps spreadsheet bytes in a Blob and clicks a temporary anchor to save it.
///
/// The object URL is revoked on every path once it exists.
pub fn trigger_download(bytes: &[u8], file_name: &str) -> Result<(), AppError> {
    let blob = spreadsheet_blob(bytes)?;

    let window = web_sys::window().ok_or_else(|| dom_error("No window object"))?;
    let document = window
        .document()
        .ok_or_else(|| dom_error("No document object"))?;
    let body = document.body().ok_or_else(|| dom_error("No body element"))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| dom_error(&format!("Failed to create object URL: {e:?}")))?;

    let clicked = click_anchor(&document, &body, &url, file_name);
    let revoked =
        Url::revoke_object_url(&url).map_err(|e| dom_error(&format!("Failed to revoke URL: {e:?}")));

    clicked.and(revoked)
}

fn click_anchor(
    document: &Document,
    body: &HtmlElement,
    url: &str,
    file_name: &str,
) -> Result<(), AppError> {
    let anchor = document
        .create_element("a")
        .map_err(|e| dom_error(&format!("Failed to create anchor: {e:?}")))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| dom_error(&format!("Failed to cast to anchor: {e:?}")))?;

    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| dom_error(&format!("Failed to set style: {e:?}")))?;

    body.append_child(&anchor)
        .map_err(|e| dom_error(&format!("Failed to append anchor: {e:?}")))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| dom_error(&format!("Failed to remove anchor: {e:?}")))?;

    Ok(())
}

fn spreadsheet_blob(bytes: &[u8]) -> Result<Blob, AppError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).into());

    let properties = BlobPropertyBag::new();
    properties.set_type(Config::XLSX_MIME_TYPE);

    Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| dom_error(&format!("Failed to create blob: {e:?}")))
}

fn dom_error(msg: &str) -> AppError {
    AppError::BrowserError(format!("Download failed: {msg}"))
}
