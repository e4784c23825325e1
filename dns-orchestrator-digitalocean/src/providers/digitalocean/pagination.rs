//! Page-by-page list reader.
//!
//! List endpoints take a 1-based `page` query parameter. A response carries
//! `links.pages.last` while further pages exist; on the final page (or when
//! there is a single page) the marker is absent.
//! <https://docs.digitalocean.com/reference/api/api-reference/#section/Introduction/Links-and-Pagination>

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::traits::{ApiRequest, HttpTransport};

use super::PROVIDER_NAME;

/// Whether a list response says more pages follow.
///
/// A missing, null or non-object `links` section counts as "no more pages".
pub(crate) fn has_more_pages(body: &Value) -> bool {
    body.get("links")
        .and_then(|links| links.get("pages"))
        .and_then(|pages| pages.get("last"))
        .is_some_and(|last| !last.is_null())
}

/// Fetches every page of `path` and concatenates the arrays found under `key`.
///
/// Stops on the first page without a "last page" marker, or on a page that
/// yields no items, so a marker that never disappears cannot loop forever.
pub(crate) async fn list_all<T>(
    transport: &dyn HttpTransport,
    path: &str,
    key: &str,
) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let body = transport.send(ApiRequest::get_page(path, page)).await?;

        let page_items: Vec<T> = match body.get(key) {
            Some(raw) => serde_json::from_value(raw.clone()).map_err(|e| {
                ProviderError::ParseError {
                    provider: PROVIDER_NAME.to_string(),
                    detail: format!("{path} page {page}: {e}"),
                }
            })?,
            None => {
                return Err(ProviderError::ParseError {
                    provider: PROVIDER_NAME.to_string(),
                    detail: format!("{path} page {page}: missing '{key}'"),
                });
            }
        };

        let fetched = page_items.len();
        items.extend(page_items);

        if !has_more_pages(&body) {
            break;
        }
        if fetched == 0 {
            log::warn!("[{PROVIDER_NAME}] {path} page {page} is empty but claims more pages");
            break;
        }
        page += 1;
    }

    log::debug!(
        "[{PROVIDER_NAME}] {path}: {} items over {page} page(s)",
        items.len()
    );
    Ok(items)
}
