//! API client for the remote product listing
//!
//! The listing endpoint returns up to `limit` records in one call; the
//! catalog treats that as the complete product set.

use contracts::domain::a001_product::ProductsResponse;
use contracts::shared::catalog::FetchError;
use gloo_net::http::Request;
use web_sys::AbortSignal;

/// Fetch the product listing.
///
/// An aborted request (superseded or unmounted) resolves to
/// [`FetchError::Cancelled`], which callers drop silently.
pub async fn fetch_products(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<ProductsResponse, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await
        .map_err(map_error)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response.json::<ProductsResponse>().await.map_err(map_error)
}

fn map_error(err: gloo_net::Error) -> FetchError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => FetchError::Cancelled,
        gloo_net::Error::JsError(js) => FetchError::Network(js.message),
        gloo_net::Error::SerdeError(err) => FetchError::Parse(err.to_string()),
        gloo_net::Error::GlooError(message) => FetchError::Network(message),
    }
}
