use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE};
use url::Url;

use crate::error::FetchError;
use crate::models::ScrapeRequest;

/// Validate the target URL before any network activity.
pub fn parse_url(request: &ScrapeRequest) -> Result<Url, FetchError> {
    Url::parse(&request.url).map_err(|source| FetchError::InvalidUrl {
        url: request.url.clone(),
        source,
    })
}

/// Assemble the outbound header map.
///
/// Each `"Key: Value"` line splits on the first `:` with both sides trimmed,
/// so values may themselves contain `:`. A line with no `:` is rejected
/// instead of letting an undefined key reach the request. Cookies are joined
/// and inserted last, so they always win over an explicit `Cookie:` header.
pub fn build_headers(request: &ScrapeRequest) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();

    for line in &request.headers {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| FetchError::MalformedHeader(line.clone()))?;

        let name = HeaderName::from_bytes(key.trim().as_bytes())
            .map_err(|_| FetchError::InvalidHeader(line.clone()))?;
        let value = HeaderValue::from_str(value.trim())
            .map_err(|_| FetchError::InvalidHeader(line.clone()))?;

        // insert, not append: last writer wins on duplicate keys
        headers.insert(name, value);
    }

    if !request.cookies.is_empty() {
        let cookie = request.cookies.join("; ");
        let value =
            HeaderValue::from_str(&cookie).map_err(|_| FetchError::InvalidHeader(cookie))?;
        headers.insert(COOKIE, value);
    }

    Ok(headers)
}
