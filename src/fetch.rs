use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::info;

use crate::error::FetchError;
use crate::models::ScrapeRequest;
use crate::request::{build_headers, parse_url};

/// Upper bound on the whole request, connect through body. The original tool
/// had no timeout at all; this constant is the single place to change it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

pub fn create_client() -> Result<Client, FetchError> {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .map_err(FetchError::Client)
}

/// Issue the single GET and return the body text. Non-2xx statuses are
/// errors; nothing is retried.
pub async fn fetch_page(client: &Client, request: &ScrapeRequest) -> Result<String, FetchError> {
    let url = parse_url(request)?;
    let headers = build_headers(request)?;

    info!("Fetching {}", url);

    let response = client
        .get(url)
        .headers(headers)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: request.url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: request.url.clone(),
            status,
        });
    }

    response.text().await.map_err(|source| FetchError::Request {
        url: request.url.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request_for(url: String) -> ScrapeRequest {
        ScrapeRequest {
            url,
            headers: Vec::new(),
            cookies: Vec::new(),
        }
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let client = create_client().unwrap();
        let request = request_for(format!("{}/products", server.uri()));

        let body = fetch_page(&client, &request).await.unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn sends_custom_headers_and_cookies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .and(header("x-test", "abc"))
            .and(header("cookie", "a=1; b=2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client().unwrap();
        let request = ScrapeRequest {
            url: format!("{}/products", server.uri()),
            headers: vec!["X-Test: abc".to_string()],
            cookies: vec!["a=1".to_string(), "b=2".to_string()],
        };

        fetch_page(&client, &request).await.unwrap();
    }

    #[tokio::test]
    async fn non_2xx_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = create_client().unwrap();
        let request = request_for(format!("{}/missing", server.uri()));

        let err = fetch_page(&client, &request).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn connection_failure_is_an_error() {
        // Port 1 is essentially never listening.
        let client = create_client().unwrap();
        let request = request_for("http://127.0.0.1:1/".to_string());

        let err = fetch_page(&client, &request).await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }
}
