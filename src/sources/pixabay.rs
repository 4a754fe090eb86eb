//! Pixabay image search client.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use super::{FetchError, ImageSource};
use crate::config::Settings;
use crate::state::ImageItem;
use crate::util::{percent_encode, s, u32_or_zero, u64_of};

/// What: `ImageSource` backed by the Pixabay REST API.
///
/// Details:
/// - The credential and query filters come from [`Settings`]; nothing is baked in.
/// - Holds one pooled `reqwest::Client` for all requests.
#[derive(Clone)]
pub struct PixabaySource {
    /// Pooled HTTP client with the configured timeout.
    client: reqwest::Client,
    /// Endpoint, credential and filters.
    settings: Settings,
}

impl PixabaySource {
    /// What: Build a client from `settings`.
    ///
    /// Inputs:
    /// - `settings`: Endpoint, API key, page size, filters and timeout.
    ///
    /// Output:
    /// - `Ok(PixabaySource)` ready to issue requests.
    ///
    /// # Errors
    /// - `FetchError::MissingCredential` when `settings.api_key` is blank
    /// - `FetchError::Transport` when the HTTP client cannot be built
    pub fn new(settings: Settings) -> Result<Self, FetchError> {
        if settings.api_key.trim().is_empty() {
            return Err(FetchError::MissingCredential);
        }
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.request_timeout_secs.min(10)))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(format!("Pixsea/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, settings })
    }

    /// What: Build the request URL for `query` at `page`.
    ///
    /// Inputs:
    /// - `query`: Raw search term (trimmed and percent-encoded here).
    /// - `page`: 1-indexed page.
    ///
    /// Output:
    /// - Full URL including key, filters and page size.
    #[must_use]
    pub fn page_url(&self, query: &str, page: u32) -> String {
        let base = &self.settings.endpoint;
        let sep = if base.contains('?') { '&' } else { '?' };
        format!(
            "{base}{sep}key={key}&q={q}&page={page}&per_page={per_page}&image_type={image_type}&orientation={orientation}&safesearch={safe}",
            key = percent_encode(self.settings.api_key.trim()),
            q = percent_encode(query.trim()),
            per_page = self.settings.per_page,
            image_type = percent_encode(&self.settings.image_type),
            orientation = percent_encode(&self.settings.orientation),
            safe = self.settings.safe_search,
        )
    }
}

impl ImageSource for PixabaySource {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<Vec<ImageItem>, FetchError> {
        let url = self.page_url(query, page);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            page,
            "fetched search page"
        );
        if !status.is_success() {
            let preview: String = body.chars().take(200).collect();
            warn!(
                status = status.as_u16(),
                preview = preview,
                "search service returned non-success status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let v: Value =
            serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;
        parse_hits(&v)
    }
}

/// What: Convert a search response body into items.
///
/// Inputs:
/// - `v`: Parsed JSON response.
///
/// Output:
/// - Items in response order; entries without an `id` are skipped.
///
/// # Errors
/// - `FetchError::Malformed` when the `hits` array is missing.
pub(crate) fn parse_hits(v: &Value) -> Result<Vec<ImageItem>, FetchError> {
    let hits = v
        .get("hits")
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::Malformed("missing `hits` array".to_string()))?;
    let items = hits
        .iter()
        .filter_map(|hit| {
            let id = u64_of(hit, &["id"])?;
            Some(ImageItem {
                id,
                page_url: s(hit, "pageURL"),
                preview_url: s(hit, "previewURL"),
                web_format_url: s(hit, "webformatURL"),
                large_image_url: s(hit, "largeImageURL"),
                width: u32_or_zero(hit, "imageWidth"),
                height: u32_or_zero(hit, "imageHeight"),
                tags: s(hit, "tags"),
                user: s(hit, "user"),
            })
        })
        .collect();
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Settings with a test key.
    fn keyed() -> Settings {
        Settings {
            api_key: "k3y".to_string(),
            ..Settings::default()
        }
    }

    #[test]
    /// What: Construction refuses a blank API key.
    ///
    /// Inputs:
    /// - Default settings (empty key) and whitespace-only key.
    ///
    /// Output:
    /// - `FetchError::MissingCredential` both times.
    fn pixabay_requires_credential() {
        assert!(matches!(
            PixabaySource::new(Settings::default()),
            Err(FetchError::MissingCredential)
        ));
        let blank = Settings {
            api_key: "  ".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            PixabaySource::new(blank),
            Err(FetchError::MissingCredential)
        ));
    }

    #[test]
    /// What: The page URL carries the query, page and configured filters.
    ///
    /// Inputs:
    /// - Query " red cats " at page 3 with default filters.
    ///
    /// Output:
    /// - URL with encoded query, page, per_page=12, photo/horizontal filters.
    fn pixabay_page_url() {
        let src = PixabaySource::new(keyed()).expect("client");
        assert_eq!(
            src.page_url(" red cats ", 3),
            "https://pixabay.com/api/?key=k3y&q=red%20cats&page=3&per_page=12&image_type=photo&orientation=horizontal&safesearch=false"
        );
    }

    #[test]
    /// What: Endpoints that already carry a query string get `&` appended.
    ///
    /// Inputs:
    /// - Endpoint `https://example.test/api/?lang=de`.
    ///
    /// Output:
    /// - URL continues with `&key=`.
    fn pixabay_page_url_existing_query() {
        let settings = Settings {
            endpoint: "https://example.test/api/?lang=de".to_string(),
            ..keyed()
        };
        let src = PixabaySource::new(settings).expect("client");
        assert!(src.page_url("x", 1).starts_with("https://example.test/api/?lang=de&key=k3y&q=x"));
    }

    #[test]
    /// What: Hits are mapped in order, skipping entries without an id.
    ///
    /// Inputs:
    /// - Response with two valid hits and one missing `id`.
    ///
    /// Output:
    /// - Two items with fields copied from the response.
    fn pixabay_parse_hits() {
        let v = serde_json::json!({
            "total": 3,
            "totalHits": 3,
            "hits": [
                {
                    "id": 195_893,
                    "pageURL": "https://pixabay.com/en/blossom-195893/",
                    "previewURL": "https://cdn.pixabay.com/preview.jpg",
                    "webformatURL": "https://pixabay.com/get/web.jpg",
                    "largeImageURL": "https://pixabay.com/get/large.jpg",
                    "imageWidth": 4000,
                    "imageHeight": 2250,
                    "tags": "blossom, bloom, flower",
                    "user": "Josch13"
                },
                { "tags": "no id" },
                { "id": "42", "imageWidth": 10 }
            ]
        });
        let items = parse_hits(&v).expect("valid response");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 195_893);
        assert_eq!(items[0].width, 4000);
        assert_eq!(items[0].height, 2250);
        assert_eq!(items[0].large_image_url, "https://pixabay.com/get/large.jpg");
        assert_eq!(items[0].user, "Josch13");
        assert_eq!(items[1].id, 42);
        assert_eq!(items[1].height, 0);
        assert!(items[1].tags.is_empty());
    }

    #[test]
    /// What: A body without `hits` is malformed; an empty array is not.
    ///
    /// Inputs:
    /// - Error-shaped body and an empty result body.
    ///
    /// Output:
    /// - `Malformed` for the first, empty list for the second.
    fn pixabay_parse_hits_shapes() {
        let err = parse_hits(&serde_json::json!({"error": "bad key"}));
        assert!(matches!(err, Err(FetchError::Malformed(_))));
        let empty = parse_hits(&serde_json::json!({"total": 0, "hits": []})).expect("empty ok");
        assert!(empty.is_empty());
    }

    #[tokio::test]
    /// What: Transport failures never expose the API key.
    ///
    /// Inputs:
    /// - Endpoint on a closed local port, key "SUPERSECRETKEY", driven through a gallery.
    ///
    /// Output:
    /// - `Transport` error and a `Failed` reason, neither containing the key.
    async fn pixabay_transport_error_hides_key() {
        use crate::app::Gallery;
        use crate::state::LoadStatus;

        let settings = Settings {
            api_key: "SUPERSECRETKEY".to_string(),
            endpoint: "http://127.0.0.1:1/api/".to_string(),
            request_timeout_secs: 2,
            ..Settings::default()
        };
        let src = PixabaySource::new(settings).expect("client");
        let err = src.fetch_page("cats", 1).await.expect_err("closed port");
        assert!(matches!(err, FetchError::Transport(_)));
        assert!(!err.to_string().contains("SUPERSECRETKEY"));

        let mut g = Gallery::new(src);
        g.set_search_term("cats");
        assert_eq!(g.next_update().await, Some(true));
        match g.view().status {
            LoadStatus::Failed(reason) => assert!(!reason.contains("SUPERSECRETKEY")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
