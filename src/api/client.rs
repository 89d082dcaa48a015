use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::timeout;

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::model::{Fighter, Universe, UniverseFilter};

/// Boxed future returned by [`CatalogApi`] calls.
pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'static>>;

/// Source of universes and fighters.
///
/// Returned futures own everything they need, so callers may drop the API
/// handle while a request is still running.
pub trait CatalogApi: Send + Sync + 'static {
    fn fetch_universes(&self) -> ApiFuture<Vec<Universe>>;

    /// Fighters for `filter`. Filtering happens on the server.
    fn fetch_fighters(&self, filter: &UniverseFilter) -> ApiFuture<Vec<Fighter>>;
}

/// [`CatalogApi`] over HTTP.
///
/// - `GET {base}/universes`
/// - `GET {base}/fighters[?universe=<name>]`
pub struct HttpCatalogApi {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl HttpCatalogApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: config.base_url.clone(),
                message: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url,
            request_timeout: config.request_timeout(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL for `GET /universes`.
    pub fn universes_url(&self) -> Url {
        self.endpoint("universes")
    }

    /// URL for `GET /fighters`, with the universe filter as a query parameter.
    pub fn fighters_url(&self, filter: &UniverseFilter) -> Url {
        let mut url = self.endpoint("fighters");
        if let Some(universe) = filter.as_query() {
            url.query_pairs_mut().append_pair("universe", universe);
        }
        url
    }

    fn endpoint(&self, segment: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }

    fn get_json<T>(&self, url: Url) -> ApiFuture<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.client.clone();
        let request_timeout = self.request_timeout;
        Box::pin(async move {
            let display_url = url.to_string();
            match timeout(request_timeout, send_get(client, url)).await {
                Ok(result) => result,
                Err(_) => Err(ApiError::Timeout {
                    url: display_url,
                    seconds: request_timeout.as_secs(),
                }),
            }
        })
    }
}

async fn send_get<T: DeserializeOwned>(client: Client, url: Url) -> Result<T, ApiError> {
    let display_url = url.to_string();
    tracing::debug!(url = %display_url, "GET");

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Connection {
            url: display_url.clone(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url: display_url,
            status: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: display_url,
        source: e,
    })
}

impl CatalogApi for HttpCatalogApi {
    fn fetch_universes(&self) -> ApiFuture<Vec<Universe>> {
        self.get_json(self.universes_url())
    }

    fn fetch_fighters(&self, filter: &UniverseFilter) -> ApiFuture<Vec<Fighter>> {
        self.get_json(self.fighters_url(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> HttpCatalogApi {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        HttpCatalogApi::new(&config).unwrap()
    }

    #[test]
    fn endpoints_append_to_base_path() {
        let api = api("https://example.com/api");
        assert_eq!(api.base_url().as_str(), "https://example.com/api");
        assert_eq!(api.universes_url().as_str(), "https://example.com/api/universes");
        assert_eq!(
            api.fighters_url(&UniverseFilter::All).as_str(),
            "https://example.com/api/fighters"
        );
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let api = api("https://example.com/api/");
        assert_eq!(api.universes_url().as_str(), "https://example.com/api/universes");
    }

    #[test]
    fn named_filter_is_query_encoded() {
        let api = api("http://127.0.0.1:3000");
        assert_eq!(
            api.fighters_url(&UniverseFilter::named("Street Fighter")).as_str(),
            "http://127.0.0.1:3000/fighters?universe=Street+Fighter"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            HttpCatalogApi::new(&config),
            Err(ApiError::InvalidUrl { .. })
        ));
    }
}
