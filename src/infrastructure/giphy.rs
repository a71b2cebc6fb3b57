//! # Giphy Adapter
//!
//! Thin client for the Giphy search API, used by the unknown-command
//! responder. Failures here never propagate past the handler.

use serde::Deserialize;

const SEARCH_URL: &str = "https://api.giphy.com/v1/gifs/search";

/// One search hit, reduced to what the responder needs.
#[derive(Debug, Clone)]
pub struct Gif {
    pub title: String,
    pub image_url: String,
}

pub struct GiphyClient {
    http: reqwest::Client,
    api_key: String,
}

impl GiphyClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Returns the first hit for `query`, or `None` when Giphy has nothing.
    pub async fn search(&self, query: &str) -> Result<Option<Gif>, String> {
        let response = self
            .http
            .get(SEARCH_URL)
            .query(&[
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json::<SearchResponse>()
            .await
            .map_err(|e| e.to_string())?;

        Ok(response.data.into_iter().next().map(|hit| Gif {
            title: hit.title,
            image_url: hit.images.fixed_height.url,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: String,
    images: ImageSet,
}

#[derive(Debug, Deserialize)]
struct ImageSet {
    fixed_height: Image,
}

#[derive(Debug, Deserialize)]
struct Image {
    url: String,
}
