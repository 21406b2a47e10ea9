//! Client for the external content store that owns the projects entity group.
//!
//! The store is an opaque CRUD API; this client adds the API key header and
//! maps response statuses, nothing more. Retry policy, if any, belongs to the
//! store's own infrastructure.

use constants::CONTENT_API_KEY_HEADER;

pub mod categories;
pub(crate) mod constants;
pub mod error;
pub mod header;
pub mod projects;
pub mod technologies;

#[derive(Clone, Debug)]
pub struct ContentStoreClient {
    url: String,
    client: reqwest::Client,
}

impl ContentStoreClient {
    pub fn new(api_key: String, url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(CONTENT_API_KEY_HEADER, api_key.parse().unwrap());

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        Self { url, client }
    }
}
