//! Open Library search client.
//!
//! Talks to the `search.json` endpoint and maps its work documents into
//! [`Book`] values. The response is heavily sparse; almost every field can
//! be absent, so the DTOs default everything and the mapping decides what
//! is mandatory (a work key and a title) versus merely nice to have.

use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;

use crate::catalog::source::{BookSource, CatalogError};
use crate::core::book::Book;
use crate::core::config::{DEFAULT_COVERS_BASE_URL, DEFAULT_OPENLIBRARY_BASE_URL};

/// Projection requested from the search endpoint; trims the payload to the
/// fields the mapping actually reads.
const SEARCH_FIELDS: &str = "key,title,cover_edition_key,cover_i,author_name,language,\
first_publish_year,ratings_average,ratings_count,number_of_pages_median,edition_count";

// ============================================================================
// Open Library Response Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct SearchResponseDto {
    #[serde(default)]
    docs: Vec<SearchedBookDto>,
}

#[derive(Deserialize, Debug)]
struct SearchedBookDto {
    /// Work key, e.g. "/works/OL45883W".
    key: String,
    title: Option<String>,
    #[serde(rename = "cover_edition_key")]
    cover_key: Option<String>,
    #[serde(rename = "cover_i")]
    cover_alternative_key: Option<i64>,
    #[serde(rename = "author_name", default)]
    authors: Vec<String>,
    #[serde(rename = "language", default)]
    languages: Vec<String>,
    #[serde(rename = "first_publish_year")]
    first_publish_year: Option<i64>,
    #[serde(rename = "ratings_average")]
    ratings_average: Option<f64>,
    #[serde(rename = "ratings_count")]
    ratings_count: Option<u32>,
    #[serde(rename = "number_of_pages_median")]
    num_pages_median: Option<u32>,
    #[serde(rename = "edition_count", default)]
    num_editions: u32,
}

// ============================================================================
// Client
// ============================================================================

pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
    covers_base_url: String,
}

impl OpenLibraryClient {
    /// `base_url` / `covers_base_url` default to the public Open Library
    /// hosts; tests inject a mock server instead.
    pub fn new(base_url: Option<String>, covers_base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_OPENLIBRARY_BASE_URL.to_string()),
            covers_base_url: covers_base_url.unwrap_or_else(|| DEFAULT_COVERS_BASE_URL.to_string()),
        }
    }

    /// Preferred cover URL: the cover edition key, falling back to the
    /// numeric cover id, falling back to no cover at all.
    fn cover_url(&self, doc: &SearchedBookDto) -> String {
        if let Some(key) = &doc.cover_key {
            format!("{}/b/olid/{key}-L.jpg", self.covers_base_url)
        } else if let Some(id) = doc.cover_alternative_key {
            format!("{}/b/id/{id}-L.jpg", self.covers_base_url)
        } else {
            String::new()
        }
    }

    /// Maps one work document to a [`Book`]. Documents without a title are
    /// not worth listing and are dropped.
    fn map_doc(&self, doc: SearchedBookDto) -> Option<Book> {
        let title = doc.title.clone()?;
        let id = doc
            .key
            .strip_prefix("/works/")
            .unwrap_or(&doc.key)
            .to_string();

        Some(Book {
            id,
            title,
            image_url: self.cover_url(&doc),
            authors: doc.authors,
            description: None,
            languages: doc.languages,
            first_published_year: doc.first_publish_year.map(|y| y.to_string()),
            average_rating: doc.ratings_average,
            ratings_count: doc.ratings_count,
            num_pages: doc.num_pages_median,
            num_editions: doc.num_editions,
        })
    }
}

#[async_trait]
impl BookSource for OpenLibraryClient {
    fn name(&self) -> &str {
        "openlibrary"
    }

    async fn search_books(&self, query: &str, limit: u32) -> Result<Vec<Book>, CatalogError> {
        let url = format!("{}/search.json", self.base_url);
        debug!("Searching Open Library: query={query:?} limit={limit}");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("limit", &limit.to_string()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponseDto = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        let books: Vec<Book> = body
            .docs
            .into_iter()
            .filter_map(|doc| self.map_doc(doc))
            .collect();
        info!("Open Library returned {} books for {query:?}", books.len());
        Ok(books)
    }
}
