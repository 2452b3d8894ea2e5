//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::catalog::{BookSource, CatalogError};
use crate::core::book::Book;

/// A fully populated book for tests that only care about id and title.
pub fn sample_book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        image_url: String::new(),
        authors: vec!["Test Author".to_string()],
        description: None,
        languages: vec!["eng".to_string()],
        first_published_year: Some("1999".to_string()),
        average_rating: Some(4.2),
        ratings_count: Some(10),
        num_pages: Some(321),
        num_editions: 3,
    }
}

/// A catalog source that always answers with a fixed list.
pub struct StaticSource {
    pub books: Vec<Book>,
}

#[async_trait]
impl BookSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn search_books(&self, _query: &str, limit: u32) -> Result<Vec<Book>, CatalogError> {
        Ok(self.books.iter().take(limit as usize).cloned().collect())
    }
}
