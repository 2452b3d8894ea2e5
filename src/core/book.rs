//! The `Book` value struct: one immutable catalog item.
//!
//! Constructed by the catalog layer, held by reference inside state
//! snapshots, never mutated after construction.

/// A single catalog item.
///
/// `id` uniquely identifies the book within any list it appears in; list
/// rendering and favorite membership are keyed by it. All other fields are
/// display data, optional where the catalog may not supply them.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub languages: Vec<String>,
    pub first_published_year: Option<String>,
    /// Expected range 0.0–5.0 when present.
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u32>,
    pub num_pages: Option<u32>,
    pub num_editions: u32,
}

impl Book {
    /// First listed author, if any.
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    /// Average rating rounded to one decimal place (4.76 → 4.8).
    pub fn rounded_rating(&self) -> Option<f64> {
        self.average_rating.map(|r| (r * 10.0).round() / 10.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::sample_book;

    #[test]
    fn rounds_rating_to_one_decimal() {
        let mut book = sample_book("OL1W", "Rounding");
        book.average_rating = Some(4.76);
        assert_eq!(book.rounded_rating(), Some(4.8));

        book.average_rating = Some(3.04);
        assert_eq!(book.rounded_rating(), Some(3.0));

        book.average_rating = None;
        assert_eq!(book.rounded_rating(), None);
    }

    #[test]
    fn primary_author_is_first_listed() {
        let mut book = sample_book("OL1W", "Authors");
        book.authors = vec!["First Author".to_string(), "Second Author".to_string()];
        assert_eq!(book.primary_author(), Some("First Author"));

        book.authors.clear();
        assert_eq!(book.primary_author(), None);
    }
}
