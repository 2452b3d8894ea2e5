//! The localization-resource collaborator.
//!
//! `StringTable` owns every message template the UI can show. Logic code
//! refers to messages only by `MessageId`; the table is consulted at render
//! time through the `StringLookup` seam, so wording (and one day, locale)
//! stays a presentation concern.

use crate::core::text::{MessageId, StringLookup};

/// English message table.
pub struct StringTable;

impl StringLookup for StringTable {
    fn template(&self, id: MessageId) -> &str {
        match id {
            MessageId::TabSearchResults => "Search Results",
            MessageId::TabFavorites => "Favorites",
            MessageId::HintSearch => "Search books",
            MessageId::EmptySearchResults => "No search results. Try a different query.",
            MessageId::EmptyFavorites => "No favorite books yet. Press f on a result to add one.",
            MessageId::ErrorNetwork => "Could not reach the catalog. Check your connection.",
            MessageId::ErrorApi => "The catalog returned an error (HTTP {0}).",
            MessageId::ErrorMalformedResponse => "The catalog sent a response that could not be read.",
            MessageId::CoverInvalidSize => "Cover image has invalid dimensions",
            MessageId::CoverLoadFailed => "Cover image failed to load",
        }
    }
}
