//! Catalog data layer: the seam between the presentation core and the
//! book-catalog backend.
//!
//! The core only ever sees [`BookSource`], an async trait that turns a
//! query into a completed `Vec<Book>` or a typed [`CatalogError`]. How the
//! fetch is scheduled is the run loop's business; this module is only the
//! client side of the wire.

pub mod covers;
pub mod openlibrary;
pub mod source;

pub use covers::{CoverArt, CoverError};
pub use openlibrary::OpenLibraryClient;
pub use source::{BookSource, CatalogError};
