//! Deferred-resolution UI text.
//!
//! Logic code constructs messages without knowing how they will be worded
//! on screen: either a literal string or a message id plus positional
//! arguments. Resolution happens only at the render boundary, through
//! whatever [`StringLookup`] the UI layer injects.

/// Identifier for a localizable message template.
///
/// Templates may contain positional slots (`{0}`, `{1}`, …) filled from
/// `UiText::Resource` args at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    TabSearchResults,
    TabFavorites,
    HintSearch,
    EmptySearchResults,
    EmptyFavorites,
    ErrorNetwork,
    /// `{0}` = HTTP status code.
    ErrorApi,
    ErrorMalformedResponse,
    CoverInvalidSize,
    CoverLoadFailed,
}

/// Resolves a [`MessageId`] to its template text.
///
/// Implemented by the UI layer's string table; core code never resolves.
pub trait StringLookup {
    fn template(&self, id: MessageId) -> &str;
}

/// A piece of text that crosses from logic to presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum UiText {
    /// A literal string, rendered verbatim.
    Dynamic(String),
    /// A message template reference with positional format arguments.
    Resource { id: MessageId, args: Vec<String> },
}

impl UiText {
    pub fn dynamic(value: impl Into<String>) -> Self {
        UiText::Dynamic(value.into())
    }

    pub fn resource(id: MessageId) -> Self {
        UiText::Resource {
            id,
            args: Vec::new(),
        }
    }

    pub fn resource_with(id: MessageId, args: Vec<String>) -> Self {
        UiText::Resource { id, args }
    }

    /// Produces the display string. `Dynamic` ignores the lookup entirely;
    /// `Resource` substitutes args into the template's `{n}` slots.
    pub fn resolve(&self, strings: &dyn StringLookup) -> String {
        match self {
            UiText::Dynamic(value) => value.clone(),
            UiText::Resource { id, args } => {
                let mut text = strings.template(*id).to_string();
                for (i, arg) in args.iter().enumerate() {
                    text = text.replace(&format!("{{{i}}}"), arg);
                }
                text
            }
        }
    }
}
