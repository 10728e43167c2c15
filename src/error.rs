use thiserror::Error;

/// A page could not be retrieved at all. The pagination driver logs this and
/// moves on to the next page index; it never aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("browser session failed: {0}")]
    Browser(String),
}

/// An extraction step on one listing card failed unexpectedly. The card is
/// skipped and logged; the rest of the page is unaffected.
#[derive(Debug, Error)]
pub enum CardParseError {
    #[error("could not parse {field} from {text:?}: {source}")]
    BadNumber {
        field: &'static str,
        text: String,
        source: std::num::ParseIntError,
    },
}
