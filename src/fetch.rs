use crate::debug_println;
use crate::error::FetchError;
use scraper::{ElementRef, Html, Selector};

/// Container class wrapping one ad on a listing page.
pub const CARD_SELECTOR: &str = ".listings-cards__list-item";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// One listing card lifted out of a page. Owns its own HTML fragment so the
/// page document can be dropped as soon as the cards are collected.
pub struct ListingCard {
    fragment: Html,
}

impl ListingCard {
    pub fn from_element(element: ElementRef) -> Self {
        Self {
            fragment: Html::parse_fragment(&element.html()),
        }
    }

    /// Build a card directly from an HTML snippet. Used by tests and fixture
    /// tooling; production cards come from `from_element`.
    pub fn from_html(html: &str) -> Self {
        Self {
            fragment: Html::parse_fragment(html),
        }
    }

    pub fn root(&self) -> ElementRef {
        self.fragment.root_element()
    }
}

/// A strategy for turning a page URL into the ordered listing cards on that
/// page. Absence of listings is not an error; an empty page yields an empty
/// vector.
pub trait PageFetcher {
    fn name(&self) -> &str;
    fn fetch_cards(&self, url: &str) -> Result<Vec<ListingCard>, FetchError>;
}

/// Select all listing cards out of a page body.
pub(crate) fn collect_cards(body: &str) -> Vec<ListingCard> {
    let document = Html::parse_document(body);
    let card_selector = Selector::parse(CARD_SELECTOR).unwrap();
    document
        .select(&card_selector)
        .map(ListingCard::from_element)
        .collect()
}

/// Plain HTTP GET + static HTML parse. Cannot observe listings populated by
/// client-side scripts; use `BrowserFetcher` for those.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher for HttpFetcher {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch_cards(&self, url: &str) -> Result<Vec<ListingCard>, FetchError> {
        debug_println!("Fetching listing page: {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()?;
        let body = response.text()?;

        let cards = collect_cards(&body);
        debug_println!("Found {} listing cards on page", cards.len());
        Ok(cards)
    }
}
