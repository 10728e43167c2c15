//! Page loop: walks the paginated listing index and accumulates records.

use crate::card::parse_card;
use crate::debug_println;
use crate::fetch::PageFetcher;
use crate::models::{Category, Dataset};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub max_pages: usize,
    /// Pause between page fetches, to be gentle with the site. Zero in
    /// tests. Not a retry mechanism; every page gets exactly one attempt.
    pub page_delay: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            max_pages: 1,
            page_delay: Duration::from_millis(500),
        }
    }
}

/// Counters for the run summary printed by the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub pages_attempted: usize,
    pub pages_failed: usize,
    pub cards_seen: usize,
    pub cards_skipped: usize,
}

pub struct ScrapeResult {
    pub dataset: Dataset,
    pub summary: ScrapeSummary,
}

/// Page 1 is the bare section URL; later pages add the page query parameter.
pub fn page_url(base_url: &str, page: usize) -> String {
    if page == 1 {
        base_url.to_string()
    } else {
        format!("{}?page={}", base_url, page)
    }
}

/// Scrape `max_pages` pages of one category. Failures are contained at the
/// smallest scope: a card that cannot be parsed is skipped, a page that
/// cannot be fetched contributes zero cards, and the run always completes
/// with whatever was collected, possibly an empty dataset.
pub fn scrape_category(
    fetcher: &dyn PageFetcher,
    category: Category,
    options: &ScrapeOptions,
) -> ScrapeResult {
    scrape_listing_pages(fetcher, category, category.base_url(), options)
}

pub fn scrape_listing_pages(
    fetcher: &dyn PageFetcher,
    category: Category,
    base_url: &str,
    options: &ScrapeOptions,
) -> ScrapeResult {
    let mut listings = Vec::new();
    let mut summary = ScrapeSummary::default();

    for page in 1..=options.max_pages {
        let url = page_url(base_url, page);
        debug_println!("Scraping {} page {}: {}", category.label(), page, url);
        summary.pages_attempted += 1;

        let cards = match fetcher.fetch_cards(&url) {
            Ok(cards) => cards,
            Err(e) => {
                eprintln!("Error fetching page {}: {}", page, e);
                summary.pages_failed += 1;
                continue;
            }
        };

        for card in &cards {
            summary.cards_seen += 1;
            match parse_card(card, category) {
                Ok(listing) => listings.push(listing),
                Err(e) => {
                    eprintln!("Skipping card on page {}: {}", page, e);
                    summary.cards_skipped += 1;
                }
            }
        }

        if page < options.max_pages && !options.page_delay.is_zero() {
            std::thread::sleep(options.page_delay);
        }
    }

    ScrapeResult {
        dataset: Dataset::new(category, listings),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_url_is_the_base_url() {
        let base = "https://dakar-auto.com/senegal/voitures-4";
        assert_eq!(page_url(base, 1), base);
    }

    #[test]
    fn later_pages_append_the_page_parameter() {
        let base = "https://dakar-auto.com/senegal/voitures-4";
        assert_eq!(
            page_url(base, 3),
            "https://dakar-auto.com/senegal/voitures-4?page=3"
        );
    }
}
