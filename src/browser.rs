//! Browser-automation fetch strategy.
//!
//! Some listing pages fill their cards in with client-side script, which the
//! plain HTTP strategy cannot observe. This fetcher drives one headless
//! Chrome instance instead. The Chrome process is owned by the fetcher and
//! torn down when it is dropped, so a run holds exactly one session and
//! releases it even on error paths.

use crate::debug_println;
use crate::error::FetchError;
use crate::fetch::{collect_cards, ListingCard, PageFetcher};
use anyhow::{anyhow, Context, Result};
use headless_chrome::{Browser, LaunchOptions};
use std::time::Duration;

pub struct BrowserFetcher {
    browser: Browser,
}

impl BrowserFetcher {
    /// Launch a headless Chrome session. Fails up-front if no usable Chrome
    /// binary is found; a run should not start at all in that case.
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .idle_browser_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| anyhow!("failed to build browser launch options: {}", e))?;

        let browser = Browser::new(options).context("Failed to launch headless Chrome")?;
        Ok(Self { browser })
    }
}

impl PageFetcher for BrowserFetcher {
    fn name(&self) -> &str {
        "browser"
    }

    fn fetch_cards(&self, url: &str) -> Result<Vec<ListingCard>, FetchError> {
        debug_println!("Rendering listing page: {}", url);

        let tab = self
            .browser
            .new_tab()
            .map_err(|e| FetchError::Browser(e.to_string()))?;

        let result = (|| {
            tab.navigate_to(url)
                .map_err(|e| FetchError::Browser(e.to_string()))?;
            tab.wait_until_navigated()
                .map_err(|e| FetchError::Browser(e.to_string()))?;
            tab.get_content()
                .map_err(|e| FetchError::Browser(e.to_string()))
        })();

        // Close the tab whether navigation worked or not; the session
        // itself stays alive for the next page.
        let _ = tab.close(true);

        let body = result?;
        let cards = collect_cards(&body);
        debug_println!("Found {} listing cards in rendered page", cards.len());
        Ok(cards)
    }
}
