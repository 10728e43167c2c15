use anyhow::Result;
use clap::Parser;
use dakarauto::browser::BrowserFetcher;
use dakarauto::clean::clean_dataset;
use dakarauto::debug;
use dakarauto::driver::{scrape_category, ScrapeOptions};
use dakarauto::fetch::{HttpFetcher, PageFetcher};
use dakarauto::models::Category;
use dakarauto::storage;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Dakarauto - listings scraper for dakar-auto.com")]
struct Args {
    /// Listing category to scrape
    #[clap(short, long, value_enum, default_value = "cars")]
    category: Category,

    /// Number of listing pages to scrape
    #[clap(short, long, default_value = "1")]
    pages: usize,

    /// Path to the output CSV file
    #[clap(short, long, default_value = "listings.csv")]
    output: String,

    /// Also write a cleaned CSV with derived numeric columns to this path
    #[clap(long)]
    cleaned_output: Option<String>,

    /// Render pages in a headless browser instead of plain HTTP fetches
    #[clap(long)]
    browser: bool,

    /// Delay between page fetches, in milliseconds
    #[clap(long, default_value = "500")]
    delay_ms: u64,

    /// Print debug output
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    debug::set_debug(args.debug);

    println!("Dakarauto - listings scraper for dakar-auto.com");
    println!("===============================================");

    let fetcher: Box<dyn PageFetcher> = if args.browser {
        Box::new(BrowserFetcher::launch()?)
    } else {
        Box::new(HttpFetcher::new())
    };
    println!(
        "Scraping {} pages of {} via {}",
        args.pages,
        args.category.label(),
        fetcher.name()
    );

    let options = ScrapeOptions {
        max_pages: args.pages,
        page_delay: Duration::from_millis(args.delay_ms),
    };
    let result = scrape_category(fetcher.as_ref(), args.category, &options);

    if result.dataset.is_empty() && result.summary.pages_failed == result.summary.pages_attempted {
        eprintln!("No page could be fetched; check the connection and try again.");
    }

    storage::save_dataset(&result.dataset, &args.output)?;

    if let Some(cleaned_path) = &args.cleaned_output {
        let cleaned = clean_dataset(&result.dataset);
        storage::save_cleaned_dataset(&cleaned, cleaned_path)?;
        println!("Saved cleaned dataset to {}", cleaned_path);
    }

    println!("\n=== Summary ===");
    println!(
        "Pages: {} attempted, {} failed",
        result.summary.pages_attempted, result.summary.pages_failed
    );
    println!(
        "Cards: {} seen, {} skipped",
        result.summary.cards_seen, result.summary.cards_skipped
    );
    println!("Listings collected: {}", result.dataset.len());

    Ok(())
}
