//! Post-scrape cleaning: derives the numeric columns the analysis layer
//! charts against. Unparseable values become missing, never errors, and
//! cleaning the same dataset twice yields identical numeric columns.

use crate::models::{CleanedDataset, Dataset, NumericFields};
use regex::Regex;

/// Digits-only parse, for price values. No digits means missing.
pub fn numeric_price(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// First 4-digit run in the raw year token. Titles sometimes end in a model
/// name rather than a year ("GTI", "4x4"); those clean to missing.
pub fn numeric_year(raw: &str) -> Option<i64> {
    let year_regex = Regex::new(r"\d{4}").unwrap();
    year_regex.find(raw)?.as_str().parse().ok()
}

/// Digits-and-sign parse, for mileage. A negative parse is malformed
/// extraction output and is forced to missing rather than surfaced.
pub fn numeric_mileage(raw: &str) -> Option<i64> {
    let signed: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    let value: i64 = signed.parse().ok()?;
    if value < 0 {
        None
    } else {
        Some(value)
    }
}

/// Produce a cleaned copy of the dataset. The source is cloned, never
/// mutated.
pub fn clean_dataset(dataset: &Dataset) -> CleanedDataset {
    let numeric = dataset
        .listings
        .iter()
        .map(|listing| NumericFields {
            price_numeric: listing
                .price
                .and_then(|p| numeric_price(&p.to_string())),
            year_numeric: listing.year.as_deref().and_then(numeric_year),
            mileage_numeric: listing
                .mileage
                .and_then(|k| numeric_mileage(&k.to_string())),
        })
        .collect();

    CleanedDataset {
        dataset: dataset.clone(),
        numeric,
    }
}
