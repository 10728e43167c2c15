//! Flat-file persistence: one CSV per scrape run, full overwrite, UTF-8,
//! header row matching the category's field set. The presentation layer
//! reads these files back for its "previously collected data" views.

use crate::models::{Category, CleanedDataset, Dataset, Listing};
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

pub fn save_dataset(dataset: &Dataset, output_path: &str) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create output file: {}", output_path))?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(dataset.category.columns())?;
    for listing in &dataset.listings {
        writer.write_record(&listing.to_csv_record(dataset.category))?;
    }

    writer.flush()?;
    println!(
        "Saved {} {} listings to {}",
        dataset.len(),
        dataset.category.label(),
        output_path
    );
    Ok(())
}

/// Cleaned export: the category columns followed by the three derived
/// numeric columns. The numeric columns are always emitted, even for
/// categories without mileage, so the chart layer sees a fixed shape.
pub fn save_cleaned_dataset(cleaned: &CleanedDataset, output_path: &str) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create output file: {}", output_path))?;
    let mut writer = csv::Writer::from_writer(file);

    let mut header: Vec<&str> = cleaned.dataset.category.columns().to_vec();
    header.extend(["price_numeric", "year_numeric", "mileage_numeric"]);
    writer.write_record(&header)?;

    for (listing, numeric) in cleaned.dataset.listings.iter().zip(&cleaned.numeric) {
        let mut record = listing.to_csv_record(cleaned.dataset.category);
        record.push(numeric.price_numeric.map(|v| v.to_string()).unwrap_or_default());
        record.push(numeric.year_numeric.map(|v| v.to_string()).unwrap_or_default());
        record.push(numeric.mileage_numeric.map(|v| v.to_string()).unwrap_or_default());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Read a previously saved dataset back. A missing file is an empty
/// dataset, not an error. Empty fields load as missing; the present-but-
/// empty owner distinction does not survive the CSV round trip.
pub fn load_dataset(input_path: &str, category: Category) -> Result<Dataset> {
    let path = Path::new(input_path);
    if !path.exists() {
        return Ok(Dataset::empty(category));
    }

    let file =
        File::open(path).context(format!("Failed to open input file: {}", input_path))?;
    let mut reader = csv::Reader::from_reader(file);

    let columns = category.columns();
    let mut listings = Vec::new();

    for result in reader.records() {
        let record = result?;

        if record.len() < columns.len() {
            eprintln!("Warning: skipping record with insufficient fields: {:?}", record);
            continue;
        }

        let mut listing = Listing::default();
        for (index, column) in columns.iter().enumerate() {
            let field = record.get(index).unwrap_or_default();
            if field.is_empty() {
                continue;
            }
            match *column {
                "brand" => listing.brand = Some(field.to_string()),
                "year" => listing.year = Some(field.to_string()),
                "price" => listing.price = field.parse().ok(),
                "location" => listing.location = Some(field.to_string()),
                "mileage" => listing.mileage = field.parse().ok(),
                "gearbox" => listing.gearbox = Some(field.to_string()),
                "fuel" => listing.fuel = Some(field.to_string()),
                "owner" => listing.owner = Some(field.to_string()),
                _ => {}
            }
        }
        listings.push(listing);
    }

    Ok(Dataset::new(category, listings))
}
