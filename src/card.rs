//! Assembly of one record from one listing card.

use crate::error::CardParseError;
use crate::extract;
use crate::fetch::ListingCard;
use crate::models::{Category, Listing};

/// Parse one card into a listing with the category's field set. Field
/// absence degrades to a missing value; only an unexpected failure (a
/// numeric parse on text that was present) returns `CardParseError`, in
/// which case the caller drops the whole card and carries on with the page.
pub fn parse_card(card: &ListingCard, category: Category) -> Result<Listing, CardParseError> {
    let (brand, year) = extract::brand_and_year(card);
    let price = extract::price(card)?;
    let location = extract::location(card);
    let owner = extract::owner(card);

    let mut listing = Listing {
        brand,
        year,
        price,
        location,
        owner,
        ..Default::default()
    };

    if category.has_mileage() {
        let attrs = extract::attributes(card);
        listing.mileage = attrs
            .mileage
            .as_deref()
            .map(extract::parse_mileage)
            .transpose()?;
        if category.has_drivetrain() {
            listing.gearbox = attrs.gearbox;
            listing.fuel = attrs.fuel;
        }
    }

    Ok(listing)
}
