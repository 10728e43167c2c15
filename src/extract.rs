//! Field extraction from a single listing card.
//!
//! Every extractor tolerates absence: a selector that matches nothing, or a
//! node whose text trims to empty, yields `None`. Only a numeric parse on
//! text that was actually found is allowed to fail, and that failure is a
//! `CardParseError` handled one level up.

use crate::error::CardParseError;
use crate::fetch::ListingCard;
use scraper::Selector;

const PRICE_SELECTOR: &str = ".listing-card__header__price";
const TITLE_SELECTOR: &str = ".listing-card__header__title a";
const LOCATION_SELECTOR: &str = ".entry-zone-address";
const AUTHOR_SELECTOR: &str = ".time-author a";
const ATTRIBUTE_SELECTOR: &str = ".listing-card__attribute";

// Icon classes tagging the entries of the attribute list.
const ICON_MILEAGE: &str = "icon-road-perspective";
const ICON_GEARBOX: &str = "icon-gear-icon";
const ICON_FUEL: &str = "icon-fuel";

// The "published by" text starts with a 4-character label ("Par ").
const OWNER_PREFIX_CHARS: usize = 4;

/// Text of the first node matching `selector` inside the card, trimmed.
/// Zero matches or all-whitespace text is `None`.
fn select_text(card: &ListingCard, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    let element = card.root().select(&selector).next()?;
    let text = element.text().collect::<Vec<_>>().join(" ");
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Price in FCFA as printed, with every non-digit character stripped.
/// A price node with no digits at all ("N/A") is missing, not an error.
pub fn price(card: &ListingCard) -> Result<Option<i64>, CardParseError> {
    let raw = match select_text(card, PRICE_SELECTOR) {
        Some(raw) => raw,
        None => return Ok(None),
    };

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Ok(None);
    }

    digits
        .parse::<i64>()
        .map(Some)
        .map_err(|source| CardParseError::BadNumber {
            field: "price",
            text: raw,
            source,
        })
}

/// Brand and year from the ad title: first and last whitespace token.
/// The year token is taken as-is here; 4-digit validation happens in the
/// cleaning step.
pub fn brand_and_year(card: &ListingCard) -> (Option<String>, Option<String>) {
    let title = match select_text(card, TITLE_SELECTOR) {
        Some(title) => title,
        None => return (None, None),
    };

    let tokens: Vec<&str> = title.split_whitespace().collect();
    let brand = tokens.first().map(|t| t.to_string());
    let year = tokens.last().map(|t| t.to_string());
    (brand, year)
}

pub fn location(card: &ListingCard) -> Option<String> {
    select_text(card, LOCATION_SELECTOR)
}

/// Owner name with the "Par " label stripped. Text shorter than the label
/// yields the empty string, which is kept distinct from a missing author
/// node.
pub fn owner(card: &ListingCard) -> Option<String> {
    let raw = select_text(card, AUTHOR_SELECTOR)?;
    Some(raw.chars().skip(OWNER_PREFIX_CHARS).collect())
}

/// The raw texts of the icon-tagged attribute list, classified by icon.
/// Classification only depends on each entry's own icon class, so the order
/// of the entries on the page does not matter.
#[derive(Debug, Default, PartialEq)]
pub struct CardAttributes {
    pub mileage: Option<String>,
    pub gearbox: Option<String>,
    pub fuel: Option<String>,
}

pub fn attributes(card: &ListingCard) -> CardAttributes {
    let attribute_selector = Selector::parse(ATTRIBUTE_SELECTOR).unwrap();
    let icon_selector = Selector::parse("i").unwrap();

    let mut found = CardAttributes::default();
    for entry in card.root().select(&attribute_selector) {
        let text = entry.text().collect::<Vec<_>>().join(" ");
        let text = text.trim().to_string();

        let icon = match entry.select(&icon_selector).next() {
            Some(icon) => icon,
            None => continue,
        };

        if icon.value().classes().any(|c| c == ICON_MILEAGE) {
            found.mileage = Some(text);
        } else if icon.value().classes().any(|c| c == ICON_GEARBOX) {
            found.gearbox = Some(text);
        } else if icon.value().classes().any(|c| c == ICON_FUEL) {
            found.fuel = Some(text);
        }
    }
    found
}

/// Parse an odometer attribute text like "85 000 km". The unit suffix and
/// thousands separators are stripped; anything left that is not an integer
/// is a card-fatal parse error, matching how an ad with a mangled odometer
/// is dropped rather than kept half-read.
pub fn parse_mileage(text: &str) -> Result<i64, CardParseError> {
    let stripped = text.replace(" km", "").replace(' ', "");
    stripped
        .parse::<i64>()
        .map_err(|source| CardParseError::BadNumber {
            field: "mileage",
            text: text.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(html: &str) -> ListingCard {
        ListingCard::from_html(html)
    }

    #[test]
    fn price_strips_non_digits() {
        let card = card(r#"<div class="listing-card__header__price">12 500 FCFA</div>"#);
        assert_eq!(price(&card).unwrap(), Some(12_500));
    }

    #[test]
    fn price_without_digits_is_missing() {
        let card = card(r#"<div class="listing-card__header__price">N/A</div>"#);
        assert_eq!(price(&card).unwrap(), None);
    }

    #[test]
    fn price_node_absent_is_missing() {
        let card = card(r#"<div class="something-else">12 500</div>"#);
        assert_eq!(price(&card).unwrap(), None);
    }

    #[test]
    fn title_splits_into_brand_and_year() {
        let card = card(
            r#"<h2 class="listing-card__header__title"><a href="/a">Toyota Corolla 2015</a></h2>"#,
        );
        let (brand, year) = brand_and_year(&card);
        assert_eq!(brand.as_deref(), Some("Toyota"));
        assert_eq!(year.as_deref(), Some("2015"));
    }

    #[test]
    fn single_token_title_is_both_brand_and_year() {
        let card = card(r#"<h2 class="listing-card__header__title"><a href="/a">Vespa</a></h2>"#);
        let (brand, year) = brand_and_year(&card);
        assert_eq!(brand.as_deref(), Some("Vespa"));
        assert_eq!(year.as_deref(), Some("Vespa"));
    }

    #[test]
    fn empty_title_yields_missing_brand_and_year() {
        let card = card(r#"<h2 class="listing-card__header__title"><a href="/a">   </a></h2>"#);
        assert_eq!(brand_and_year(&card), (None, None));
    }

    #[test]
    fn owner_prefix_is_stripped() {
        let card = card(r#"<div class="time-author"><a href="/u">Par Amadou Ba</a></div>"#);
        assert_eq!(owner(&card).as_deref(), Some("Amadou Ba"));
    }

    #[test]
    fn owner_shorter_than_prefix_is_empty_not_missing() {
        let card = card(r#"<div class="time-author"><a href="/u">Par</a></div>"#);
        assert_eq!(owner(&card).as_deref(), Some(""));
    }

    #[test]
    fn attribute_classification_is_order_independent() {
        let entries = [
            r#"<div class="listing-card__attribute"><i class="icon-road-perspective"></i> 85 000 km</div>"#,
            r#"<div class="listing-card__attribute"><i class="icon-gear-icon"></i> Automatique</div>"#,
            r#"<div class="listing-card__attribute"><i class="icon-fuel"></i> Essence</div>"#,
        ];

        let permutations = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];

        for order in permutations {
            let html: String = order.iter().map(|&i| entries[i]).collect();
            let found = attributes(&card(&html));
            assert_eq!(found.mileage.as_deref(), Some("85 000 km"));
            assert_eq!(found.gearbox.as_deref(), Some("Automatique"));
            assert_eq!(found.fuel.as_deref(), Some("Essence"));
        }
    }

    #[test]
    fn unrecognized_icons_are_ignored() {
        let card = card(
            r#"<div class="listing-card__attribute"><i class="icon-calendar"></i> 2015</div>"#,
        );
        assert_eq!(attributes(&card), CardAttributes::default());
    }

    #[test]
    fn mileage_text_parses_with_unit_and_separators() {
        assert_eq!(parse_mileage("85 000 km").unwrap(), 85_000);
        assert_eq!(parse_mileage("1200 km").unwrap(), 1200);
    }

    #[test]
    fn garbage_mileage_text_is_an_error() {
        assert!(parse_mileage("beaucoup").is_err());
    }
}
