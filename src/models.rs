use clap::ValueEnum;

/// One of the three dakar-auto listing sections. The category decides which
/// endpoint is scraped and which fields a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    /// Cars for sale
    Cars,
    /// Motorcycles and scooters
    Motos,
    /// Rental cars
    Rentals,
}

impl Category {
    pub fn base_url(&self) -> &'static str {
        match self {
            Category::Cars => "https://dakar-auto.com/senegal/voitures-4",
            Category::Motos => "https://dakar-auto.com/senegal/motos-and-scooters-3",
            Category::Rentals => "https://dakar-auto.com/senegal/location-de-voitures-19",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cars => "cars",
            Category::Motos => "motorcycles",
            Category::Rentals => "rentals",
        }
    }

    /// CSV column order for this category.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Category::Cars => &[
                "brand", "year", "price", "location", "mileage", "gearbox", "fuel", "owner",
            ],
            Category::Motos => &["brand", "year", "price", "location", "mileage", "owner"],
            Category::Rentals => &["brand", "year", "price", "location", "owner"],
        }
    }

    /// Rental ads carry no odometer attribute.
    pub fn has_mileage(&self) -> bool {
        !matches!(self, Category::Rentals)
    }

    /// Gearbox and fuel type are only kept for cars for sale.
    pub fn has_drivetrain(&self) -> bool {
        matches!(self, Category::Cars)
    }
}

/// One scraped ad. Every field is optional: absence on the page is an
/// expected outcome, not an error. `owner` may be present but empty when the
/// "published by" text is shorter than its fixed prefix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub brand: Option<String>,
    pub year: Option<String>,
    pub price: Option<i64>,
    pub location: Option<String>,
    pub mileage: Option<i64>,
    pub gearbox: Option<String>,
    pub fuel: Option<String>,
    pub owner: Option<String>,
}

impl Listing {
    /// Render this listing in the category's column order. Missing values
    /// become empty fields.
    pub fn to_csv_record(&self, category: Category) -> Vec<String> {
        category
            .columns()
            .iter()
            .map(|column| self.field_as_string(column))
            .collect()
    }

    fn field_as_string(&self, column: &str) -> String {
        match column {
            "brand" => self.brand.clone().unwrap_or_default(),
            "year" => self.year.clone().unwrap_or_default(),
            "price" => self.price.map(|p| p.to_string()).unwrap_or_default(),
            "location" => self.location.clone().unwrap_or_default(),
            "mileage" => self.mileage.map(|k| k.to_string()).unwrap_or_default(),
            "gearbox" => self.gearbox.clone().unwrap_or_default(),
            "fuel" => self.fuel.clone().unwrap_or_default(),
            "owner" => self.owner.clone().unwrap_or_default(),
            other => unreachable!("unknown column: {other}"),
        }
    }
}

/// The result of one scrape run: an ordered record sequence sharing one
/// category-determined field set. Immutable once handed to the caller.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub category: Category,
    pub listings: Vec<Listing>,
}

impl Dataset {
    pub fn new(category: Category, listings: Vec<Listing>) -> Self {
        Self { category, listings }
    }

    pub fn empty(category: Category) -> Self {
        Self::new(category, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Derived numeric columns for one listing. `None` marks an unparseable or
/// absent source value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericFields {
    pub price_numeric: Option<i64>,
    pub year_numeric: Option<i64>,
    pub mileage_numeric: Option<i64>,
}

/// A dataset plus the derived numeric columns, one entry per listing. The
/// source dataset is copied, never mutated in place.
#[derive(Debug, Clone)]
pub struct CleanedDataset {
    pub dataset: Dataset,
    pub numeric: Vec<NumericFields>,
}
