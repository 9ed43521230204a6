// models.rs

/// Column identifiers of the collected dataset, in serialization order.
pub const CSV_HEADER: [&str; 5] = ["Price", "Pièces", "Bains", "Surface", "Gouvernorat"];

/// One listing as extracted from a card.
///
/// Fields keep the raw card text. Nothing is parsed at collection time, so a
/// price like "1 200" or an empty surface is written out as-is and left for
/// the trainer to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingRecord {
    pub price: String,
    pub rooms: String,
    pub bathrooms: String,
    pub surface: String,
    pub region: String,
}

impl ListingRecord {
    /// Field values in `CSV_HEADER` order.
    pub fn to_row(&self) -> [&str; 5] {
        [
            self.price.as_str(),
            self.rooms.as_str(),
            self.bathrooms.as_str(),
            self.surface.as_str(),
            self.region.as_str(),
        ]
    }
}

/// Which record field a list item on a card describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Rooms,
    Bathrooms,
    Surface,
}
