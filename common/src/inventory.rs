use serde::{Deserialize, Serialize};

use crate::currency::format_dollars;
use crate::firestore::{Document, FieldValue};
use crate::stock::StockLevel;

/// Image shown when an item has no `ImageUrl`.
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";
pub const NO_TITLE: &str = "No Title";
pub const NO_DESCRIPTION: &str = "No Description";

/// Document id of an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// An inventory record decoded from its store document.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: ItemId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: String,
    pub quantity: i64,
    pub is_active: bool,
}

impl InventoryItem {
    /// Decode a document. Missing or mistyped fields take their defaults,
    /// except `IsActive`: only an absent flag means active.
    pub fn from_document(doc: &Document) -> Self {
        let text = |key: &str| doc.field(key).and_then(FieldValue::as_str).map(String::from);

        Self {
            id: ItemId(doc.id().to_string()),
            title: text("Title"),
            description: text("Description"),
            price: doc.field("Price").and_then(FieldValue::as_f64),
            image_url: text("ImageUrl").unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            quantity: doc.field("Quantity").and_then(FieldValue::as_i64).unwrap_or(0),
            is_active: doc
                .field("IsActive")
                .map_or(true, |v| v.as_bool().unwrap_or(false)),
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    /// `Price: $x.yy`, with `0.00` for an unpriced item.
    pub fn price_label(&self) -> String {
        format!("Price: {}", format_dollars(self.price.unwrap_or(0.0)))
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.quantity)
    }

    /// Whether the item is shown to the current viewer.
    pub fn is_visible(&self, admin: bool) -> bool {
        admin || self.is_active
    }
}

/// Decode a whole fetch, keeping the store's order.
pub fn decode_documents(docs: &[Document]) -> Vec<InventoryItem> {
    docs.iter().map(InventoryItem::from_document).collect()
}
