use serde::{Deserialize, Serialize};

use crate::currency::format_amount;
use crate::inventory::InventoryItem;

/// What the "Add to Cart" button carries for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub image_url: String,
}

impl CartEntry {
    /// Entry for an in-stock item. Unpriced items go in at zero.
    pub fn for_item(item: &InventoryItem) -> Self {
        Self {
            id: item.id.0.clone(),
            title: item.display_title().to_string(),
            price: item.price.unwrap_or(0.0),
            image_url: item.image_url.clone(),
        }
    }
}

/// One line of the cart, stored as `{id, title, price, quantity, imageUrl}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    pub image_url: String,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Ordered cart lines, at most one per item id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Bump the quantity of an existing line or append a new one with
    /// quantity 1. Returns the affected line.
    pub fn add(&mut self, entry: CartEntry) -> &CartLine {
        let index = match self.lines.iter().position(|l| l.id == entry.id) {
            Some(index) => {
                self.lines[index].quantity += 1;
                index
            }
            None => {
                self.lines.push(CartLine {
                    id: entry.id,
                    title: entry.title,
                    price: entry.price,
                    quantity: 1,
                    image_url: entry.image_url,
                });
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    /// Sum of price × quantity, accumulated in line order.
    pub fn grand_total(&self) -> f64 {
        self.lines.iter().fold(0.0, |total, line| total + line.line_total())
    }

    pub fn grand_total_label(&self) -> String {
        format_amount(self.grand_total())
    }
}
