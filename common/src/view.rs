//! Render-ready models for the catalog and cart pages.
//!
//! The UI maps these one-to-one onto markup, so everything that decides what
//! appears, in which order, and with which text lives here.

use crate::cart::{Cart, CartEntry};
use crate::currency::format_dollars;
use crate::error::CatalogError;
use crate::inventory::InventoryItem;
use crate::pagination::PageWindow;
use crate::stock::{StockLevel, StockPartition};

pub const NO_ITEMS_MESSAGE: &str = "No items found.";
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";
pub const LIMITED_STOCK_HEADING: &str = "Limited Stock: Hurry Up!";
pub const OUT_OF_STOCK_LABEL: &str = "Out of Stock";
pub const ADD_TO_CART_LABEL: &str = "Add to Cart";

/// Text shown in place of the list when the fetch fails.
pub fn fetch_error_message(err: &CatalogError) -> String {
    format!("Error fetching inventory: {err}")
}

/// One product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub image_url: String,
    pub stock: StockLevel,
    /// Present only for in-stock items.
    pub cart_entry: Option<CartEntry>,
}

impl ItemCard {
    pub fn from_item(item: &InventoryItem) -> Self {
        let stock = item.stock_level();
        Self {
            id: item.id.0.clone(),
            title: item.display_title().to_string(),
            description: item.display_description().to_string(),
            price_label: item.price_label(),
            image_url: item.image_url.clone(),
            stock,
            cart_entry: stock.can_add_to_cart().then(|| CartEntry::for_item(item)),
        }
    }
}

/// Catalog content in render order.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogBlock {
    LimitedHeading,
    Card(ItemCard),
    Divider,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub blocks: Vec<CatalogBlock>,
    pub show_previous: bool,
    pub show_next: bool,
}

impl CatalogPage {
    /// Lay out the current page of `items` (the full fetched list).
    pub fn build(items: &[InventoryItem], window: PageWindow, admin: bool) -> Self {
        let partition = StockPartition::of(window.slice(items), admin);
        let mut blocks = Vec::with_capacity(partition.len() + 2);

        if !partition.limited.is_empty() {
            blocks.push(CatalogBlock::LimitedHeading);
            blocks.extend(
                partition
                    .limited
                    .iter()
                    .map(|item| CatalogBlock::Card(ItemCard::from_item(item))),
            );
        }
        if partition.needs_divider() {
            blocks.push(CatalogBlock::Divider);
        }
        blocks.extend(
            partition
                .rest()
                .map(|item| CatalogBlock::Card(ItemCard::from_item(item))),
        );

        Self {
            blocks,
            show_previous: window.has_previous(),
            show_next: window.has_next(items.len()),
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &ItemCard> {
        self.blocks.iter().filter_map(|block| match block {
            CatalogBlock::Card(card) => Some(card),
            _ => None,
        })
    }
}

/// Everything the catalog list area can show.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Loading,
    Failed(String),
    Empty,
    Page(CatalogPage),
}

impl CatalogView {
    /// `None` while the fetch is still in flight.
    pub fn from_fetch(
        fetched: Option<&Result<Vec<InventoryItem>, CatalogError>>,
        window: PageWindow,
        admin: bool,
    ) -> Self {
        match fetched {
            None => CatalogView::Loading,
            Some(Err(err)) => CatalogView::Failed(fetch_error_message(err)),
            Some(Ok(items)) if items.is_empty() => CatalogView::Empty,
            Some(Ok(items)) => CatalogView::Page(CatalogPage::build(items, window, admin)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    pub id: String,
    pub title: String,
    pub price_label: String,
    pub quantity_label: String,
    pub total_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartView {
    Empty,
    Lines {
        lines: Vec<CartLineView>,
        grand_total_label: String,
    },
}

impl CartView {
    pub fn of(cart: &Cart) -> Self {
        if cart.is_empty() {
            return CartView::Empty;
        }

        let lines = cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                id: line.id.clone(),
                title: line.title.clone(),
                price_label: format!("Price: {}", format_dollars(line.price)),
                quantity_label: format!("Quantity: {}", line.quantity),
                total_label: format!("Total: {}", format_dollars(line.line_total())),
            })
            .collect();

        CartView::Lines {
            lines,
            grand_total_label: format!("Grand Total: {}", format_dollars(cart.grand_total())),
        }
    }
}
