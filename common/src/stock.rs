use crate::inventory::InventoryItem;

/// Quantities strictly below this (and above zero) count as limited stock.
pub const LIMITED_STOCK_THRESHOLD: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// `0 < quantity < 20`
    Limited,
    Regular,
    OutOfStock,
}

impl StockLevel {
    pub fn classify(quantity: i64) -> Self {
        if quantity <= 0 {
            StockLevel::OutOfStock
        } else if quantity < LIMITED_STOCK_THRESHOLD {
            StockLevel::Limited
        } else {
            StockLevel::Regular
        }
    }

    pub fn can_add_to_cart(self) -> bool {
        !matches!(self, StockLevel::OutOfStock)
    }
}

/// The visible items of one page, grouped by stock level in render order.
///
/// Groups keep the order the items had in the fetched list. Out-of-stock
/// items trail the regular ones.
#[derive(Debug, Default)]
pub struct StockPartition<'a> {
    pub limited: Vec<&'a InventoryItem>,
    pub regular: Vec<&'a InventoryItem>,
    pub out_of_stock: Vec<&'a InventoryItem>,
}

impl<'a> StockPartition<'a> {
    /// Partition a page slice, dropping inactive items unless `admin`.
    pub fn of(items: &'a [InventoryItem], admin: bool) -> Self {
        let mut partition = Self::default();
        for item in items.iter().filter(|item| item.is_visible(admin)) {
            match item.stock_level() {
                StockLevel::Limited => partition.limited.push(item),
                StockLevel::Regular => partition.regular.push(item),
                StockLevel::OutOfStock => partition.out_of_stock.push(item),
            }
        }
        partition
    }

    /// Items rendered below the limited-stock block.
    pub fn rest(&self) -> impl Iterator<Item = &'a InventoryItem> + '_ {
        self.regular.iter().chain(self.out_of_stock.iter()).copied()
    }

    /// A divider separates the limited block from whatever follows it.
    pub fn needs_divider(&self) -> bool {
        !self.limited.is_empty() && (!self.regular.is_empty() || !self.out_of_stock.is_empty())
    }

    pub fn len(&self) -> usize {
        self.limited.len() + self.regular.len() + self.out_of_stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
