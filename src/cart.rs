use crate::{
    catalog::ProductCatalog,
    models::{CartItem, ProductId},
};

/// Line items keyed by product, at most one line per product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a cart from a snapshot. Lines with a zero quantity are
    /// dropped and repeated product lines are folded into the first one.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                tracing::warn!(product_id = item.product_id, "dropping empty cart line");
                continue;
            }
            match cart.position(item.product_id) {
                Some(index) => {
                    let line = &mut cart.items[index];
                    line.quantity = line.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Adds one unit of `product_id`. Unknown products are ignored and an
    /// existing line keeps the name and price it was created with.
    pub fn add_item(&mut self, catalog: &ProductCatalog, product_id: ProductId) -> Option<&CartItem> {
        let Some(product) = catalog.get_product_by_id(product_id) else {
            tracing::debug!(product_id, "add skipped, product not found");
            return None;
        };

        let index = match self.position(product_id) {
            Some(index) => {
                let line = &mut self.items[index];
                line.quantity = line.quantity.saturating_add(1);
                index
            }
            None => {
                self.items.push(CartItem {
                    product_id: product.id,
                    name: product.name.clone(),
                    price: product.price,
                    quantity: 1,
                });
                self.items.len() - 1
            }
        };

        let line = &self.items[index];
        tracing::info!(product_id, quantity = line.quantity, "cart item added");
        Some(line)
    }

    /// Removes one unit of `product_id`, dropping the line when it reaches
    /// zero. Returns the remaining quantity, or `None` when no line matched.
    pub fn remove_item(&mut self, product_id: ProductId) -> Option<u32> {
        let Some(index) = self.position(product_id) else {
            tracing::debug!(product_id, "remove skipped, no cart line");
            return None;
        };

        let line = &mut self.items[index];
        let remaining = if line.quantity > 1 {
            line.quantity -= 1;
            line.quantity
        } else {
            self.items.remove(index);
            0
        };
        tracing::info!(product_id, remaining, "cart item removed");
        Some(remaining)
    }

    pub fn clear_cart(&mut self) {
        tracing::info!(lines = self.items.len(), "cart cleared");
        self.items.clear();
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn total_price(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |total, item| total.saturating_add(item.line_total()))
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product_id == product_id)
    }
}
