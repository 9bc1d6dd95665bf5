use crate::{
    cart::Cart,
    catalog::ProductCatalog,
    models::{CartItem, ProductId},
    seed,
    storage::{StateRepository, StoreError},
};

/// The catalog and the cart that reads from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shop {
    pub catalog: ProductCatalog,
    pub cart: Cart,
}

impl Shop {
    pub fn new(catalog: ProductCatalog, cart: Cart) -> Self {
        Self { catalog, cart }
    }

    pub fn sample() -> Self {
        Self::new(seed::sample_catalog(), Cart::new())
    }

    /// Restores both collections. A missing product blob falls back to the
    /// sample catalog and a missing cart blob to an empty cart.
    pub fn load(repo: &dyn StateRepository) -> Result<Self, StoreError> {
        let catalog = match repo.load_products()? {
            Some(products) => ProductCatalog::from_products(products),
            None => {
                tracing::info!("no stored catalog, using sample products");
                seed::sample_catalog()
            }
        };
        let cart = repo.load_cart()?.map(Cart::from_items).unwrap_or_default();
        tracing::info!(
            products = catalog.len(),
            cart_lines = cart.item_count(),
            "shop state loaded"
        );
        Ok(Self::new(catalog, cart))
    }

    /// Writes a full snapshot of both collections.
    pub fn checkpoint(&self, repo: &dyn StateRepository) -> Result<(), StoreError> {
        repo.save_products(self.catalog.products())?;
        repo.save_cart(self.cart.items())?;
        tracing::debug!("shop state checkpointed");
        Ok(())
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) -> Option<&CartItem> {
        self.cart.add_item(&self.catalog, product_id)
    }
}
