//! Snapshot persistence for the catalog and cart.
//!
//! State is stored as two independently keyed blobs, `product` and `cart`,
//! each the plain JSON serialisation of its record list. There is no
//! versioning: a change to the data model is a breaking change.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::models::{CartItem, Product};

pub const PRODUCT_KEY: &str = "product";
pub const CART_KEY: &str = "cart";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),

    #[error("storage format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load/save of the two collections. Loads return `Ok(None)` when the key
/// has never been written.
pub trait StateRepository: Send + Sync {
    fn load_products(&self) -> Result<Option<Vec<Product>>, StoreError>;
    fn save_products(&self, products: &[Product]) -> Result<(), StoreError>;
    fn load_cart(&self) -> Result<Option<Vec<CartItem>>, StoreError>;
    fn save_cart(&self, items: &[CartItem]) -> Result<(), StoreError>;
}

/// Keeps serialised blobs in process memory.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    blobs: Mutex<HashMap<&'static str, String>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, StoreError> {
        let blobs = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        blobs
            .get(key)
            .map(|raw| serde_json::from_str(raw))
            .transpose()
            .map_err(StoreError::from)
    }

    fn write<T: Serialize + ?Sized>(&self, key: &'static str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        let mut blobs = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        blobs.insert(key, raw);
        Ok(())
    }
}

impl StateRepository for MemoryRepository {
    fn load_products(&self) -> Result<Option<Vec<Product>>, StoreError> {
        self.read(PRODUCT_KEY)
    }

    fn save_products(&self, products: &[Product]) -> Result<(), StoreError> {
        self.write(PRODUCT_KEY, products)
    }

    fn load_cart(&self) -> Result<Option<Vec<CartItem>>, StoreError> {
        self.read(CART_KEY)
    }

    fn save_cart(&self, items: &[CartItem]) -> Result<(), StoreError> {
        self.write(CART_KEY, items)
    }
}

/// A directory used as key-value storage: key `k` lives in `k.json`.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    root: PathBuf,
}

impl JsonFileRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let raw = match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    // Staged in a sibling temp file, then renamed over the target.
    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        let target = self.path_for(key);
        let staging = self.root.join(format!(".{key}.json.tmp"));
        let bytes = serde_json::to_vec_pretty(value)?;
        if let Err(err) = fs::write(&staging, bytes).and_then(|()| fs::rename(&staging, &target)) {
            if let Err(cleanup) = fs::remove_file(&staging) {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(path = %staging.display(), error = %cleanup, "staging file left behind");
                }
            }
            return Err(err.into());
        }
        tracing::debug!(path = %target.display(), "blob written");
        Ok(())
    }
}

impl StateRepository for JsonFileRepository {
    fn load_products(&self) -> Result<Option<Vec<Product>>, StoreError> {
        self.read(PRODUCT_KEY)
    }

    fn save_products(&self, products: &[Product]) -> Result<(), StoreError> {
        self.write(PRODUCT_KEY, products)
    }

    fn load_cart(&self) -> Result<Option<Vec<CartItem>>, StoreError> {
        self.read(CART_KEY)
    }

    fn save_cart(&self, items: &[CartItem]) -> Result<(), StoreError> {
        self.write(CART_KEY, items)
    }
}
