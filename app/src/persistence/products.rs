use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use models::domains::product::Product;
use models::params::product::{CreateProductParams, UpdateProductParams};

use crate::error::ProductStoreError;

fn initial_products() -> Vec<Product> {
    let entry = |id: i32, name: &str, category: &str, price: f64, stock: i32, description: &str| {
        Product {
            id,
            name: name.to_owned(),
            category: category.to_owned(),
            price,
            sale_price: None,
            stock,
            description: description.to_owned(),
            status: "Selling".to_owned(),
            published: true,
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    };
    vec![
        entry(1, "T-Shirt", "Clothing", 25.99, 100, "Comfortable cotton t-shirt"),
        entry(2, "Jeans", "Clothing", 59.99, 50, "Blue denim jeans"),
        entry(3, "Sneakers", "Footwear", 89.99, 30, "Sport sneakers"),
    ]
}

/// Flat-file product catalog. The whole file is decoded on every read and
/// rewritten on every mutation, with a single async lock serializing access
/// so concurrent mutations cannot interleave their read-modify-write cycles.
#[derive(Clone)]
pub struct ProductStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl ProductStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates the backing file with the sample catalog when it does not
    /// exist yet. An existing file is left untouched.
    pub async fn seed_if_missing(&self) -> Result<(), ProductStoreError> {
        let _guard = self.lock.lock().await;
        if tokio::fs::try_exists(self.path.as_ref()).await.unwrap_or(false) {
            return Ok(());
        }
        self.write_all(&initial_products()).await?;
        tracing::info!("Products data file created with initial data");
        Ok(())
    }

    pub async fn list(&self) -> Vec<Product> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    pub async fn get(&self, id: i32) -> Option<Product> {
        let _guard = self.lock.lock().await;
        self.read_all().await.into_iter().find(|p| p.id == id)
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<Product, ProductStoreError> {
        let _guard = self.lock.lock().await;
        let mut products = self.read_all().await;

        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product = Product {
            id,
            name: params.name,
            category: params.category,
            price: params.price,
            sale_price: Some(params.sale_price.unwrap_or(params.price)),
            stock: params.stock,
            description: params.description.unwrap_or_default(),
            status: params.status.unwrap_or_else(|| "Selling".to_owned()),
            published: params.published.unwrap_or(true),
            image_url: params.image_url,
            created_at: Some(Utc::now()),
            updated_at: None,
        };

        products.push(product.clone());
        self.write_all(&products).await?;
        Ok(product)
    }

    /// Patches only the provided fields and stamps `updated_at`.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<Product, ProductStoreError> {
        let _guard = self.lock.lock().await;
        let mut products = self.read_all().await;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductStoreError::NotFound)?;

        {
            let product = &mut products[index];
            if let Some(name) = params.name {
                product.name = name;
            }
            if let Some(category) = params.category {
                product.category = category;
            }
            if let Some(price) = params.price {
                product.price = price;
            }
            if let Some(sale_price) = params.sale_price {
                product.sale_price = Some(sale_price);
            }
            if let Some(stock) = params.stock {
                product.stock = stock;
            }
            if let Some(description) = params.description {
                product.description = description;
            }
            if let Some(status) = params.status {
                product.status = status;
            }
            if let Some(published) = params.published {
                product.published = published;
            }
            if let Some(image_url) = params.image_url {
                product.image_url = image_url;
            }
            product.updated_at = Some(Utc::now());
        }

        let updated = products[index].clone();
        self.write_all(&products).await?;
        Ok(updated)
    }

    /// Removes and returns the product.
    pub async fn delete(&self, id: i32) -> Result<Product, ProductStoreError> {
        let _guard = self.lock.lock().await;
        let mut products = self.read_all().await;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductStoreError::NotFound)?;

        let removed = products.remove(index);
        self.write_all(&products).await?;
        Ok(removed)
    }

    /// An unreadable or corrupt file degrades to an empty catalog rather
    /// than failing the request.
    async fn read_all(&self) -> Vec<Product> {
        let bytes = match tokio::fs::read(self.path.as_ref()).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Error reading products: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!("Error reading products: {}", e);
                Vec::new()
            }
        }
    }

    async fn write_all(&self, products: &[Product]) -> Result<(), ProductStoreError> {
        let bytes = serde_json::to_vec_pretty(products)?;
        tokio::fs::write(self.path.as_ref(), bytes).await.map_err(|e| {
            tracing::error!("Error writing products: {}", e);
            ProductStoreError::from(e)
        })?;
        Ok(())
    }
}
