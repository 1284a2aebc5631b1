use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal_macros::dec;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::core::traits::Repository;
use crate::modules::catalog::models::Product;

/// Read access to the product snapshot the engine computes against
#[async_trait]
pub trait ProductRepository: Repository<Product, String> {}

/// In-memory product store.
///
/// The ERP owns the catalog of record; this holds the snapshot fetched for
/// the current pricing/availability pass.
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            products: RwLock::new(products),
        }
    }

    /// Demo catalog used by the server binary and the integration tests
    pub fn seeded() -> Self {
        let products = vec![
            Product::new("FURN-001", "Queen Size Bed", dec!(11433.80), 3, true),
            Product::new("FURN-002", "3-Seater Fabric Sofa", dec!(18999.00), 2, true),
            Product::new("FURN-003", "Engineered Wood Study Table", dec!(4499.00), 5, true),
            Product::new("ELEC-001", "260L Double Door Refrigerator", dec!(25990.00), 2, true),
            Product::new("ELEC-002", "43-inch Smart TV", dec!(31999.00), 1, true),
            Product::new("ELEC-003", "Front Load Washing Machine", dec!(28490.00), 0, true),
            Product::new("DISP-001", "Display-only Showpiece", dec!(7500.00), 4, false),
        ];

        let products = products
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .expect("seed catalog is valid");

        Self::new(products)
    }
}

#[async_trait]
impl Repository<Product, String> for InMemoryProductRepository {
    async fn find_by_id(&self, id: String) -> Result<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>> {
        let mut products: Vec<Product> = self.products.read().await.values().cloned().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(products)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {}
