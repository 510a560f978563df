//! Supplier queries: both walk the orders collection, since suppliers
//! and products are only associated through orders.

use std::collections::HashSet;

use crate::error::Result;
use crate::model::Supplier;
use crate::repo::Repository;
use crate::store::DocumentStore;

impl<S: DocumentStore> Repository<S, Supplier> {
    /// Suppliers with at least one order of `min_quantity` units or
    /// more. Each qualifying supplier appears once, in document order.
    pub fn with_order_quantity_at_least(&self, min_quantity: u32) -> Result<Vec<Supplier>> {
        let document = self.store.load()?;

        let qualifying: HashSet<u32> = document
            .orders
            .iter()
            .filter(|order| order.quantity >= min_quantity)
            .map(|order| order.supplier_id)
            .collect();

        Ok(document
            .suppliers
            .iter()
            .filter(|supplier| qualifying.contains(&supplier.id))
            .cloned()
            .collect())
    }

    /// Suppliers associated, through at least one order, with a product
    /// whose stock is at least `min_stock` units.
    ///
    /// An order whose product reference resolves to nothing contributes
    /// no match. Results are deduplicated and in document order.
    pub fn with_stocked_products(&self, min_stock: u32) -> Result<Vec<Supplier>> {
        let document = self.store.load()?;

        let stocked: HashSet<u32> = document
            .products
            .iter()
            .filter(|product| product.quantity >= min_stock)
            .map(|product| product.id)
            .collect();
        let qualifying: HashSet<u32> = document
            .orders
            .iter()
            .filter(|order| stocked.contains(&order.product_id))
            .map(|order| order.supplier_id)
            .collect();

        Ok(document
            .suppliers
            .iter()
            .filter(|supplier| qualifying.contains(&supplier.id))
            .cloned()
            .collect())
    }
}
