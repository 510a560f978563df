//! The inventory document: one hierarchical value holding every record.
//!
//! The whole document is the unit of persistence. Stores load and save
//! it as a piece; repositories pick one collection out of it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Category, Order, Product, Supplier};

/// Everything in the store. An absent container in the file reads back
/// as an empty collection, and the default value is the skeleton a
/// fresh store starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// One record kind as it lives inside the [`Document`].
///
/// Gives the generic repository uniform access to a record's id and to
/// the collection it belongs to.
pub trait Record: Clone {
    /// Singular kind name, used in log lines and error messages.
    const KIND: &'static str;

    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);

    fn records(document: &Document) -> &[Self];
    fn records_mut(document: &mut Document) -> &mut Vec<Self>;
}

impl Record for Category {
    const KIND: &'static str = "category";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn records(document: &Document) -> &[Self] {
        &document.categories
    }

    fn records_mut(document: &mut Document) -> &mut Vec<Self> {
        &mut document.categories
    }
}

impl Record for Product {
    const KIND: &'static str = "product";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn records(document: &Document) -> &[Self] {
        &document.products
    }

    fn records_mut(document: &mut Document) -> &mut Vec<Self> {
        &mut document.products
    }
}

impl Record for Supplier {
    const KIND: &'static str = "supplier";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn records(document: &Document) -> &[Self] {
        &document.suppliers
    }

    fn records_mut(document: &mut Document) -> &mut Vec<Self> {
        &mut document.suppliers
    }
}

impl Record for Order {
    const KIND: &'static str = "order";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn records(document: &Document) -> &[Self] {
        &document.orders
    }

    fn records_mut(document: &mut Document) -> &mut Vec<Self> {
        &mut document.orders
    }
}

/// A cross-collection reference that resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRef {
    /// Kind of the record holding the reference.
    pub kind: &'static str,
    /// Id of the record holding the reference.
    pub id: u32,
    /// Document name of the referencing field.
    pub field: &'static str,
    /// The id that does not exist.
    pub target: u32,
}

/// Findings from a consistency pass over a document.
///
/// Nothing here is fatal to the store itself; deletes do not cascade,
/// so dangling references are an expected state the caller may want to
/// surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditReport {
    /// Ids carried by more than one record of the same kind, one entry
    /// per extra occurrence.
    pub duplicate_ids: Vec<(&'static str, u32)>,
    pub dangling_refs: Vec<DanglingRef>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty() && self.dangling_refs.is_empty()
    }
}

impl Document {
    /// Check every collection for duplicate ids and every cross-record
    /// reference for a live target. Reporting only; the document is not
    /// modified.
    pub fn audit(&self) -> AuditReport {
        let mut report = AuditReport::default();

        scan_duplicates(&self.categories, &mut report);
        scan_duplicates(&self.products, &mut report);
        scan_duplicates(&self.suppliers, &mut report);
        scan_duplicates(&self.orders, &mut report);

        let category_ids: HashSet<u32> = self.categories.iter().map(|c| c.id).collect();
        let product_ids: HashSet<u32> = self.products.iter().map(|p| p.id).collect();
        let supplier_ids: HashSet<u32> = self.suppliers.iter().map(|s| s.id).collect();

        for product in &self.products {
            if !category_ids.contains(&product.category_id) {
                report.dangling_refs.push(DanglingRef {
                    kind: Product::KIND,
                    id: product.id,
                    field: "categoryId",
                    target: product.category_id,
                });
            }
        }
        for order in &self.orders {
            if !product_ids.contains(&order.product_id) {
                report.dangling_refs.push(DanglingRef {
                    kind: Order::KIND,
                    id: order.id,
                    field: "productId",
                    target: order.product_id,
                });
            }
            if !supplier_ids.contains(&order.supplier_id) {
                report.dangling_refs.push(DanglingRef {
                    kind: Order::KIND,
                    id: order.id,
                    field: "supplierId",
                    target: order.supplier_id,
                });
            }
        }

        report
    }
}

fn scan_duplicates<T: Record>(records: &[T], report: &mut AuditReport) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            report.duplicate_ids.push((T::KIND, record.id()));
        }
    }
}
