//! Order queries: status and date filters, plus the order-frequency
//! report.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::Order;
use crate::repo::Repository;
use crate::store::DocumentStore;

impl<S: DocumentStore> Repository<S, Order> {
    /// Orders placed with `supplier_id` whose status equals `status`
    /// exactly. Status matching is case-sensitive; `"Pending"` and
    /// `"pending"` are different statuses.
    pub fn by_supplier_and_status(&self, supplier_id: u32, status: &str) -> Result<Vec<Order>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|order| order.supplier_id == supplier_id && order.status == status)
            .collect())
    }

    /// Orders dated within `[start, end]`, inclusive on both ends.
    pub fn by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Order>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|order| order.order_date >= start && order.order_date <= end)
            .collect())
    }

    /// The orders of every product that was ordered more than `times`
    /// times.
    ///
    /// Note the result is orders, not products: the order records of
    /// each qualifying product, concatenated. Products appear in the
    /// order their first order does, and each product's orders keep
    /// document order. A product with exactly `times` orders does not
    /// qualify.
    pub fn for_products_ordered_more_than(&self, times: usize) -> Result<Vec<Order>> {
        let mut groups: Vec<(u32, Vec<Order>)> = Vec::new();
        for order in self.list()? {
            match groups
                .iter_mut()
                .find(|(product_id, _)| *product_id == order.product_id)
            {
                Some((_, orders)) => orders.push(order),
                None => groups.push((order.product_id, vec![order])),
            }
        }

        Ok(groups
            .into_iter()
            .filter(|(_, orders)| orders.len() > times)
            .flat_map(|(_, orders)| orders)
            .collect())
    }
}
