//! Product queries: category listings with caller-chosen ordering, and
//! the joined overview.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::document::Record;
use crate::error::{Result, StoreError};
use crate::model::{Category, Product, Supplier};
use crate::repo::Repository;
use crate::store::DocumentStore;

/// Sort order for [`Repository::by_category_sorted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Map the query keyword: `"desc"` in any casing sorts descending,
    /// every other value sorts ascending.
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.eq_ignore_ascii_case("desc") {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// A numeric product field a caller may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortField {
    Id,
    Quantity,
    Price,
    CategoryId,
}

/// Registry of sortable product fields, keyed by their document names.
///
/// This is the single source of truth: a name missing here is rejected
/// before any data is read, and adding a sortable field means adding an
/// entry here.
const SORTABLE_FIELDS: &[(&str, ProductSortField)] = &[
    ("id", ProductSortField::Id),
    ("quantity", ProductSortField::Quantity),
    ("price", ProductSortField::Price),
    ("categoryId", ProductSortField::CategoryId),
];

impl ProductSortField {
    /// The recognized field names, in registry order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        SORTABLE_FIELDS.iter().map(|(name, _)| *name)
    }

    // Every sortable field widens to a Decimal so one comparator covers
    // integer and money fields alike.
    fn key(self, product: &Product) -> Decimal {
        match self {
            Self::Id => product.id.into(),
            Self::Quantity => product.quantity.into(),
            Self::Price => product.price,
            Self::CategoryId => product.category_id.into(),
        }
    }
}

impl FromStr for ProductSortField {
    type Err = StoreError;

    fn from_str(name: &str) -> Result<Self> {
        SORTABLE_FIELDS
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, sort_field)| *sort_field)
            .ok_or_else(|| StoreError::unknown_field(Product::KIND, name))
    }
}

/// A product joined to the records that reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOverview {
    pub product: Product,
    /// The product's category, when its reference resolves.
    pub category: Option<Category>,
    /// Every supplier that has an order for this product, deduplicated,
    /// in document order.
    pub suppliers: Vec<Supplier>,
}

impl<S: DocumentStore> Repository<S, Product> {
    /// Products in `category_id`, sorted by the named numeric field.
    ///
    /// `sort_by` must be one of the registered document names (`id`,
    /// `quantity`, `price`, `categoryId`); anything else fails with
    /// [`StoreError::UnknownField`] before any data is read. The sort
    /// is stable, so products with equal keys keep document order.
    pub fn by_category_sorted(
        &self,
        category_id: u32,
        sort_by: &str,
        direction: SortDirection,
    ) -> Result<Vec<Product>> {
        let field: ProductSortField = sort_by.parse()?;

        let document = self.store.load()?;
        let mut products: Vec<Product> = document
            .products
            .iter()
            .filter(|product| product.category_id == category_id)
            .cloned()
            .collect();
        products.sort_by(|a, b| match direction {
            SortDirection::Ascending => field.key(a).cmp(&field.key(b)),
            SortDirection::Descending => field.key(b).cmp(&field.key(a)),
        });
        Ok(products)
    }

    /// Every product joined to its category and its suppliers, in
    /// document order.
    ///
    /// The supplier association goes through orders. References that
    /// resolve to nothing yield `None` or an empty supplier list rather
    /// than an error.
    pub fn overview(&self) -> Result<Vec<ProductOverview>> {
        let document = self.store.load()?;

        let overviews = document
            .products
            .iter()
            .map(|product| {
                let category = document
                    .categories
                    .iter()
                    .find(|category| category.id == product.category_id)
                    .cloned();

                let mut supplier_ids: Vec<u32> = Vec::new();
                for order in &document.orders {
                    if order.product_id == product.id && !supplier_ids.contains(&order.supplier_id)
                    {
                        supplier_ids.push(order.supplier_id);
                    }
                }
                let suppliers = document
                    .suppliers
                    .iter()
                    .filter(|supplier| supplier_ids.contains(&supplier.id))
                    .cloned()
                    .collect();

                ProductOverview {
                    product: product.clone(),
                    category,
                    suppliers,
                }
            })
            .collect();
        Ok(overviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::model::Order;
    use crate::store::memory::MemoryStore;

    fn product(id: u32, name: &str, quantity: u32, price: &str, category_id: u32) -> Product {
        Product {
            id,
            name: name.into(),
            description: String::new(),
            quantity,
            price: price.parse().unwrap(),
            category_id,
        }
    }

    fn repo_with(products: Vec<Product>) -> Repository<MemoryStore, Product> {
        let document = Document {
            products,
            ..Document::default()
        };
        Repository::new(MemoryStore::with_document(document))
    }

    #[test]
    fn registry_resolves_every_documented_name() {
        for name in ["id", "quantity", "price", "categoryId"] {
            assert!(name.parse::<ProductSortField>().is_ok(), "rejected {name}");
        }
        assert_eq!(ProductSortField::names().count(), 4);
    }

    #[test]
    fn unknown_sort_field_is_rejected_by_name() {
        let err = "name".parse::<ProductSortField>().unwrap_err();
        match err {
            StoreError::UnknownField { entity, field } => {
                assert_eq!(entity, "product");
                assert_eq!(field, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sort_field_names_are_exact() {
        // Document names, not Rust ones: the camelCase spelling is the
        // only accepted form.
        assert!("categoryId".parse::<ProductSortField>().is_ok());
        assert!("category_id".parse::<ProductSortField>().is_err());
        assert!("Price".parse::<ProductSortField>().is_err());
    }

    #[test]
    fn direction_keyword_is_desc_or_bust() {
        assert_eq!(SortDirection::from_keyword("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::from_keyword("DESC"), SortDirection::Descending);
        assert_eq!(SortDirection::from_keyword("asc"), SortDirection::Ascending);
        assert_eq!(SortDirection::from_keyword("sideways"), SortDirection::Ascending);
        assert_eq!(SortDirection::from_keyword(""), SortDirection::Ascending);
    }

    #[test]
    fn by_category_keeps_only_that_category() {
        let repo = repo_with(vec![
            product(1, "hammer", 5, "10.00", 1),
            product(2, "nails", 500, "0.05", 2),
            product(3, "saw", 2, "25.00", 1),
        ]);

        let found = repo
            .by_category_sorted(1, "id", SortDirection::Ascending)
            .unwrap();
        let ids: Vec<u32> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn sorts_by_price_in_both_directions() {
        let repo = repo_with(vec![
            product(1, "hammer", 5, "10.00", 1),
            product(2, "saw", 2, "25.00", 1),
            product(3, "chisel", 9, "7.50", 1),
        ]);

        let ascending = repo
            .by_category_sorted(1, "price", SortDirection::Ascending)
            .unwrap();
        let ids: Vec<u32> = ascending.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let descending = repo
            .by_category_sorted(1, "price", SortDirection::Descending)
            .unwrap();
        let ids: Vec<u32> = descending.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn fractional_prices_sort_numerically_not_lexically() {
        // "9.50" < "10.00" numerically even though it is larger as text.
        let repo = repo_with(vec![
            product(1, "a", 0, "10.00", 1),
            product(2, "b", 0, "9.50", 1),
        ]);

        let found = repo
            .by_category_sorted(1, "price", SortDirection::Ascending)
            .unwrap();
        let ids: Vec<u32> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn equal_sort_keys_keep_document_order() {
        let repo = repo_with(vec![
            product(5, "a", 7, "1.00", 1),
            product(2, "b", 7, "1.00", 1),
            product(9, "c", 7, "1.00", 1),
        ]);

        let found = repo
            .by_category_sorted(1, "quantity", SortDirection::Descending)
            .unwrap();
        let ids: Vec<u32> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn unknown_field_fails_before_touching_the_store() {
        let repo = repo_with(vec![product(1, "hammer", 5, "10.00", 1)]);
        let err = repo
            .by_category_sorted(1, "weight", SortDirection::Ascending)
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownField { .. }));
    }

    #[test]
    fn overview_joins_category_and_suppliers() {
        let document = Document {
            categories: vec![Category {
                id: 1,
                name: "Tools".into(),
                description: String::new(),
            }],
            products: vec![product(1, "hammer", 5, "10.00", 1), product(2, "saw", 2, "25.00", 9)],
            suppliers: vec![
                Supplier::new("Acme".into(), String::new(), String::new(), String::new()),
                Supplier::new("Bolt & Co".into(), String::new(), String::new(), String::new()),
            ],
            orders: vec![],
        };
        let mut document = document;
        document.suppliers[0].id = 1;
        document.suppliers[1].id = 2;
        document.orders = vec![
            Order {
                id: 1,
                product_id: 1,
                quantity: 3,
                order_date: "2024-01-05T00:00:00Z".parse().unwrap(),
                supplier_id: 2,
                status: "pending".into(),
            },
            Order {
                id: 2,
                product_id: 1,
                quantity: 4,
                order_date: "2024-01-06T00:00:00Z".parse().unwrap(),
                supplier_id: 2,
                status: "shipped".into(),
            },
            Order {
                id: 3,
                product_id: 1,
                quantity: 1,
                order_date: "2024-01-07T00:00:00Z".parse().unwrap(),
                supplier_id: 1,
                status: "pending".into(),
            },
        ];
        let repo: Repository<MemoryStore, Product> =
            Repository::new(MemoryStore::with_document(document));

        let overviews = repo.overview().unwrap();
        assert_eq!(overviews.len(), 2);

        let hammer = &overviews[0];
        assert_eq!(hammer.category.as_ref().unwrap().name, "Tools");
        let names: Vec<&str> = hammer.suppliers.iter().map(|s| s.name.as_str()).collect();
        // Deduplicated, document order.
        assert_eq!(names, vec!["Acme", "Bolt & Co"]);

        // Dangling category, no orders.
        let saw = &overviews[1];
        assert!(saw.category.is_none());
        assert!(saw.suppliers.is_empty());
    }
}
