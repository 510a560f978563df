use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use stockroom::api::{SortDirection, Warehouse};
use stockroom::error::StoreError;
use stockroom::model::{Category, Order, Product, Supplier};
use stockroom::store::fs::FileStore;
use tempfile::TempDir;

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    (dir, path)
}

fn date(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// Categories, products, suppliers and a handful of orders.
fn seed(warehouse: &Warehouse<FileStore>) {
    let tools = warehouse
        .categories()
        .create(Category::new("Tools".into(), "Hand tools".into()))
        .unwrap();
    let fasteners = warehouse
        .categories()
        .create(Category::new("Fasteners".into(), String::new()))
        .unwrap();

    let hammer = warehouse
        .products()
        .create(Product::new(
            "Hammer".into(),
            String::new(),
            80,
            "12.50".parse().unwrap(),
            tools,
        ))
        .unwrap();
    let saw = warehouse
        .products()
        .create(Product::new(
            "Saw".into(),
            String::new(),
            3,
            "25.00".parse().unwrap(),
            tools,
        ))
        .unwrap();
    let nails = warehouse
        .products()
        .create(Product::new(
            "Nails".into(),
            String::new(),
            1500,
            "0.05".parse().unwrap(),
            fasteners,
        ))
        .unwrap();

    let acme = warehouse
        .suppliers()
        .create(Supplier::new(
            "Acme".into(),
            "Jo Smith".into(),
            "jo@acme.example".into(),
            "555-0100".into(),
        ))
        .unwrap();
    let bolt = warehouse
        .suppliers()
        .create(Supplier::new(
            "Bolt & Co".into(),
            String::new(),
            String::new(),
            String::new(),
        ))
        .unwrap();

    for (product, quantity, day, supplier, status) in [
        (hammer, 10, "2024-03-01T09:00:00Z", acme, "pending"),
        (hammer, 5, "2024-03-10T09:00:00Z", acme, "shipped"),
        (saw, 2, "2024-03-15T09:00:00Z", bolt, "pending"),
        (nails, 500, "2024-04-02T09:00:00Z", bolt, "pending"),
        (hammer, 25, "2024-04-05T09:00:00Z", bolt, "pending"),
    ] {
        warehouse
            .orders()
            .create(Order::new(
                product,
                quantity,
                date(day),
                supplier,
                status.into(),
            ))
            .unwrap();
    }
}

#[test]
fn test_warehouse_data_survives_reopen() {
    let (_dir, path) = setup();
    {
        let warehouse = Warehouse::open(&path).unwrap();
        seed(&warehouse);
    }

    let warehouse = Warehouse::open(&path).unwrap();
    assert_eq!(warehouse.categories().list().unwrap().len(), 2);
    assert_eq!(warehouse.products().list().unwrap().len(), 3);
    assert_eq!(warehouse.suppliers().list().unwrap().len(), 2);
    assert_eq!(warehouse.orders().list().unwrap().len(), 5);

    let hammer = warehouse.products().get(1).unwrap().unwrap();
    assert_eq!(hammer.name, "Hammer");
    assert_eq!(hammer.price, "12.50".parse().unwrap());
    assert!(warehouse.audit().unwrap().is_clean());
}

#[test]
fn test_warehouse_queries_work_against_the_file() {
    let (_dir, path) = setup();
    let warehouse = Warehouse::open(&path).unwrap();
    seed(&warehouse);

    // Orders for Acme still pending.
    let pending = warehouse.orders().by_supplier_and_status(1, "pending").unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].quantity, 10);

    // March, inclusive of both endpoints.
    let march = warehouse
        .orders()
        .by_date_range(date("2024-03-01T09:00:00Z"), date("2024-03-15T09:00:00Z"))
        .unwrap();
    assert_eq!(march.len(), 3);

    // Hammer is the only product ordered more than twice.
    let frequent = warehouse.orders().for_products_ordered_more_than(2).unwrap();
    assert_eq!(frequent.len(), 3);
    assert!(frequent.iter().all(|o| o.product_id == 1));

    // Tools by price, descending: saw before hammer.
    let tools = warehouse
        .products()
        .by_category_sorted(1, "price", SortDirection::Descending)
        .unwrap();
    let names: Vec<&str> = tools.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Saw", "Hammer"]);

    // Only Bolt & Co has an order of 25+ units.
    let bulk = warehouse.suppliers().with_order_quantity_at_least(25).unwrap();
    let names: Vec<&str> = bulk.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Bolt & Co"]);

    // Products with 1000+ units in stock lead back to Bolt & Co alone.
    let stocked = warehouse.suppliers().with_stocked_products(1000).unwrap();
    let names: Vec<&str> = stocked.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Bolt & Co"]);
}

#[test]
fn test_warehouse_unknown_sort_field_reaches_the_caller() {
    let (_dir, path) = setup();
    let warehouse = Warehouse::open(&path).unwrap();
    seed(&warehouse);

    let err = warehouse
        .products()
        .by_category_sorted(1, "name", SortDirection::Ascending)
        .unwrap_err();
    match err {
        StoreError::UnknownField { entity, field } => {
            assert_eq!(entity, "product");
            assert_eq!(field, "name");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_warehouse_failed_update_keeps_file_bytes_identical() {
    let (_dir, path) = setup();
    let warehouse = Warehouse::open(&path).unwrap();
    seed(&warehouse);
    let before = fs::read(&path).unwrap();

    let mut ghost = Product::new("Ghost".into(), String::new(), 1, "9.99".parse().unwrap(), 1);
    ghost.id = 999;
    assert!(!warehouse.products().update(&ghost).unwrap());
    assert!(!warehouse.products().delete(999).unwrap());

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_warehouse_ids_are_reused_across_reopen() {
    let (_dir, path) = setup();
    {
        let warehouse = Warehouse::open(&path).unwrap();
        for name in ["a", "b", "c"] {
            warehouse
                .categories()
                .create(Category::new(name.into(), String::new()))
                .unwrap();
        }
        assert!(warehouse.categories().delete(3).unwrap());
    }

    // Max + 1 is computed from what the file holds now.
    let warehouse = Warehouse::open(&path).unwrap();
    let id = warehouse
        .categories()
        .create(Category::new("again".into(), String::new()))
        .unwrap();
    assert_eq!(id, 3);
}

#[test]
fn test_warehouse_document_stays_readable_as_plain_json() {
    let (_dir, path) = setup();
    let warehouse = Warehouse::open(&path).unwrap();
    seed(&warehouse);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    let product = &raw["products"][0];
    assert_eq!(product["name"], "Hammer");
    assert_eq!(product["categoryId"], 1);
    // Money is a decimal string, not a float.
    assert_eq!(product["price"], "12.50");

    let order = &raw["orders"][0];
    assert_eq!(order["productId"], 1);
    assert_eq!(order["supplierId"], 1);
    // Timestamps round-trip as RFC 3339 text.
    let stamp = order["orderDate"].as_str().unwrap();
    assert_eq!(date(stamp), date("2024-03-01T09:00:00Z"));
}

#[test]
fn test_warehouse_audit_reports_dangling_after_delete() {
    let (_dir, path) = setup();
    let warehouse = Warehouse::open(&path).unwrap();
    seed(&warehouse);
    assert!(warehouse.audit().unwrap().is_clean());

    // Deleting a product does not cascade to its orders.
    assert!(warehouse.products().delete(1).unwrap());

    let report = warehouse.audit().unwrap();
    assert!(!report.is_clean());
    assert!(report
        .dangling_refs
        .iter()
        .all(|r| r.field == "productId" && r.target == 1));
    assert_eq!(report.dangling_refs.len(), 3);
}
