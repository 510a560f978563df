use chrono::Utc;
use clap::Parser;
use stockroom::api::{ProductSortField, SortDirection, Warehouse};
use stockroom::error::{Result, StoreError};
use stockroom::model::{Category, Order, Product, Supplier};
use stockroom::store::fs::FileStore;

mod args;
use args::{CategoryCmd, Cli, Commands, OrderCmd, ProductCmd, SupplierCmd};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let StoreError::UnknownField { .. } = e {
            let fields: Vec<&str> = ProductSortField::names().collect();
            eprintln!("Sortable fields: {}", fields.join(", "));
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let warehouse = Warehouse::open(&cli.data)?;

    match cli.command {
        Commands::Category(cmd) => handle_category(&warehouse, cmd),
        Commands::Product(cmd) => handle_product(&warehouse, cmd),
        Commands::Supplier(cmd) => handle_supplier(&warehouse, cmd),
        Commands::Order(cmd) => handle_order(&warehouse, cmd),
        Commands::Audit => handle_audit(&warehouse),
    }
}

fn handle_category(warehouse: &Warehouse<FileStore>, cmd: CategoryCmd) -> Result<()> {
    let categories = warehouse.categories();
    match cmd {
        CategoryCmd::List => {
            for category in categories.list()? {
                print_category(&category);
            }
            Ok(())
        }
        CategoryCmd::Show { id } => match categories.get(id)? {
            Some(category) => {
                print_category(&category);
                Ok(())
            }
            None => not_found("category", id),
        },
        CategoryCmd::Add { name, description } => {
            let id = categories.create(Category::new(name, description))?;
            println!("created category {}", id);
            Ok(())
        }
        CategoryCmd::Set {
            id,
            name,
            description,
        } => {
            let mut category = Category::new(name, description);
            category.id = id;
            if categories.update(&category)? {
                println!("updated category {}", id);
                Ok(())
            } else {
                not_found("category", id)
            }
        }
        CategoryCmd::Remove { id } => {
            if categories.delete(id)? {
                println!("removed category {}", id);
                Ok(())
            } else {
                not_found("category", id)
            }
        }
    }
}

fn handle_product(warehouse: &Warehouse<FileStore>, cmd: ProductCmd) -> Result<()> {
    let products = warehouse.products();
    match cmd {
        ProductCmd::List => {
            for product in products.list()? {
                print_product(&product);
            }
            Ok(())
        }
        ProductCmd::Show { id } => match products.get(id)? {
            Some(product) => {
                print_product(&product);
                Ok(())
            }
            None => not_found("product", id),
        },
        ProductCmd::Add {
            name,
            description,
            quantity,
            price,
            category,
        } => {
            let id = products.create(Product::new(name, description, quantity, price, category))?;
            println!("created product {}", id);
            Ok(())
        }
        ProductCmd::Set {
            id,
            name,
            description,
            quantity,
            price,
            category,
        } => {
            let mut product = Product::new(name, description, quantity, price, category);
            product.id = id;
            if products.update(&product)? {
                println!("updated product {}", id);
                Ok(())
            } else {
                not_found("product", id)
            }
        }
        ProductCmd::Remove { id } => {
            if products.delete(id)? {
                println!("removed product {}", id);
                Ok(())
            } else {
                not_found("product", id)
            }
        }
        ProductCmd::InCategory {
            category,
            sort,
            order,
        } => {
            let direction = SortDirection::from_keyword(&order);
            for product in products.by_category_sorted(category, &sort, direction)? {
                print_product(&product);
            }
            Ok(())
        }
        ProductCmd::Overview => {
            for overview in products.overview()? {
                let category = overview
                    .category
                    .map(|c| c.name)
                    .unwrap_or_else(|| "-".into());
                let suppliers = if overview.suppliers.is_empty() {
                    "-".to_string()
                } else {
                    let names: Vec<&str> =
                        overview.suppliers.iter().map(|s| s.name.as_str()).collect();
                    names.join(", ")
                };
                println!(
                    "{:>4}  {:<20} {:<16} {}",
                    overview.product.id, overview.product.name, category, suppliers
                );
            }
            Ok(())
        }
    }
}

fn handle_supplier(warehouse: &Warehouse<FileStore>, cmd: SupplierCmd) -> Result<()> {
    let suppliers = warehouse.suppliers();
    match cmd {
        SupplierCmd::List => {
            for supplier in suppliers.list()? {
                print_supplier(&supplier);
            }
            Ok(())
        }
        SupplierCmd::Show { id } => match suppliers.get(id)? {
            Some(supplier) => {
                print_supplier(&supplier);
                Ok(())
            }
            None => not_found("supplier", id),
        },
        SupplierCmd::Add {
            name,
            contact,
            email,
            phone,
        } => {
            let id = suppliers.create(Supplier::new(name, contact, email, phone))?;
            println!("created supplier {}", id);
            Ok(())
        }
        SupplierCmd::Set {
            id,
            name,
            contact,
            email,
            phone,
        } => {
            let mut supplier = Supplier::new(name, contact, email, phone);
            supplier.id = id;
            if suppliers.update(&supplier)? {
                println!("updated supplier {}", id);
                Ok(())
            } else {
                not_found("supplier", id)
            }
        }
        SupplierCmd::Remove { id } => {
            if suppliers.delete(id)? {
                println!("removed supplier {}", id);
                Ok(())
            } else {
                not_found("supplier", id)
            }
        }
        SupplierCmd::ByOrderQty { min } => {
            for supplier in suppliers.with_order_quantity_at_least(min)? {
                print_supplier(&supplier);
            }
            Ok(())
        }
        SupplierCmd::WithStock { min } => {
            for supplier in suppliers.with_stocked_products(min)? {
                print_supplier(&supplier);
            }
            Ok(())
        }
    }
}

fn handle_order(warehouse: &Warehouse<FileStore>, cmd: OrderCmd) -> Result<()> {
    let orders = warehouse.orders();
    match cmd {
        OrderCmd::List => {
            for order in orders.list()? {
                print_order(&order);
            }
            Ok(())
        }
        OrderCmd::Show { id } => match orders.get(id)? {
            Some(order) => {
                print_order(&order);
                Ok(())
            }
            None => not_found("order", id),
        },
        OrderCmd::Add {
            product,
            quantity,
            date,
            supplier,
            status,
        } => {
            let date = date.unwrap_or_else(Utc::now);
            let id = orders.create(Order::new(product, quantity, date, supplier, status))?;
            println!("created order {}", id);
            Ok(())
        }
        OrderCmd::Set {
            id,
            product,
            quantity,
            date,
            supplier,
            status,
        } => {
            let mut order = Order::new(product, quantity, date, supplier, status);
            order.id = id;
            if orders.update(&order)? {
                println!("updated order {}", id);
                Ok(())
            } else {
                not_found("order", id)
            }
        }
        OrderCmd::Remove { id } => {
            if orders.delete(id)? {
                println!("removed order {}", id);
                Ok(())
            } else {
                not_found("order", id)
            }
        }
        OrderCmd::BySupplier { supplier, status } => {
            for order in orders.by_supplier_and_status(supplier, &status)? {
                print_order(&order);
            }
            Ok(())
        }
        OrderCmd::Between { start, end } => {
            for order in orders.by_date_range(start, end)? {
                print_order(&order);
            }
            Ok(())
        }
        OrderCmd::Frequent { min } => {
            for order in orders.for_products_ordered_more_than(min)? {
                print_order(&order);
            }
            Ok(())
        }
    }
}

fn handle_audit(warehouse: &Warehouse<FileStore>) -> Result<()> {
    let report = warehouse.audit()?;
    if report.is_clean() {
        println!("document is consistent");
        return Ok(());
    }
    for (kind, id) in &report.duplicate_ids {
        println!("duplicate id: {} {}", kind, id);
    }
    for dangling in &report.dangling_refs {
        println!(
            "dangling reference: {} {} field {} -> missing id {}",
            dangling.kind, dangling.id, dangling.field, dangling.target
        );
    }
    std::process::exit(1)
}

// Absence is a normal repository result, but for the CLI the command
// still failed: say so and exit nonzero.
fn not_found(kind: &str, id: u32) -> Result<()> {
    eprintln!("no {} with id {}", kind, id);
    std::process::exit(1)
}

fn print_category(category: &Category) {
    println!(
        "{:>4}  {:<20} {}",
        category.id, category.name, category.description
    );
}

fn print_product(product: &Product) {
    println!(
        "{:>4}  {:<20} {:>6} in stock at {:>10}  category {}",
        product.id, product.name, product.quantity, product.price, product.category_id
    );
}

fn print_supplier(supplier: &Supplier) {
    println!(
        "{:>4}  {:<20} {:<20} {:<24} {}",
        supplier.id, supplier.name, supplier.contact_person, supplier.email, supplier.phone
    );
}

fn print_order(order: &Order) {
    println!(
        "{:>4}  product {:<4} x {:<5} from supplier {:<4} {}  {}",
        order.id,
        order.product_id,
        order.quantity,
        order.supplier_id,
        order.order_date.to_rfc3339(),
        order.status
    );
}
