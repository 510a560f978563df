use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "File-backed inventory of categories, products, suppliers and orders")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the inventory document
    #[arg(long, global = true, default_value = "stockroom.json")]
    pub data: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCmd),

    /// Manage products
    #[command(subcommand)]
    Product(ProductCmd),

    /// Manage suppliers
    #[command(subcommand)]
    Supplier(SupplierCmd),

    /// Manage orders
    #[command(subcommand)]
    Order(OrderCmd),

    /// Check the document for duplicate ids and dangling references
    Audit,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCmd {
    /// List every category
    #[command(alias = "ls")]
    List,

    /// Show one category
    Show { id: u32 },

    /// Add a category and print its assigned id
    Add {
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Overwrite every field of a category
    Set {
        id: u32,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Remove a category
    #[command(alias = "rm")]
    Remove { id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum ProductCmd {
    /// List every product
    #[command(alias = "ls")]
    List,

    /// Show one product
    Show { id: u32 },

    /// Add a product and print its assigned id
    Add {
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Units in stock
        #[arg(long, default_value_t = 0)]
        quantity: u32,

        /// Unit price, e.g. 19.99
        #[arg(long)]
        price: Decimal,

        /// Id of the category this product belongs to
        #[arg(long)]
        category: u32,
    },

    /// Overwrite every field of a product
    Set {
        id: u32,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        quantity: u32,

        #[arg(long)]
        price: Decimal,

        #[arg(long)]
        category: u32,
    },

    /// Remove a product
    #[command(alias = "rm")]
    Remove { id: u32 },

    /// Products in a category, sorted by a numeric field
    InCategory {
        category: u32,

        /// Field to sort by: id, quantity, price or categoryId
        #[arg(long, default_value = "id")]
        sort: String,

        /// Sort order: desc for descending, anything else ascending
        #[arg(long, default_value = "asc")]
        order: String,
    },

    /// Every product with its category and suppliers
    Overview,
}

#[derive(Subcommand, Debug)]
pub enum SupplierCmd {
    /// List every supplier
    #[command(alias = "ls")]
    List,

    /// Show one supplier
    Show { id: u32 },

    /// Add a supplier and print its assigned id
    Add {
        name: String,

        #[arg(long, default_value = "")]
        contact: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Overwrite every field of a supplier
    Set {
        id: u32,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        contact: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Remove a supplier
    #[command(alias = "rm")]
    Remove { id: u32 },

    /// Suppliers with at least one order of a minimum quantity
    ByOrderQty {
        /// Minimum order quantity, inclusive
        #[arg(long)]
        min: u32,
    },

    /// Suppliers whose ordered products hold a minimum stock
    WithStock {
        /// Minimum units in stock, inclusive
        #[arg(long)]
        min: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderCmd {
    /// List every order
    #[command(alias = "ls")]
    List,

    /// Show one order
    Show { id: u32 },

    /// Add an order and print its assigned id
    Add {
        /// Id of the ordered product
        #[arg(long)]
        product: u32,

        /// Units ordered
        #[arg(long)]
        quantity: u32,

        /// Order date as RFC 3339 (defaults to now)
        #[arg(long)]
        date: Option<DateTime<Utc>>,

        /// Id of the supplier
        #[arg(long)]
        supplier: u32,

        #[arg(long, default_value = "pending")]
        status: String,
    },

    /// Overwrite every field of an order
    Set {
        id: u32,

        #[arg(long)]
        product: u32,

        #[arg(long)]
        quantity: u32,

        /// Order date as RFC 3339
        #[arg(long)]
        date: DateTime<Utc>,

        #[arg(long)]
        supplier: u32,

        #[arg(long)]
        status: String,
    },

    /// Remove an order
    #[command(alias = "rm")]
    Remove { id: u32 },

    /// Orders for one supplier with an exact status
    BySupplier {
        supplier: u32,

        /// Status to match, case-sensitively
        #[arg(long)]
        status: String,
    },

    /// Orders dated within a range, inclusive on both ends
    Between {
        /// Range start as RFC 3339
        start: DateTime<Utc>,

        /// Range end as RFC 3339
        end: DateTime<Utc>,
    },

    /// Orders of products that were ordered more than a number of times
    Frequent {
        /// Order count a product must exceed to qualify
        #[arg(long, default_value_t = 5)]
        min: usize,
    },
}
