//! The four record types stored in the inventory document.
//!
//! Field names are renamed to camelCase on disk so the file stays
//! readable by the other tools that share it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Units currently in stock.
    pub quantity: u32,
    pub price: Decimal,
    pub category_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub product_id: u32,
    /// Units ordered, distinct from the product's stock level.
    pub quantity: u32,
    pub order_date: DateTime<Utc>,
    pub supplier_id: u32,
    pub status: String,
}

impl Category {
    // id 0 is a placeholder until the repository assigns a real one.
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: 0,
            name,
            description,
        }
    }
}

impl Product {
    pub fn new(
        name: String,
        description: String,
        quantity: u32,
        price: Decimal,
        category_id: u32,
    ) -> Self {
        Self {
            id: 0,
            name,
            description,
            quantity,
            price,
            category_id,
        }
    }
}

impl Supplier {
    pub fn new(name: String, contact_person: String, email: String, phone: String) -> Self {
        Self {
            id: 0,
            name,
            contact_person,
            email,
            phone,
        }
    }
}

impl Order {
    pub fn new(
        product_id: u32,
        quantity: u32,
        order_date: DateTime<Utc>,
        supplier_id: u32,
        status: String,
    ) -> Self {
        Self {
            id: 0,
            product_id,
            quantity,
            order_date,
            supplier_id,
            status,
        }
    }
}
