//! Built-in demo dataset (演示数据)
//!
//! A small, deliberately messy set of orders: every lifecycle state is
//! represented, and some totals do not add up from their line items,
//! the way real feeds look once fees and discounts get involved.

use shared::models::BranchInfo;
use shared::order::{Order, OrderItem, OrderStatus, PaymentStatus};
use shared::util::parse_display_millis;

const BRANCH: &str = "Downtown Branch";

/// The built-in demo orders.
pub fn demo_orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            order_id: "ORD-001".to_string(),
            customer_name: "John Doe".to_string(),
            customer_phone: "+1234567890".to_string(),
            customer_address: "123 Main St, Downtown".to_string(),
            items: vec![item("Burger", 2, 8.99), item("Fries", 1, 3.99)],
            total: 25.99,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Paid,
            payment_method: "Credit Card".to_string(),
            branch: BRANCH.to_string(),
            timestamp: millis("2025-11-25 11:30"),
            special_instructions: Some("Extra ketchup please".to_string()),
            delivery_time: Some("30-40 mins".to_string()),
        },
        Order {
            id: 2,
            order_id: "ORD-002".to_string(),
            customer_name: "Jane Smith".to_string(),
            customer_phone: "+1234567891".to_string(),
            customer_address: "456 Oak Ave, City Center".to_string(),
            items: vec![item("Pizza", 1, 24.99), item("Coke", 2, 2.50)],
            total: 32.50,
            status: OrderStatus::Accepted,
            payment_status: PaymentStatus::Paid,
            payment_method: "Digital Wallet".to_string(),
            branch: BRANCH.to_string(),
            timestamp: millis("2025-11-24 15:20"),
            special_instructions: Some("No onions".to_string()),
            delivery_time: Some("25-35 mins".to_string()),
        },
        Order {
            id: 3,
            order_id: "ORD-003".to_string(),
            customer_name: "Mike Johnson".to_string(),
            customer_phone: "+1234567892".to_string(),
            customer_address: "789 Pine Rd, Westside".to_string(),
            items: vec![item("Tacos", 3, 4.99), item("Salad", 1, 7.99)],
            total: 18.75,
            status: OrderStatus::Delivered,
            payment_status: PaymentStatus::Unpaid,
            payment_method: "Cash".to_string(),
            branch: BRANCH.to_string(),
            timestamp: millis("2025-11-20 13:45"),
            special_instructions: Some("Extra spicy".to_string()),
            delivery_time: Some("20-30 mins".to_string()),
        },
        Order {
            id: 4,
            order_id: "ORD-004".to_string(),
            customer_name: "Sarah Wilson".to_string(),
            customer_phone: "+1234567893".to_string(),
            customer_address: "321 Elm St, Northgate".to_string(),
            items: vec![item("Pasta", 1, 18.99), item("Garlic Bread", 1, 4.00)],
            total: 22.99,
            status: OrderStatus::Rejected,
            payment_status: PaymentStatus::Refunded,
            payment_method: "Debit Card".to_string(),
            branch: BRANCH.to_string(),
            timestamp: millis("2025-10-30 16:10"),
            special_instructions: Some("Gluten-free pasta".to_string()),
            delivery_time: Some("35-45 mins".to_string()),
        },
        Order {
            id: 5,
            order_id: "ORD-005".to_string(),
            customer_name: "Ahmed Hassan".to_string(),
            customer_phone: "+1234567894".to_string(),
            customer_address: "654 Maple Dr, South End".to_string(),
            items: vec![
                item("Chicken Burger", 1, 12.99),
                item("Onion Rings", 1, 5.99),
                item("Milkshake", 1, 6.99),
            ],
            total: 25.97,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Paid,
            payment_method: "Credit Card".to_string(),
            branch: BRANCH.to_string(),
            timestamp: millis("2025-11-30 14:15"),
            special_instructions: Some("Well done burger".to_string()),
            delivery_time: Some("40-50 mins".to_string()),
        },
    ]
}

/// The built-in demo branch profile.
pub fn demo_branch() -> BranchInfo {
    BranchInfo {
        name: BRANCH.to_string(),
        location: "123 Main Street, City Center".to_string(),
        admin_name: "Robert Brown".to_string(),
        contact: "+1 (555) 123-4567".to_string(),
        email: "robert.brown@restaurant.com".to_string(),
        total_staff: 15,
        established_year: 2018,
        deliverable_areas: vec![
            "City Center".to_string(),
            "East Side".to_string(),
            "West Park".to_string(),
            "North Hills".to_string(),
        ],
        updated_at: None,
    }
}

fn item(name: &str, quantity: i32, price: f64) -> OrderItem {
    OrderItem {
        name: name.to_string(),
        quantity,
        price,
    }
}

fn millis(stamp: &str) -> i64 {
    parse_display_millis(stamp).unwrap_or_default()
}
