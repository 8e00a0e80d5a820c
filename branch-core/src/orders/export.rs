//! CSV export of order lists
//!
//! Takes whatever list the view engine produced; filtering happens
//! upstream, this module only renders.

use shared::order::Order;
use shared::util::format_millis;

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 9] = [
    "Order ID",
    "Customer Name",
    "Customer Phone",
    "Items",
    "Total Amount",
    "Payment Status",
    "Payment Method",
    "Order Status",
    "Timestamp",
];

/// Render `orders` as CSV, headers first, one row per order.
pub fn orders_to_csv(orders: &[Order]) -> String {
    let mut lines = Vec::with_capacity(orders.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for order in orders {
        let row = [
            csv_field(&order.order_id),
            csv_field(&order.customer_name),
            csv_field(&order.customer_phone),
            csv_field(&order.item_summary()),
            format!("{:.2}", order.total),
            order.payment_status.as_str().to_string(),
            csv_field(&order.payment_method),
            order.status.as_str().to_string(),
            csv_field(&format_millis(order.timestamp)),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Quote a field when it contains a comma, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
