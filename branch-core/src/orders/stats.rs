//! Aggregation engine (统计聚合)
//!
//! Pure derivations over an order snapshot. Money accumulates in
//! `Decimal` and only collapses to `f64` at the edge, rounded to cents.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use shared::models::{DashboardStats, ItemSales, StatusCounts};
use shared::order::{Order, OrderStatus, TimeRange};
use std::collections::{HashMap, HashSet};

use super::view;

/// Monetary outputs round to 2 decimal places, half-up.
const DECIMAL_PLACES: u32 = 2;

#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Orders per lifecycle state.
pub fn count_by_status(orders: &[Order]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for order in orders {
        match order.status {
            OrderStatus::Pending => counts.pending += 1,
            OrderStatus::Accepted => counts.accepted += 1,
            OrderStatus::Delivered => counts.delivered += 1,
            OrderStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}

/// Revenue across delivered orders, rounded to cents.
///
/// Pending and rejected orders contribute nothing, whatever their
/// payment state says.
pub fn total_revenue(orders: &[Order]) -> f64 {
    to_f64(revenue_decimal(orders))
}

fn revenue_decimal(orders: &[Order]) -> Decimal {
    let mut sum = Decimal::ZERO;
    for order in orders {
        if order.is_delivered() {
            sum += to_decimal(order.total);
        }
    }
    sum
}

/// Mean delivered order value; 0 when nothing has been delivered yet.
pub fn average_order_value(orders: &[Order]) -> f64 {
    let delivered = orders.iter().filter(|order| order.is_delivered()).count();
    if delivered == 0 {
        return 0.0;
    }
    to_f64(revenue_decimal(orders) / Decimal::from(delivered))
}

/// Distinct customers by phone number.
///
/// The phone is the identity key; names collide too easily.
pub fn unique_customer_count(orders: &[Order]) -> usize {
    orders
        .iter()
        .map(|order| order.customer_phone.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Best sellers across delivered orders.
///
/// Sorted by units sold with the item name breaking ties, truncated to
/// `limit`; equal quantities share a rank.
pub fn top_items_by_sales(orders: &[Order], limit: usize) -> Vec<ItemSales> {
    let mut sales: HashMap<&str, (i64, Decimal)> = HashMap::new();
    for order in orders {
        if !order.is_delivered() {
            continue;
        }
        for item in &order.items {
            let entry = sales
                .entry(item.name.as_str())
                .or_insert((0, Decimal::ZERO));
            entry.0 += item.quantity as i64;
            entry.1 += item.line_total();
        }
    }

    let mut rows: Vec<(&str, i64, Decimal)> = sales
        .into_iter()
        .map(|(name, (quantity, revenue))| (name, quantity, revenue))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows.truncate(limit);

    let mut result = Vec::with_capacity(rows.len());
    let mut rank = 0;
    let mut prev_quantity = None;
    for (name, quantity, revenue) in rows {
        if prev_quantity != Some(quantity) {
            rank += 1;
            prev_quantity = Some(quantity);
        }
        result.push(ItemSales {
            name: name.to_string(),
            quantity,
            revenue: to_f64(revenue),
            rank,
        });
    }
    result
}

/// Headline dashboard numbers over `range`, evaluated against the
/// current instant.
pub fn dashboard_stats(orders: &[Order], range: TimeRange) -> DashboardStats {
    dashboard_stats_at(orders, range, Utc::now())
}

/// Headline dashboard numbers with an explicit evaluation instant.
///
/// `pending_orders` counts everything still open, accepted included.
pub fn dashboard_stats_at(
    orders: &[Order],
    range: TimeRange,
    now: DateTime<Utc>,
) -> DashboardStats {
    let mut total = 0;
    let mut completed = 0;
    let mut open = 0;
    let mut revenue = Decimal::ZERO;
    let mut phones: HashSet<&str> = HashSet::new();

    for order in orders {
        if !view::in_time_range(order.timestamp, range, now) {
            continue;
        }
        total += 1;
        phones.insert(order.customer_phone.as_str());
        match order.status {
            OrderStatus::Delivered => {
                completed += 1;
                revenue += to_decimal(order.total);
            }
            OrderStatus::Pending | OrderStatus::Accepted => open += 1,
            OrderStatus::Rejected => {}
        }
    }

    let avg = if completed == 0 {
        Decimal::ZERO
    } else {
        revenue / Decimal::from(completed as u64)
    };

    DashboardStats {
        total_orders: total,
        completed_orders: completed,
        pending_orders: open,
        total_revenue: to_f64(revenue),
        avg_order_value: to_f64(avg),
        unique_customers: phones.len(),
    }
}
