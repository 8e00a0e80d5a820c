//! Filter/sort engine over order snapshots
//!
//! Pure functions: callers pass a snapshot in and get a fresh, ordered
//! list back. Nothing here touches the store.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use shared::order::{FilterConfig, Order, SortBy, SortDir, TimeRange};
use std::cmp::Ordering;

/// Apply `config` to `orders`, evaluating time windows against the
/// current instant.
pub fn filter_orders(orders: &[Order], config: &FilterConfig) -> Vec<Order> {
    filter_orders_at(orders, config, Utc::now())
}

/// Apply `config` to `orders` with an explicit evaluation instant.
///
/// The instant is pinned once for the whole pass, so every order is
/// judged against the same window boundaries.
pub fn filter_orders_at(
    orders: &[Order],
    config: &FilterConfig,
    now: DateTime<Utc>,
) -> Vec<Order> {
    let mut result: Vec<Order> = orders
        .iter()
        .filter(|order| matches(order, config, now))
        .cloned()
        .collect();

    sort_orders(&mut result, config.sort_by, config.sort_dir);
    result
}

/// The `limit` newest orders, newest first.
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut result = orders.to_vec();
    result.sort_by_key(|order| std::cmp::Reverse(order.timestamp));
    result.truncate(limit);
    result
}

fn matches(order: &Order, config: &FilterConfig, now: DateTime<Utc>) -> bool {
    if let Some(term) = config.search.as_deref()
        && !term.is_empty()
        && !matches_search(order, term)
    {
        return false;
    }
    if let Some(status) = config.status
        && order.status != status
    {
        return false;
    }
    if let Some(payment) = config.payment_status
        && order.payment_status != payment
    {
        return false;
    }
    if let Some(method) = config.payment_method.as_deref()
        && order.payment_method != method
    {
        return false;
    }
    in_time_range(order.timestamp, config.time_range, now)
}

/// Order number and customer name match case-insensitively; the phone
/// matches by raw substring so "+1" style prefixes work as typed.
fn matches_search(order: &Order, term: &str) -> bool {
    let folded = term.to_lowercase();
    order.order_id.to_lowercase().contains(&folded)
        || order.customer_name.to_lowercase().contains(&folded)
        || order.customer_phone.contains(term)
}

/// Whether a millisecond timestamp falls inside `range` relative to `now`.
///
/// Calendar windows (today, yesterday) compare UTC calendar days;
/// rolling windows (week, month) keep the boundary instant itself.
pub(crate) fn in_time_range(ts: i64, range: TimeRange, now: DateTime<Utc>) -> bool {
    match range {
        TimeRange::All => true,
        TimeRange::Today => order_day(ts) == Some(now.date_naive()),
        TimeRange::Yesterday => now
            .date_naive()
            .pred_opt()
            .is_some_and(|yesterday| order_day(ts) == Some(yesterday)),
        TimeRange::Week => ts >= (now - Duration::days(7)).timestamp_millis(),
        TimeRange::Month => ts >= (now - Duration::days(30)).timestamp_millis(),
    }
}

/// UTC calendar day of a millisecond timestamp.
fn order_day(ts: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(ts).map(|dt| dt.date_naive())
}

/// Stable sort; orders comparing equal keep their snapshot order.
fn sort_orders(orders: &mut [Order], key: SortBy, dir: SortDir) {
    orders.sort_by(|a, b| {
        let ord = match key {
            SortBy::OrderDate => a.timestamp.cmp(&b.timestamp),
            SortBy::TotalAmount => a.total.total_cmp(&b.total),
            SortBy::CustomerName => fold_cmp(&a.customer_name, &b.customer_name),
            SortBy::Status => fold_cmp(a.status.as_str(), b.status.as_str()),
        };
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

fn fold_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
