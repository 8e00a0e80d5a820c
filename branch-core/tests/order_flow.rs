//! 完整仪表盘会话流程测试
//!
//! Drives one manager session end to end through AppState: sign in,
//! work the pending queue, read the dashboard numbers, export, touch up
//! the branch profile, sign out.

use branch_core::orders::{self, orders_to_csv};
use branch_core::{AppState, CoreConfig, StoreError};
use shared::models::BranchInfoUpdate;
use shared::order::{FilterConfig, OrderStatus, PaymentStatus, TimeRange};

fn test_state() -> AppState {
    AppState::initialize(CoreConfig {
        seed_demo_data: true,
        login_latency_ms: 0,
    })
}

#[tokio::test]
async fn dashboard_session_flow() {
    let state = test_state();

    // Sign in.
    let session = state
        .auth
        .login("robert.brown@restaurant.com", "secret123")
        .await
        .expect("mock rules accept this login");
    assert_eq!(session.user.branch, "Downtown Branch");

    // The pending queue shows the two demo orders, newest first.
    let snapshot = state.orders.snapshot();
    let pending = orders::filter_orders(
        &snapshot,
        &FilterConfig::all().with_status(OrderStatus::Pending),
    );
    let pending_ids: Vec<u64> = pending.iter().map(|order| order.id).collect();
    assert_eq!(pending_ids, vec![5, 1]);

    // Work order 1 through to delivery.
    state.orders.accept_order(1).expect("pending order accepts");
    let delivered = state.orders.deliver_order(1).expect("accepted order delivers");
    assert_eq!(delivered.status, OrderStatus::Delivered);

    // Rejecting order 5 refunds it in the same step.
    let rejected = state.orders.reject_order(5).expect("pending order rejects");
    assert_eq!(rejected.status, OrderStatus::Rejected);
    assert_eq!(rejected.payment_status, PaymentStatus::Refunded);

    // A fresh snapshot drives the dashboard.
    let snapshot = state.orders.snapshot();
    let counts = orders::count_by_status(&snapshot);
    assert_eq!(counts.pending, 0);
    assert_eq!(counts.accepted, 1);
    assert_eq!(counts.delivered, 2);
    assert_eq!(counts.rejected, 2);
    assert_eq!(counts.total(), snapshot.len());

    // Revenue covers the two delivered orders: 18.75 + 25.99.
    assert_eq!(orders::total_revenue(&snapshot), 44.74);
    assert_eq!(orders::average_order_value(&snapshot), 22.37);

    let stats = orders::dashboard_stats(&snapshot, TimeRange::All);
    assert_eq!(stats.total_orders, 5);
    assert_eq!(stats.completed_orders, 2);
    assert_eq!(stats.pending_orders, 1);
    assert_eq!(stats.total_revenue, 44.74);
    assert_eq!(stats.unique_customers, 5);

    // Best sellers across the delivered pair; the single-unit items tie
    // and share their rank.
    let top = orders::top_items_by_sales(&snapshot, 5);
    let rows: Vec<(&str, i64, usize)> = top
        .iter()
        .map(|row| (row.name.as_str(), row.quantity, row.rank))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Tacos", 3, 1),
            ("Burger", 2, 2),
            ("Fries", 1, 3),
            ("Salad", 1, 3),
        ]
    );

    // Export the delivered view.
    let view = orders::filter_orders(
        &snapshot,
        &FilterConfig::all().with_status(OrderStatus::Delivered),
    );
    let csv = orders_to_csv(&view);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Order ID,Customer Name,"));
    assert!(csv.contains("ORD-001"));
    assert!(csv.contains("ORD-003"));

    // Touch up the branch profile.
    let branch = state.branch.update(BranchInfoUpdate {
        total_staff: Some(18),
        ..BranchInfoUpdate::default()
    });
    assert_eq!(branch.total_staff, 18);
    assert_eq!(state.branch.info().admin_name, "Robert Brown");

    // Sign out.
    assert!(state.auth.logout().is_some());
    assert!(!state.auth.is_authenticated());
}

#[tokio::test]
async fn refused_writes_leave_the_store_alone() {
    let state = test_state();
    let before = state.orders.snapshot();

    // Unknown id.
    assert_eq!(state.orders.accept_order(404), Err(StoreError::NotFound(404)));

    // Pending orders cannot jump straight to delivered.
    assert_eq!(
        state.orders.deliver_order(1),
        Err(StoreError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Delivered,
        })
    );

    // Terminal orders stay terminal (order 4 ships rejected).
    assert!(state.orders.accept_order(4).is_err());
    assert!(state.orders.deliver_order(3).is_err());

    assert_eq!(state.orders.snapshot(), before);
}
