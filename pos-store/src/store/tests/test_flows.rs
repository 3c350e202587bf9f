use super::*;

#[test]
fn test_update_status_moves_ledger_and_history_in_lockstep() {
    let store = create_test_store();
    let order = store.place_order("Restaurant - T1", vec![naan(1)], "waiter1");

    store.update_order_status(order.id, OrderStatus::Preparing);

    let live = store.kot_list().into_iter().find(|o| o.id == order.id).unwrap();
    let history = store
        .order_history()
        .into_iter()
        .find(|o| o.id == order.id)
        .unwrap();
    assert_eq!(live.status, OrderStatus::Preparing);
    assert_eq!(history.status, OrderStatus::Preparing);
}

#[test]
fn test_update_status_may_skip_ahead() {
    let store = create_test_store();
    let order = store.place_order("Restaurant - T1", vec![naan(1)], "waiter1");

    // Pending -> Completed without intermediate steps is a forward move
    store.update_order_status(order.id, OrderStatus::Completed);
    assert_eq!(store.kot_list()[0].status, OrderStatus::Completed);
}

#[test]
fn test_backward_transition_is_rejected() {
    let store = create_test_store();
    let order = store.place_order("Restaurant - T1", vec![naan(1)], "waiter1");
    store.update_order_status(order.id, OrderStatus::ReadyToServe);

    store.update_order_status(order.id, OrderStatus::Accepted);

    assert_eq!(store.kot_list()[0].status, OrderStatus::ReadyToServe);
    assert_eq!(store.order_history()[0].status, OrderStatus::ReadyToServe);
}

#[test]
fn test_paid_is_not_reachable_through_update() {
    let store = create_test_store();
    let order = store.place_order("Restaurant - T1", vec![naan(1)], "waiter1");

    store.update_order_status(order.id, OrderStatus::Paid);

    assert_eq!(store.kot_list()[0].status, OrderStatus::Pending);
}

#[test]
fn test_unknown_order_id_is_noop() {
    let store = create_test_store();
    store.place_order("Restaurant - T1", vec![naan(1)], "waiter1");

    store.update_order_status(shared::OrderId(42), OrderStatus::Completed);

    assert_eq!(store.kot_list()[0].status, OrderStatus::Pending);
}

#[test]
fn test_settled_order_stays_paid() {
    let store = create_test_store();
    let order = store.place_order("Restaurant - T1", vec![naan(1)], "waiter1");
    store.settle_table("Restaurant - T1", "Cash", shared::Discount::None);

    // A stale tab acting on the already-settled ticket changes nothing
    store.update_order_status(order.id, OrderStatus::Completed);

    assert_eq!(store.order_history()[0].status, OrderStatus::Paid);
}

#[test]
fn test_next_allowed_statuses_is_the_flow_suffix() {
    let store = create_test_store();

    assert_eq!(
        store.next_allowed_statuses(OrderStatus::ReadyToServe),
        &[
            OrderStatus::ReadyToServe,
            OrderStatus::OutForDelivery,
            OrderStatus::Completed,
        ]
    );
    assert_eq!(
        store.next_allowed_statuses(OrderStatus::Pending).len(),
        OrderStatus::FLOW.len()
    );
    assert!(store.next_allowed_statuses(OrderStatus::Paid).is_empty());
}

#[test]
fn test_archive_marks_history_only() {
    let store = create_test_store();
    let order = store.place_order("Restaurant - T1", vec![naan(1)], "waiter1");

    store.archive_order(&order);

    assert_eq!(store.order_history()[0].status, OrderStatus::Paid);
    // The live ledger is billing's responsibility, not the archiver's
    assert_eq!(store.kot_list()[0].status, OrderStatus::Pending);
}

#[test]
fn test_replace_ledger_overwrites_live_orders() {
    let store = create_test_store();
    let keep = store.place_order("Restaurant - T1", vec![naan(1)], "waiter1");
    store.place_order("Restaurant - T2", vec![naan(1)], "waiter2");

    store.replace_ledger(vec![keep.clone()]);

    assert_eq!(store.kot_list(), vec![keep]);
    // History never shrinks
    assert_eq!(store.order_history().len(), 2);
}
