//! Durability round trips through the on-disk redb store
//!
//! Exercises the full open -> mutate -> drop -> reopen cycle and the
//! two-stores-over-one-database sharing mode.

use pos_store::config::StoreConfig;
use pos_store::storage::RedbSliceStore;
use pos_store::store::PosStore;
use pos_store::sync::{NullNotifier, SliceEvent};
use shared::{Discount, LineItem, OrderStatus, SliceKey, TableKey, TableStatus};
use std::sync::Arc;

fn open_store(storage: RedbSliceStore) -> PosStore {
    PosStore::open(StoreConfig::default(), Arc::new(storage), Arc::new(NullNotifier))
}

#[test]
fn test_full_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("pos.redb");

    let expected = {
        let store = open_store(RedbSliceStore::open(&db_path).unwrap());

        let order = store.place_order(
            "Restaurant - T3",
            vec![
                LineItem::new("Chicken 65", 2, 8.99),
                LineItem::new("Plain Naan", 3, 1.49),
            ],
            "waiter1",
        );
        store.update_order_status(order.id, OrderStatus::Preparing);
        store.submit_online_order(vec![LineItem::new("Dosa", 1, 4.99)], "Sam");
        store.restock("milk", 3.0);
        store.mark_bill_pending("Restaurant - T3");
        store.set_table_status(
            &TableKey::new("Garden", "T1"),
            TableStatus::Reserved,
        );
        store.snapshot()
    };

    let reopened = open_store(RedbSliceStore::open(&db_path).unwrap());
    assert_eq!(reopened.snapshot(), expected);
}

#[test]
fn test_settlement_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("pos.redb");

    {
        let store = open_store(RedbSliceStore::open(&db_path).unwrap());
        store.place_order("Restaurant - T1", vec![LineItem::new("Idli", 2, 3.99)], "waiter2");
        store
            .settle_table("Restaurant - T1", "Cash", Discount::Percent(10.0))
            .unwrap();
    }

    let store = open_store(RedbSliceStore::open(&db_path).unwrap());
    assert!(store.kot_list().is_empty());
    assert_eq!(store.completed_bills().len(), 1);
    assert_eq!(
        store.order_history()[0].status,
        OrderStatus::Paid
    );
    assert_eq!(
        store.table_status(&TableKey::new("Restaurant", "T1")),
        Some(TableStatus::Available)
    );
}

#[test]
fn test_two_stores_share_one_database() {
    let storage = RedbSliceStore::open_in_memory().unwrap();
    let tab_a = open_store(storage.clone());
    let tab_b = open_store(storage);

    let order = tab_a.place_order(
        "Board Room - T2",
        vec![LineItem::new("Irani Chai", 2, 2.5)],
        "waiter1",
    );

    for key in SliceKey::ALL {
        tab_b.apply_external_change(&SliceEvent::new(key, None));
    }

    assert_eq!(tab_b.kot_list(), vec![order]);
    assert_eq!(
        tab_b.table_status(&TableKey::new("Board Room", "T2")),
        Some(TableStatus::Occupied)
    );
    assert_eq!(tab_b.stock(), tab_a.stock());
}
