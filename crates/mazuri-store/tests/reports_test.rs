// Integration tests for aggregate reports and cocktail search

use chrono::Utc;
use mazuri_core::model::{CocktailFilter, NewCocktail, NewCustomer, NewOrder, OrderStatus};
use mazuri_store::reports::{db_stats, status_report, top_customers, total_revenue};
use mazuri_store::{CocktailRepo, CustomerRepo, OrderRepo};
use proptest::prelude::*;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = mazuri_store::db::open_in_memory_session().unwrap();
    mazuri_store::initialize(&mut conn).unwrap();
    conn
}

fn add_cocktail(conn: &Connection, name: &str, price: f64) -> i64 {
    CocktailRepo::insert(conn, &NewCocktail::new(name, "ice", price, None), Utc::now()).unwrap()
}

fn add_customer(conn: &Connection, name: &str) -> i64 {
    CustomerRepo::insert(conn, &NewCustomer::new(name), Utc::now()).unwrap()
}

fn add_order(conn: &Connection, customer_id: i64, cocktail_id: i64, quantity: i64) -> i64 {
    OrderRepo::insert(
        conn,
        &NewOrder::new(customer_id, cocktail_id).with_quantity(quantity),
        Utc::now(),
    )
    .unwrap()
}

fn complete(conn: &Connection, order_id: i64) {
    let mut order = OrderRepo::get(conn, order_id).unwrap().unwrap();
    order.complete(Utc::now());
    OrderRepo::update(conn, &order).unwrap();
}

#[test]
fn test_revenue_none_without_completed_orders() {
    let conn = setup_test_db();
    let mojito = add_cocktail(&conn, "Mojito", 8.5);
    let amara = add_customer(&conn, "Amara");
    add_order(&conn, amara, mojito, 2);

    assert_eq!(total_revenue(&conn).unwrap(), None);
}

#[test]
fn test_revenue_zero_is_distinct_from_none() {
    let conn = setup_test_db();
    let water = add_cocktail(&conn, "Tap Water", 0.0);
    let amara = add_customer(&conn, "Amara");
    let order = add_order(&conn, amara, water, 3);
    complete(&conn, order);

    assert_eq!(total_revenue(&conn).unwrap(), Some(0.0));
}

#[test]
fn test_revenue_sums_price_times_quantity() {
    let conn = setup_test_db();
    let mojito = add_cocktail(&conn, "Mojito", 8.5);
    let dawa = add_cocktail(&conn, "Dawa", 6.0);
    let amara = add_customer(&conn, "Amara");

    let first = add_order(&conn, amara, mojito, 2);
    let second = add_order(&conn, amara, dawa, 1);
    add_order(&conn, amara, dawa, 10); // still pending
    complete(&conn, first);
    complete(&conn, second);

    let revenue = total_revenue(&conn).unwrap().unwrap();
    assert!((revenue - 23.0).abs() < 1e-9);
}

#[test]
fn test_top_customers_ranking() {
    let conn = setup_test_db();
    let mojito = add_cocktail(&conn, "Mojito", 8.5);
    let names = ["A", "B", "C", "D", "E", "F", "Idle"];
    let ids: Vec<i64> = names.iter().map(|n| add_customer(&conn, n)).collect();

    // A:1, B:3, C:2, D:6, E:4, F:5 orders; Idle has none
    for (idx, count) in [1, 3, 2, 6, 4, 5].iter().enumerate() {
        for _ in 0..*count {
            add_order(&conn, ids[idx], mojito, 1);
        }
    }

    let ranking = top_customers(&conn, 5).unwrap();
    let ranked: Vec<(&str, i64)> = ranking
        .iter()
        .map(|t| (t.name.as_str(), t.order_count))
        .collect();
    assert_eq!(
        ranked,
        vec![("D", 6), ("F", 5), ("E", 4), ("B", 3), ("C", 2)]
    );
    assert!(ranking.iter().all(|t| t.name != "Idle"));
}

#[test]
fn test_top_customers_empty_without_orders() {
    let conn = setup_test_db();
    add_customer(&conn, "Amara");
    assert!(top_customers(&conn, 5).unwrap().is_empty());
}

#[test]
fn test_status_counts_only_pending_orders() {
    let conn = setup_test_db();
    let mojito = add_cocktail(&conn, "Mojito", 8.5);
    add_cocktail(&conn, "Dawa", 6.0);
    let amara = add_customer(&conn, "Amara");
    let done = add_order(&conn, amara, mojito, 1);
    add_order(&conn, amara, mojito, 1);
    complete(&conn, done);

    let report = status_report(&conn).unwrap();
    assert_eq!(report.cocktails, 2);
    assert_eq!(report.customers, 1);
    assert_eq!(report.pending_orders, 1);

    let stats = db_stats(&conn).unwrap();
    assert_eq!(stats.orders, 2);
    assert_eq!(
        OrderRepo::count_with_status(&conn, OrderStatus::Completed).unwrap(),
        1
    );
}

#[test]
fn test_search_max_price_excludes_mojito() {
    let conn = setup_test_db();
    add_cocktail(&conn, "Mojito", 8.5);

    let filter = CocktailFilter {
        max_price: Some(5.0),
        ..Default::default()
    };
    assert!(CocktailRepo::list(&conn, &filter).unwrap().is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_search_results_satisfy_every_filter(
        menu in proptest::collection::btree_map("[a-zA-Z]{3,8}", 0.0f64..20.0, 1..8),
        needle in "[a-zA-Z]{1,2}",
        ceiling in 0.0f64..20.0,
    ) {
        let conn = setup_test_db();
        for (name, price) in &menu {
            add_cocktail(&conn, name, *price);
        }

        let filter = CocktailFilter {
            name: Some(needle.clone()),
            category: None,
            max_price: Some(ceiling),
        };
        let found = CocktailRepo::list(&conn, &filter).unwrap();

        let needle_lower = needle.to_lowercase();
        let expected = menu
            .iter()
            .filter(|(name, price)| name.to_lowercase().contains(&needle_lower) && **price <= ceiling)
            .count();
        prop_assert_eq!(found.len(), expected);
        for cocktail in found {
            prop_assert!(cocktail.name.to_lowercase().contains(&needle_lower));
            prop_assert!(cocktail.price <= ceiling);
        }
    }
}
