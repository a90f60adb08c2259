//! Order persistence

use crate::errors::{from_rusqlite, Result};
use crate::repo::rows::{cocktail_at, customer_at, optional_at, order_at, to_millis, ORDER_COLUMNS};
use chrono::{DateTime, Utc};
use mazuri_core::model::{NewOrder, Order, OrderDetail, OrderStatus};
use rusqlite::{Connection, OptionalExtension};

const DETAIL_QUERY: &str = "SELECT o.id, o.customer_id, o.cocktail_id, o.quantity, o.order_date,
        o.status, o.completed_at,
        c.id, c.name, c.email, c.phone, c.favorite_drink, c.created_at,
        k.id, k.name, k.ingredients, k.price, k.category, k.created_at
     FROM orders o
     LEFT JOIN customers c ON c.id = o.customer_id
     LEFT JOIN cocktails k ON k.id = o.cocktail_id
     ORDER BY o.id";

const CUSTOMER_OFFSET: usize = 7;
const COCKTAIL_OFFSET: usize = 13;

/// SQLite repository for orders
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a pending order and return its generated id
    ///
    /// Referential checks are the caller's job.
    pub fn insert(conn: &Connection, order: &NewOrder, order_date: DateTime<Utc>) -> Result<i64> {
        conn.execute(
            "INSERT INTO orders (customer_id, cocktail_id, quantity, order_date, status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                order.customer_id,
                order.cocktail_id,
                order.quantity,
                to_millis(&order_date),
                OrderStatus::Pending.as_str(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Order>> {
        conn.query_row(
            &format!("SELECT {} FROM orders WHERE id = ?1", ORDER_COLUMNS),
            [id],
            |row| order_at(row, 0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All orders with their customer and cocktail, ordered by id
    pub fn list_details(conn: &Connection) -> Result<Vec<OrderDetail>> {
        let mut stmt = conn.prepare(DETAIL_QUERY).map_err(from_rusqlite)?;

        let details = stmt
            .query_map([], |row| {
                Ok(OrderDetail {
                    order: order_at(row, 0)?,
                    customer: optional_at(row, CUSTOMER_OFFSET, customer_at)?,
                    cocktail: optional_at(row, COCKTAIL_OFFSET, cocktail_at)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(details)
    }

    /// Write every mutable column of `order` back to its row
    pub fn update(conn: &Connection, order: &Order) -> Result<()> {
        conn.execute(
            "UPDATE orders SET customer_id = ?1, cocktail_id = ?2, quantity = ?3, status = ?4,
                completed_at = ?5
             WHERE id = ?6",
            rusqlite::params![
                order.customer_id,
                order.cocktail_id,
                order.quantity,
                order.status.as_str(),
                order.completed_at.as_ref().map(to_millis),
                order.id,
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Delete by id, returning whether a row was removed
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let removed = conn
            .execute("DELETE FROM orders WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(removed > 0)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    pub fn count_with_status(conn: &Connection, status: OrderStatus) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM orders WHERE status = ?1",
            [status.as_str()],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// Orders placed by one customer
    pub fn count_for_customer(conn: &Connection, customer_id: i64) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM orders WHERE customer_id = ?1",
            [customer_id],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// Orders for one cocktail
    pub fn count_for_cocktail(conn: &Connection, cocktail_id: i64) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM orders WHERE cocktail_id = ?1",
            [cocktail_id],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{initialize, open_in_memory_session};
    use crate::repo::{CocktailRepo, CustomerRepo};
    use mazuri_core::model::{NewCocktail, NewCustomer};

    fn setup() -> (Connection, i64, i64) {
        let mut conn = open_in_memory_session().unwrap();
        initialize(&mut conn).unwrap();
        let customer_id =
            CustomerRepo::insert(&conn, &NewCustomer::new("Amara"), Utc::now()).unwrap();
        let cocktail_id = CocktailRepo::insert(
            &conn,
            &NewCocktail::new("Mojito", "rum,mint,lime", 8.5, None),
            Utc::now(),
        )
        .unwrap();
        (conn, customer_id, cocktail_id)
    }

    #[test]
    fn test_insert_defaults_to_pending() {
        let (conn, customer_id, cocktail_id) = setup();
        let id = OrderRepo::insert(
            &conn,
            &NewOrder::new(customer_id, cocktail_id).with_quantity(2),
            Utc::now(),
        )
        .unwrap();

        let order = OrderRepo::get(&conn, id).unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.quantity, 2);
        assert!(order.completed_at.is_none());
    }

    #[test]
    fn test_list_details_joins_names() {
        let (conn, customer_id, cocktail_id) = setup();
        OrderRepo::insert(&conn, &NewOrder::new(customer_id, cocktail_id), Utc::now()).unwrap();

        let details = OrderRepo::list_details(&conn).unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].customer.as_ref().unwrap().name, "Amara");
        assert_eq!(details[0].cocktail.as_ref().unwrap().name, "Mojito");
        assert_eq!(details[0].line_total(), Some(8.5));
    }

    #[test]
    fn test_update_persists_completion() {
        let (conn, customer_id, cocktail_id) = setup();
        let id =
            OrderRepo::insert(&conn, &NewOrder::new(customer_id, cocktail_id), Utc::now()).unwrap();

        let mut order = OrderRepo::get(&conn, id).unwrap().unwrap();
        order.complete(Utc::now());
        OrderRepo::update(&conn, &order).unwrap();

        let stored = OrderRepo::get(&conn, id).unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Completed);
        assert!(stored.completed_at.is_some());
        assert_eq!(OrderRepo::count_with_status(&conn, OrderStatus::Pending).unwrap(), 0);
    }

    #[test]
    fn test_foreign_keys_restrict_parent_delete() {
        let (conn, customer_id, cocktail_id) = setup();
        OrderRepo::insert(&conn, &NewOrder::new(customer_id, cocktail_id), Utc::now()).unwrap();

        assert!(CustomerRepo::delete(&conn, customer_id).is_err());
        assert_eq!(OrderRepo::count_for_customer(&conn, customer_id).unwrap(), 1);
        assert_eq!(OrderRepo::count_for_cocktail(&conn, cocktail_id).unwrap(), 1);
    }
}
