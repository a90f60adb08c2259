//! Customer persistence

use crate::errors::{from_rusqlite, unique_violation, Result};
use crate::repo::rows::{customer_at, to_millis, CUSTOMER_COLUMNS};
use chrono::{DateTime, Utc};
use mazuri_core::errors::MazuriError;
use mazuri_core::model::{Customer, NewCustomer};
use rusqlite::{Connection, OptionalExtension};

/// SQLite repository for customers
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a customer and return its generated id
    ///
    /// # Errors
    ///
    /// `DuplicateCustomerEmail` when the email is taken, `Persistence` otherwise.
    pub fn insert(conn: &Connection, customer: &NewCustomer, created_at: DateTime<Utc>) -> Result<i64> {
        conn.execute(
            "INSERT INTO customers (name, email, phone, favorite_drink, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                customer.name,
                customer.email,
                customer.phone,
                customer.favorite_drink,
                to_millis(&created_at),
            ],
        )
        .map_err(|e| write_error(e, customer.email.as_deref()))?;

        Ok(conn.last_insert_rowid())
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Customer>> {
        conn.query_row(
            &format!("SELECT {} FROM customers WHERE id = ?1", CUSTOMER_COLUMNS),
            [id],
            |row| customer_at(row, 0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All customers ordered by id
    pub fn list(conn: &Connection) -> Result<Vec<Customer>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM customers ORDER BY id",
                CUSTOMER_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let customers = stmt
            .query_map([], |row| customer_at(row, 0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(customers)
    }

    pub fn update(conn: &Connection, customer: &Customer) -> Result<()> {
        conn.execute(
            "UPDATE customers SET name = ?1, email = ?2, phone = ?3, favorite_drink = ?4
             WHERE id = ?5",
            rusqlite::params![
                customer.name,
                customer.email,
                customer.phone,
                customer.favorite_drink,
                customer.id,
            ],
        )
        .map_err(|e| write_error(e, customer.email.as_deref()))?;

        Ok(())
    }

    /// Delete by id, returning whether a row was removed
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let removed = conn
            .execute("DELETE FROM customers WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(removed > 0)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM customers", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}

fn write_error(err: rusqlite::Error, email: Option<&str>) -> MazuriError {
    match (unique_violation(&err), email) {
        (Some("customers.email"), Some(email)) => MazuriError::DuplicateCustomerEmail {
            email: email.to_string(),
        },
        _ => from_rusqlite(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{initialize, open_in_memory_session};

    fn setup() -> Connection {
        let mut conn = open_in_memory_session().unwrap();
        initialize(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let conn = setup();
        let amara = NewCustomer::new("Amara").with_email("a@x.com");
        CustomerRepo::insert(&conn, &amara, Utc::now()).unwrap();

        let twin = NewCustomer::new("Other Amara").with_email("a@x.com");
        let err = CustomerRepo::insert(&conn, &twin, Utc::now()).unwrap_err();
        assert!(matches!(err, MazuriError::DuplicateCustomerEmail { .. }));
        assert_eq!(CustomerRepo::count(&conn).unwrap(), 1);
    }

    #[test]
    fn test_many_customers_without_email() {
        let conn = setup();
        CustomerRepo::insert(&conn, &NewCustomer::new("Juma"), Utc::now()).unwrap();
        CustomerRepo::insert(&conn, &NewCustomer::new("Wanjiku"), Utc::now()).unwrap();

        let customers = CustomerRepo::list(&conn).unwrap();
        assert_eq!(customers.len(), 2);
        assert!(customers.iter().all(|c| c.email.is_none()));
    }

    #[test]
    fn test_update_round_trips_optional_fields() {
        let conn = setup();
        let id = CustomerRepo::insert(
            &conn,
            &NewCustomer::new("Amara").with_phone("0700"),
            Utc::now(),
        )
        .unwrap();

        let mut customer = CustomerRepo::get(&conn, id).unwrap().unwrap();
        customer.phone = None;
        customer.favorite_drink = Some("Dawa".to_string());
        CustomerRepo::update(&conn, &customer).unwrap();

        let stored = CustomerRepo::get(&conn, id).unwrap().unwrap();
        assert_eq!(stored.phone, None);
        assert_eq!(stored.favorite_drink.as_deref(), Some("Dawa"));
    }
}
