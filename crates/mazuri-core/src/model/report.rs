use serde::{Deserialize, Serialize};

/// One row of the top-customers ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCustomer {
    pub customer_id: i64,
    pub name: String,
    pub order_count: i64,
}

/// Counts shown by the `status` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub cocktails: i64,
    pub customers: i64,
    pub pending_orders: i64,
}

/// Raw row counts per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub cocktails: i64,
    pub customers: i64,
    pub orders: i64,
}
