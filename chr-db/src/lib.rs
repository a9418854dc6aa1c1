//! In-memory SQLite store for county health records.
//!
//! The page loads the health table once at startup and then asks the same
//! few questions on every selection change: which counties have data for a
//! year, what one county looked like in one year, which years exist. This
//! crate answers them from an in-memory SQLite database.
//!
//! # Architecture
//!
//! - The connection sits behind `Rc<RefCell<..>>`: the page is single
//!   threaded, and every component holding a handle sees the same rows
//! - `rusqlite` with bundled SQLite, which builds for `wasm32-unknown-unknown`
//! - One row per `(fips, year)`, enforced by the primary key; loading a
//!   duplicate pair replaces the earlier row
//! - Typed query methods returning [`chr_core::CountyYearRecord`] or the
//!   small aggregate structs in [`models`]
//!
//! # Usage
//!
//! ```rust
//! use chr_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_health_csv("fips,county,state,year,life_expectancy\n06037,Los Angeles,California,2024,81.4\n").unwrap();
//! let records = db.query_records_for_year(2024).unwrap();
//! assert_eq!(records.len(), 1);
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database of county-year health records.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new, empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

impl PartialEq for Database {
    /// Two handles are equal when they share the same connection.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}
