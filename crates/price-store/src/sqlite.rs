use std::path::Path;

use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use price_model::{NewProduct, ProductRecord};

use crate::error::{Result, StoreError};
use crate::fingerprint::fingerprint;
use crate::schema;
use crate::{DedupMode, InsertOutcome, ProductStore};

/// SQLite-backed product store.
///
/// Owns its connection; the handle is passed explicitly to whoever needs it.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    dedup: DedupMode,
}

impl SqliteStore {
    /// Open (or create) a store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self {
            conn,
            dedup: DedupMode::KeepAll,
        };
        store.initialize()?;
        info!(path = %path.display(), "opened product database");
        Ok(store)
    }

    /// Create an in-memory store that lives as long as the handle.
    pub fn in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
            dedup: DedupMode::KeepAll,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Switch duplicate handling. Enabling fingerprints creates the side
    /// table if needed; rows stored earlier are not fingerprinted.
    pub fn with_dedup(mut self, dedup: DedupMode) -> Result<Self> {
        if dedup == DedupMode::Fingerprint {
            self.conn.execute_batch(schema::FINGERPRINTS_SQL)?;
        }
        self.dedup = dedup;
        Ok(self)
    }

    pub fn dedup(&self) -> DedupMode {
        self.dedup
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(schema::PRODUCTS_SQL)?;
        self.conn.create_scalar_function(
            schema::CASEFOLD_FN,
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let text: Option<String> = ctx.get(0)?;
                Ok(text.map(|value| value.to_lowercase()))
            },
        )?;
        Ok(())
    }

    fn insert_row(conn: &Connection, product: &NewProduct) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO products (name, price, weight, file) VALUES (?1, ?2, ?3, ?4)",
            params![product.name, product.price, product.weight, product.source_file],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn insert_unique(&mut self, product: &NewProduct) -> Result<InsertOutcome> {
        let key = fingerprint(product);
        let tx = self.conn.transaction()?;
        let existing: Option<i64> = tx
            .query_row(
                "SELECT product_id FROM product_fingerprints WHERE fingerprint = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        if let Some(existing_id) = existing {
            debug!(name = %product.name, existing_id, "duplicate product not inserted");
            return Ok(InsertOutcome::Duplicate { existing_id });
        }
        let id = Self::insert_row(&tx, product)?;
        tx.execute(
            "INSERT INTO product_fingerprints (fingerprint, product_id) VALUES (?1, ?2)",
            params![key, id],
        )?;
        tx.commit()?;
        Ok(InsertOutcome::Inserted { id })
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<ProductRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, record_from_row)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<ProductRecord> {
    Ok(ProductRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        weight: row.get(3)?,
        source_file: row.get(4)?,
    })
}

impl ProductStore for SqliteStore {
    fn insert(&mut self, product: NewProduct) -> Result<InsertOutcome> {
        match self.dedup {
            DedupMode::KeepAll => {
                let id = Self::insert_row(&self.conn, &product)?;
                Ok(InsertOutcome::Inserted { id })
            }
            DedupMode::Fingerprint => self.insert_unique(&product),
        }
    }

    fn search(&self, query: &str) -> Result<Vec<ProductRecord>> {
        let needle = query.to_lowercase();
        let records = self.query(&schema::search_sql(), params![needle])?;
        debug!(query, matches = records.len(), "searched products");
        Ok(records)
    }

    fn all_ordered(&self) -> Result<Vec<ProductRecord>> {
        self.query(&schema::all_sql(), [])
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM products", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
