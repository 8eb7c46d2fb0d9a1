//! SQLite repository for Reviews
//!
//! Persists `Review` records to the `reviews` table and keeps exactly one
//! live record per stored id in its identity map.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use crate::errors::{from_rusqlite, statement_error, Result};
use crate::repo::SqliteEmployeeLookup;
use rusqlite::{Connection, OptionalExtension, Params, Row};
use workforce_core::errors::WorkforceError;
use workforce_core::{log_op_end, log_op_error, log_op_start};
use workforce_core::{EmployeeLookup, Identified, IdentityMap, Review};

const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS reviews (
        id INTEGER PRIMARY KEY,
        year INTEGER,
        summary TEXT,
        employee_id INTEGER,
        FOREIGN KEY (employee_id) REFERENCES employees(id) ON DELETE CASCADE
    )";

const SELECT_COLUMNS: &str = "SELECT id, year, summary, employee_id FROM reviews";

/// A raw `reviews` row, before reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub id: i64,
    pub year: i64,
    pub summary: String,
    pub employee_id: i64,
}

impl ReviewRow {
    /// Decode a row selected with columns (id, year, summary, employee_id)
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            year: row.get(1)?,
            summary: row.get(2)?,
            employee_id: row.get(3)?,
        })
    }
}

/// Repository for reviews, owning the review identity map
#[derive(Debug, Default)]
pub struct ReviewRepository {
    reviews: IdentityMap<Review>,
}

impl ReviewRepository {
    /// Create a repository with an empty identity map
    pub fn new() -> Self {
        Self {
            reviews: IdentityMap::new(),
        }
    }

    /// Read access to the identity map
    pub fn identity_map(&self) -> &IdentityMap<Review> {
        &self.reviews
    }

    /// Cached review for an id, without touching storage
    pub fn get(&self, review_id: i64) -> Option<&Review> {
        self.reviews.get(review_id)
    }

    /// Mutable cached review for an id; follow edits with [`Self::update`]
    pub fn get_mut(&mut self, review_id: i64) -> Option<&mut Review> {
        self.reviews.get_mut(review_id)
    }

    /// Create the `reviews` table if it does not exist
    pub fn create_table(conn: &Connection) -> Result<()> {
        conn.execute(CREATE_TABLE_SQL, [])
            .map_err(|e| statement_error("review_create_table", e))?;
        tracing::debug!("reviews table ensured");
        Ok(())
    }

    /// Drop the `reviews` table if it exists
    pub fn drop_table(conn: &Connection) -> Result<()> {
        conn.execute("DROP TABLE IF EXISTS reviews", [])
            .map_err(|e| statement_error("review_drop_table", e))?;
        tracing::debug!("reviews table dropped");
        Ok(())
    }

    /// Insert a transient review and register it in the identity map
    ///
    /// The generated row id is assigned to the record. Returns the cached
    /// record.
    ///
    /// # Errors
    /// * `ConstraintViolation` - If the review already has an id
    /// * `Persistence` - If the insert fails
    pub fn save(&mut self, conn: &Connection, review: Review) -> Result<&Review> {
        log_op_start!("review_save", employee_id = review.employee_id());
        let start = Instant::now();

        let review_id = self.save_impl(conn, review).map_err(|e| {
            log_op_error!(
                "review_save",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "review_save",
            duration_ms = start.elapsed().as_millis() as u64,
            review_id = review_id
        );

        self.cached(review_id)
    }

    fn save_impl(&mut self, conn: &Connection, mut review: Review) -> Result<i64> {
        if let Some(id) = review.id() {
            return Err(WorkforceError::AlreadyPersisted {
                entity: Review::ENTITY.to_string(),
                id,
            }
            .into());
        }

        conn.execute(
            "INSERT INTO reviews (year, summary, employee_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![review.year(), review.summary(), review.employee_id()],
        )
        .map_err(|e| statement_error("review_insert", e))?;

        let review_id = conn.last_insert_rowid();
        review.set_id(Some(review_id));
        self.reviews.insert(review)?;

        Ok(review_id)
    }

    /// Write the cached record's current values to its row
    ///
    /// The id never changes. Updating a row that no longer exists in
    /// storage affects nothing and is not an error.
    ///
    /// # Errors
    /// * `NotFound` - If no review with this id is cached
    /// * `Persistence` - If the update fails
    pub fn update(&self, conn: &Connection, review_id: i64) -> Result<()> {
        log_op_start!("review_update", review_id = review_id);
        let start = Instant::now();

        self.update_impl(conn, review_id).map_err(|e| {
            log_op_error!(
                "review_update",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "review_update",
            duration_ms = start.elapsed().as_millis() as u64,
            review_id = review_id
        );

        Ok(())
    }

    fn update_impl(&self, conn: &Connection, review_id: i64) -> Result<()> {
        let review = self.cached(review_id)?;

        let changed = conn
            .execute(
                "UPDATE reviews SET year = ?1, summary = ?2, employee_id = ?3 WHERE id = ?4",
                rusqlite::params![
                    review.year(),
                    review.summary(),
                    review.employee_id(),
                    review_id
                ],
            )
            .map_err(|e| statement_error("review_update", e))?;

        tracing::debug!(review_id, changed, "review row updated");
        Ok(())
    }

    /// Delete a review's row and evict it from the identity map
    ///
    /// Only a review cached in this repository can be deleted; an unknown id
    /// fails before any statement runs. The row is deleted first, then the
    /// map entry is removed and the id cleared. Returns the now-inert record.
    ///
    /// # Errors
    /// * `NotFound` - If no review with this id is cached (e.g. deleted twice)
    /// * `Persistence` - If the delete fails
    pub fn delete(&mut self, conn: &Connection, review_id: i64) -> Result<Review> {
        log_op_start!("review_delete", review_id = review_id);
        let start = Instant::now();

        let review = self.delete_impl(conn, review_id).map_err(|e| {
            log_op_error!(
                "review_delete",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                review_id = review_id
            );
            e
        })?;

        log_op_end!(
            "review_delete",
            duration_ms = start.elapsed().as_millis() as u64,
            review_id = review_id
        );

        Ok(review)
    }

    fn delete_impl(&mut self, conn: &Connection, review_id: i64) -> Result<Review> {
        if !self.reviews.contains(review_id) {
            return Err(WorkforceError::ReviewNotFound { review_id }.into());
        }

        conn.execute("DELETE FROM reviews WHERE id = ?1", [review_id])
            .map_err(|e| statement_error("review_delete", e))?;

        let mut review = self
            .reviews
            .remove(review_id)
            .ok_or(WorkforceError::ReviewNotFound { review_id })?;
        review.set_id(None);

        Ok(review)
    }

    /// Validate, insert and cache a new review in one call
    ///
    /// # Errors
    /// * `InvalidInput` - If any field fails validation
    /// * `Persistence` - If the insert fails
    pub fn create<L>(
        &mut self,
        conn: &Connection,
        year: i64,
        summary: impl Into<String>,
        employee_id: i64,
        employees: &L,
    ) -> Result<&Review>
    where
        L: EmployeeLookup + ?Sized,
    {
        let review = Review::new(year, summary, employee_id, employees)?;
        self.save(conn, review)
    }

    /// Reconcile a stored row with the identity map
    ///
    /// A cached record for the row's id is refreshed in place; otherwise a
    /// new record is built and cached. Either way the returned reference is
    /// the single live record for that id.
    ///
    /// # Errors
    /// * `InvalidInput` - If the stored values fail validation
    pub fn instance_from_row<L>(&mut self, row: ReviewRow, employees: &L) -> Result<&Review>
    where
        L: EmployeeLookup + ?Sized,
    {
        let review_id = row.id;

        if let Some(existing) = self.reviews.get_mut(review_id) {
            existing.refresh(row.year, row.summary, row.employee_id, employees)?;
            tracing::debug!(review_id, "refreshed cached review");
        } else {
            let review = Review::with_id(
                review_id,
                row.year,
                row.summary,
                row.employee_id,
                employees,
            )?;
            self.reviews.insert(review)?;
            tracing::debug!(review_id, "cached review from row");
        }

        self.cached(review_id)
    }

    /// All stored reviews, in storage order
    ///
    /// # Errors
    /// * `Persistence` - If the query fails
    /// * `InvalidInput` - If a stored row fails validation
    pub fn get_all(&mut self, conn: &Connection) -> Result<Vec<&Review>> {
        let rows = query_rows(conn, SELECT_COLUMNS, [])?;
        self.reconcile_all(conn, rows)
    }

    /// The review stored under `review_id`, or `None`
    ///
    /// # Errors
    /// * `Persistence` - If the query fails
    /// * `InvalidInput` - If the stored row fails validation
    pub fn find_by_id(&mut self, conn: &Connection, review_id: i64) -> Result<Option<&Review>> {
        let row = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                [review_id],
                ReviewRow::from_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        match row {
            Some(row) => {
                let lookup = SqliteEmployeeLookup::new(conn);
                self.instance_from_row(row, &lookup).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Reviews referencing `employee_id`, in storage order
    ///
    /// # Errors
    /// * `Persistence` - If the query fails
    /// * `InvalidInput` - If a stored row fails validation
    pub fn find_by_employee_id(
        &mut self,
        conn: &Connection,
        employee_id: i64,
    ) -> Result<Vec<&Review>> {
        let rows = query_rows(
            conn,
            &format!("{} WHERE employee_id = ?1", SELECT_COLUMNS),
            [employee_id],
        )?;
        self.reconcile_all(conn, rows)
    }

    fn reconcile_all(&mut self, conn: &Connection, rows: Vec<ReviewRow>) -> Result<Vec<&Review>> {
        let lookup = SqliteEmployeeLookup::new(conn);
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.id);
            self.instance_from_row(row, &lookup)?;
        }
        tracing::debug!(row_count = ids.len(), "reconciled review rows");

        let this: &Self = self;
        ids.into_iter().map(|id| this.cached(id)).collect()
    }

    fn cached(&self, review_id: i64) -> Result<&Review> {
        self.reviews
            .get(review_id)
            .ok_or_else(|| WorkforceError::ReviewNotFound { review_id }.into())
    }
}

fn query_rows<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<Vec<ReviewRow>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, ReviewRow::from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}
