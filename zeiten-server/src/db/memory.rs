//! In-memory store for tests and local development
//!
//! Mirrors the Postgres behaviour the handlers rely on: generated ids start
//! at 1 and are never reused, listing is ordered by `zeit`, and values that
//! `::timestamptz` or `::integer` would reject are reported as a `DbError`
//! with Postgres' wording. Timestamps without an offset are taken as UTC.

use std::num::IntErrorKind;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::{DbError, Store, Verein, Zeit};
use crate::models::ZeitInput;

#[derive(Default)]
struct Tables {
    zeiten: Vec<Zeit>,
    vereine: Vec<Verein>,
    next_zeit_id: i32,
    next_verein_id: i32,
}

/// In-memory `Store`
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of statements attempted so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn begin(&self) -> Result<MutexGuard<'_, Tables>, DbError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.failure {
            Some(message) => Err(DbError::Rejected(message.clone())),
            None => Ok(lock(&self.tables)),
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Offset-carrying shapes besides RFC 3339
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Shapes without offset, read as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn parse_zeit(raw: &str) -> Result<DateTime<Utc>, DbError> {
    let s = raw.trim();

    let with_offset = DateTime::parse_from_rfc3339(s).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|f| DateTime::parse_from_str(s, f).ok())
    });
    if let Some(dt) = with_offset {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            DbError::Rejected(format!(
                "invalid input syntax for type timestamp with time zone: \"{}\"",
                raw
            ))
        })
}

fn parse_id(raw: &str) -> Result<i32, DbError> {
    raw.trim().parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            DbError::Rejected(format!("value \"{}\" is out of range for type integer", raw))
        }
        _ => DbError::Rejected(format!("invalid input syntax for type integer: \"{}\"", raw)),
    })
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_zeiten(&self) -> Result<Vec<Zeit>, DbError> {
        let tables = self.begin()?;
        let mut rows = tables.zeiten.clone();
        rows.sort_by_key(|z| z.zeit);
        Ok(rows)
    }

    async fn create_zeit(&self, zeit: &ZeitInput) -> Result<Zeit, DbError> {
        let mut tables = self.begin()?;
        let parsed = parse_zeit(zeit.as_str())?;
        tables.next_zeit_id += 1;
        let row = Zeit {
            id: tables.next_zeit_id,
            zeit: parsed,
        };
        tables.zeiten.push(row.clone());
        Ok(row)
    }

    async fn delete_zeit(&self, id: &str) -> Result<u64, DbError> {
        let mut tables = self.begin()?;
        let id = parse_id(id)?;
        let before = tables.zeiten.len();
        tables.zeiten.retain(|z| z.id != id);
        Ok((before - tables.zeiten.len()) as u64)
    }

    async fn create_verein(&self, vereinsname: Option<&str>) -> Result<Verein, DbError> {
        let mut tables = self.begin()?;
        tables.next_verein_id += 1;
        let row = Verein {
            id: tables.next_verein_id,
            vereinsname: vereinsname.map(str::to_owned),
        };
        tables.vereine.push(row.clone());
        Ok(row)
    }
}
