use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::{DateTime, Utc};
use models::domains::otp::OtpRecord;

pub struct Cache<T> {
    data: Arc<Mutex<HashMap<String, T>>>,
}

impl<T> Clone for Cache<T> {
    fn clone(&self) -> Self {
        Cache {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> Cache<T> {
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn get_connection(&self) -> MutexGuard<'_, HashMap<String, T>> {
        self.data.lock().unwrap()
    }

    pub fn set_data(&self, id: &str, data: T) {
        let mut conn = self.get_connection();
        conn.insert(id.to_owned(), data);
    }

    /// Removes the entry only when `predicate` holds for it, under a single
    /// lock acquisition. Returns whether the entry was removed.
    pub fn remove_if<F>(&self, id: &str, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        let mut conn = self.get_connection();
        if conn.get(id).is_some_and(predicate) {
            conn.remove(id);
            true
        } else {
            false
        }
    }

    pub fn count(&self) -> usize {
        self.get_connection().len()
    }
}

impl<T: Clone> Cache<T> {
    pub fn get_data(&self, id: &str) -> Option<T> {
        let conn = self.get_connection();
        conn.get(id).map(|data| data.clone())
    }
}

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory passcode registry keyed by email address.
///
/// Lives for the process lifetime. Entries are replaced on re-issuance and
/// removed on successful verification; expired entries are not swept and
/// simply fail the expiry check until something overwrites them.
#[derive(Clone)]
pub struct OtpStore {
    records: Cache<OtpRecord>,
}

impl OtpStore {
    pub fn new() -> Self {
        Self {
            records: Cache::new(),
        }
    }

    pub fn put(&self, email: &str, record: OtpRecord) {
        self.records.set_data(email, record);
    }

    pub fn get(&self, email: &str) -> Option<OtpRecord> {
        self.records.get_data(email)
    }

    /// Single-use consumption: removes the record and returns true only when
    /// the submitted code matches and the record is still valid at `now`.
    /// A mismatch or an expired record leaves the entry in place.
    pub fn consume_valid(&self, email: &str, code: &str, now: DateTime<Utc>) -> bool {
        self.records
            .remove_if(email, |record| record.matches(code) && !record.is_expired(now))
    }

    pub fn count(&self) -> usize {
        self.records.count()
    }
}
