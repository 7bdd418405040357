use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::HoroscopeCache;
use crate::domain::{DomainError, HoroscopeRecord};

/// Process-local horoscope cache.
///
/// Lives as long as the process; a restart (or a serverless cold start)
/// empties it. Concurrent `put`s for the same sign are last-write-wins, and a
/// summary update only lands on the reading it was generated from.
pub struct InMemoryHoroscopeCache {
    records: Arc<Mutex<HashMap<String, HoroscopeRecord>>>,
}

impl InMemoryHoroscopeCache {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryHoroscopeCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HoroscopeCache for InMemoryHoroscopeCache {
    async fn get(&self, sign: &str) -> Result<Option<HoroscopeRecord>, DomainError> {
        let records = self.records.lock().await;
        Ok(records.get(sign).cloned())
    }

    async fn put(&self, sign: &str, record: HoroscopeRecord) -> Result<(), DomainError> {
        let mut records = self.records.lock().await;
        if records.insert(sign.to_string(), record).is_some() {
            debug!("Replaced cached horoscope for {}", sign);
        }
        Ok(())
    }

    async fn update_summary(
        &self,
        sign: &str,
        basis: &HoroscopeRecord,
        summary: &str,
    ) -> Result<Option<HoroscopeRecord>, DomainError> {
        let mut records = self.records.lock().await;
        match records.get_mut(sign) {
            Some(record) if record.same_reading(basis) => {
                record.set_summary(summary);
                Ok(Some(record.clone()))
            }
            Some(_) => {
                debug!("Cached horoscope for {} was replaced, summary not stored", sign);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let records = self.records.lock().await;
        Ok(records.len())
    }
}
