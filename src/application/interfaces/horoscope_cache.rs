use async_trait::async_trait;

use crate::domain::{DomainError, HoroscopeRecord};

/// Per-sign store of the most recently parsed horoscope.
///
/// Keys are signs exactly as the client sent them. Entries are overwritten,
/// never evicted; an implementation must make each operation atomic with
/// respect to the others.
#[async_trait]
pub trait HoroscopeCache: Send + Sync {
    async fn get(&self, sign: &str) -> Result<Option<HoroscopeRecord>, DomainError>;

    /// Store `record` for `sign`, replacing any previous entry.
    async fn put(&self, sign: &str, record: HoroscopeRecord) -> Result<(), DomainError>;

    /// Replace only the summary of the cached record, provided it still holds
    /// the reading of `basis` (see [`HoroscopeRecord::same_reading`]).
    ///
    /// Returns the record as it is after the update, or `None` when nothing is
    /// cached for `sign` or another reading replaced `basis` in the meantime.
    async fn update_summary(
        &self,
        sign: &str,
        basis: &HoroscopeRecord,
        summary: &str,
    ) -> Result<Option<HoroscopeRecord>, DomainError>;

    async fn len(&self) -> Result<usize, DomainError>;

    async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len().await? == 0)
    }
}
