//! Shared key-value state between the app pipeline and the widget reader
//!
//! The store is always injected; nothing in the crate keeps a global instance.
//! Every `set` stamps the `lastUpdated` key in the same write, so readers can
//! tell how fresh the record is.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fjall::{Database, Keyspace, PersistMode};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task;

use crate::{OmenError, Result};

/// Key of the haiku currently on display
pub const CURRENT_HAIKU_KEY: &str = "currentHaiku";
/// Key holding the time of the last `set`
pub const LAST_UPDATED_KEY: &str = "lastUpdated";

/// Shown until the first reading has been published
pub const PLACEHOLDER_HAIKU: &str =
    "Through mist and shadow\nYour presence calls to the void\nShare your location";

/// Small persisted key-value record shared between processes
///
/// `lastUpdated` is maintained by the store itself; `get` and `set` on it are
/// rejected with a validation error.
#[async_trait]
pub trait SharedStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key` and record the update time in the same write
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn last_updated(&self) -> Result<Option<DateTime<Utc>>>;
}

#[async_trait]
impl<S: SharedStore + ?Sized> SharedStore for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn last_updated(&self) -> Result<Option<DateTime<Utc>>> {
        (**self).last_updated().await
    }
}

fn check_key(key: &str) -> Result<()> {
    if key == LAST_UPDATED_KEY {
        return Err(OmenError::validation(format!(
            "{LAST_UPDATED_KEY} is reserved for the store"
        )));
    }
    Ok(())
}

#[derive(Debug, Default)]
struct Record {
    values: HashMap<String, String>,
    updated_at: Option<DateTime<Utc>>,
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: RwLock<Record>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SharedStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.record.read().await.values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        let mut record = self.record.write().await;
        record.values.insert(key.to_string(), value.to_string());
        record.updated_at = Some(Utc::now());
        Ok(())
    }

    async fn last_updated(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.record.read().await.updated_at)
    }
}

/// On-disk store backed by a fjall keyspace, values encoded with postcard
pub struct FjallStore {
    db: Database,
    store: Keyspace,
}

fn get_from_store(store: Keyspace, key: Vec<u8>) -> anyhow::Result<Option<Vec<u8>>> {
    Ok(store.get(key)?.map(|v| v.to_vec()))
}

fn store_error(err: impl std::fmt::Display) -> OmenError {
    OmenError::store(err.to_string())
}

impl FjallStore {
    /// Open (or create) the shared keyspace under `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Database::builder(&path).open().map_err(store_error)?;
        let items = db
            .keyspace("shared", fjall::KeyspaceCreateOptions::default)
            .map_err(store_error)?;
        tracing::debug!(path = %path.as_ref().display(), "Opened shared store");
        Ok(FjallStore { db, store: items })
    }

    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let store = self.store.clone();
        let key = key.as_bytes().to_vec();
        task::spawn_blocking(move || get_from_store(store, key))
            .await?
            .map_err(store_error)
    }
}

#[async_trait]
impl SharedStore for FjallStore {
    #[tracing::instrument(name = "query_store", level = "debug", skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(postcard::from_bytes::<String>(&bytes)?)),
            None => {
                tracing::debug!("Key not found");
                Ok(None)
            }
        }
    }

    #[tracing::instrument(name = "put_store", level = "debug", skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        let bytes = postcard::to_stdvec(value)?;
        let stamp = postcard::to_stdvec(&Utc::now().timestamp_millis())?;

        // value and stamp land in one batch so readers never see one without the other
        let mut batch = self.db.batch().durability(Some(PersistMode::Buffer));
        batch.insert(&self.store, key.as_bytes().to_vec(), bytes);
        batch.insert(&self.store, LAST_UPDATED_KEY.as_bytes().to_vec(), stamp);
        task::spawn_blocking(move || batch.commit())
            .await?
            .map_err(store_error)
    }

    async fn last_updated(&self) -> Result<Option<DateTime<Utc>>> {
        let Some(bytes) = self.read_bytes(LAST_UPDATED_KEY).await? else {
            return Ok(None);
        };
        let millis: i64 = postcard::from_bytes(&bytes)?;
        DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| OmenError::store(format!("invalid lastUpdated value {millis}")))
    }
}

/// Typed view of the shared record: the current haiku and when it changed
#[derive(Debug, Clone)]
pub struct SharedWeatherState<S> {
    store: S,
}

impl<S: SharedStore> SharedWeatherState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The published haiku, or the placeholder before the first reading
    pub async fn current_haiku(&self) -> Result<String> {
        Ok(self
            .store
            .get(CURRENT_HAIKU_KEY)
            .await?
            .unwrap_or_else(|| PLACEHOLDER_HAIKU.to_string()))
    }

    pub async fn publish(&self, haiku: &str) -> Result<()> {
        self.store.set(CURRENT_HAIKU_KEY, haiku).await?;
        tracing::info!("Published new haiku");
        Ok(())
    }

    pub async fn last_updated(&self) -> Result<Option<DateTime<Utc>>> {
        self.store.last_updated().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
        assert_eq!(store.last_updated().await.unwrap(), None);

        let before = Utc::now();
        store.set(CURRENT_HAIKU_KEY, "a\nb\nc").await.unwrap();
        assert_eq!(
            store.get(CURRENT_HAIKU_KEY).await.unwrap().as_deref(),
            Some("a\nb\nc")
        );
        let updated = store.last_updated().await.unwrap().unwrap();
        assert!(updated >= before);
    }

    #[tokio::test]
    async fn test_state_falls_back_to_placeholder() {
        let state = SharedWeatherState::new(MemoryStore::new());
        assert_eq!(state.current_haiku().await.unwrap(), PLACEHOLDER_HAIKU);

        state.publish("one\ntwo\nthree").await.unwrap();
        assert_eq!(state.current_haiku().await.unwrap(), "one\ntwo\nthree");
        assert!(state.last_updated().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_shared_through_arc() {
        let store = Arc::new(MemoryStore::new());
        let writer = SharedWeatherState::new(Arc::clone(&store));
        let reader = SharedWeatherState::new(store);
        writer.publish("seen by both").await.unwrap();
        assert_eq!(reader.current_haiku().await.unwrap(), "seen by both");
    }

    #[tokio::test]
    async fn test_fjall_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FjallStore::open(dir.path()).unwrap();

        assert_eq!(store.get(CURRENT_HAIKU_KEY).await.unwrap(), None);
        assert_eq!(store.last_updated().await.unwrap(), None);

        store.set(CURRENT_HAIKU_KEY, "cold\nwind\nnow").await.unwrap();
        assert_eq!(
            store.get(CURRENT_HAIKU_KEY).await.unwrap().as_deref(),
            Some("cold\nwind\nnow")
        );
        assert!(store.last_updated().await.unwrap().is_some());
    }

    /// Same key sequence for every implementation: the reserved stamp key is
    /// refused and a refused `set` leaves the record untouched.
    async fn reserved_key_sequence(store: &dyn SharedStore) {
        let err = store.set(LAST_UPDATED_KEY, "hello").await.unwrap_err();
        assert!(matches!(err, OmenError::Validation { .. }));
        assert!(matches!(
            store.get(LAST_UPDATED_KEY).await,
            Err(OmenError::Validation { .. })
        ));
        assert_eq!(store.last_updated().await.unwrap(), None);

        store.set(CURRENT_HAIKU_KEY, "first").await.unwrap();
        let stamp = store.last_updated().await.unwrap();
        assert!(stamp.is_some());

        assert!(store.set(LAST_UPDATED_KEY, "later").await.is_err());
        assert_eq!(store.last_updated().await.unwrap(), stamp);
        assert_eq!(
            store.get(CURRENT_HAIKU_KEY).await.unwrap().as_deref(),
            Some("first")
        );
    }

    #[tokio::test]
    async fn test_memory_store_reserved_key() {
        reserved_key_sequence(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_fjall_store_reserved_key() {
        let dir = tempfile::tempdir().unwrap();
        reserved_key_sequence(&FjallStore::open(dir.path()).unwrap()).await;
    }

    #[tokio::test]
    async fn test_fjall_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let stamp = {
            let store = FjallStore::open(dir.path()).unwrap();
            store.set(CURRENT_HAIKU_KEY, "kept\nacross\nruns").await.unwrap();
            store.last_updated().await.unwrap()
        };

        let reopened = SharedWeatherState::new(FjallStore::open(dir.path()).unwrap());
        assert_eq!(reopened.current_haiku().await.unwrap(), "kept\nacross\nruns");
        assert_eq!(reopened.last_updated().await.unwrap(), stamp);
    }
}
