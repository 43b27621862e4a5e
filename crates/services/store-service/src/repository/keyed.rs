//! Generic in-memory collection keyed by store-assigned integer ids.
//!
//! Every entity collection of the store is a `KeyedStore<T>`; the typed
//! repositories add their own queries on top of it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use domain::{EntityId, Keyed, FIRST_ENTITY_ID};

struct Collection<T> {
    next_id: EntityId,
    rows: BTreeMap<EntityId, T>,
}

/// Map of records plus the counter that assigns their ids.
///
/// Each operation runs under a single lock acquisition, so inserts and
/// read-modify-write updates are atomic with respect to each other.
/// Ids start at 1 and are never reused, even after removal.
pub struct KeyedStore<T> {
    name: &'static str,
    inner: RwLock<Collection<T>>,
}

impl<T> KeyedStore<T>
where
    T: Keyed + Clone + Send + Sync,
{
    /// Create an empty collection. `name` is only used in log output.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Collection {
                next_id: FIRST_ENTITY_ID,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Allocate the next id and store the record built from it.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(EntityId, DateTime<Utc>) -> T,
    {
        let mut collection = self.inner.write().await;
        let id = collection.next_id;
        collection.next_id += 1;

        let record = build(id, Utc::now());
        debug_assert_eq!(record.id(), id);
        collection.rows.insert(id, record.clone());

        tracing::trace!(collection = self.name, id, "Record inserted");
        record
    }

    pub async fn get(&self, id: EntityId) -> Option<T> {
        let record = self.inner.read().await.rows.get(&id).cloned();
        tracing::trace!(collection = self.name, id, found = record.is_some(), "Record lookup");
        record
    }

    /// All records in id order
    pub async fn all(&self) -> Vec<T> {
        let records: Vec<T> = self.inner.read().await.rows.values().cloned().collect();
        tracing::trace!(collection = self.name, count = records.len(), "Records listed");
        records
    }

    /// Records matching `predicate`, in id order
    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let records: Vec<T> = self
            .inner
            .read()
            .await
            .rows
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        tracing::trace!(collection = self.name, count = records.len(), "Records filtered");
        records
    }

    /// First record (lowest id) matching `predicate`
    pub async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let record = self
            .inner
            .read()
            .await
            .rows
            .values()
            .find(|record| predicate(record))
            .cloned();
        tracing::trace!(collection = self.name, found = record.is_some(), "Record search");
        record
    }

    /// Mutate the record with `id` in place and return the result.
    ///
    /// Returns `None` when no record has that id.
    pub async fn update<F>(&self, id: EntityId, mutate: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut collection = self.inner.write().await;
        let record = collection.rows.get_mut(&id)?;
        mutate(record);

        tracing::trace!(collection = self.name, id, "Record updated");
        Some(record.clone())
    }

    /// Remove the first record (lowest id) matching `predicate`.
    pub async fn remove_first<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let mut collection = self.inner.write().await;
        let id = collection
            .rows
            .values()
            .find(|record| predicate(record))
            .map(Keyed::id)?;

        tracing::trace!(collection = self.name, id, "Record removed");
        collection.rows.remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: EntityId,
        text: String,
        hits: u32,
    }

    impl Keyed for Note {
        fn id(&self) -> EntityId {
            self.id
        }
    }

    async fn add(store: &KeyedStore<Note>, text: &str) -> Note {
        let text = text.to_string();
        store
            .insert_with(|id, _| Note { id, text, hits: 0 })
            .await
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = KeyedStore::new("notes");
        let a = add(&store, "a").await;
        let b = add(&store, "b").await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_removal() {
        let store = KeyedStore::new("notes");
        add(&store, "a").await;
        let b = add(&store, "b").await;
        assert!(store.remove_first(|n| n.id == b.id).await.is_some());

        let c = add(&store, "c").await;
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let store: KeyedStore<Note> = KeyedStore::new("notes");
        assert!(store.update(7, |n| n.hits += 1).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_first_takes_lowest_id() {
        let store = KeyedStore::new("notes");
        add(&store, "dup").await;
        add(&store, "dup").await;

        let removed = store.remove_first(|n| n.text == "dup").await.unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.all().await[0].id, 2);
    }

    #[tokio::test]
    async fn test_filter_and_find_keep_id_order() {
        let store = KeyedStore::new("notes");
        add(&store, "x").await;
        add(&store, "y").await;
        add(&store, "x").await;

        let xs: Vec<EntityId> = store.filter(|n| n.text == "x").await.iter().map(|n| n.id).collect();
        assert_eq!(xs, vec![1, 3]);
        assert_eq!(store.find(|n| n.text == "y").await.unwrap().id, 2);
        assert!(store.find(|n| n.text == "z").await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_do_not_lose_writes() {
        let store = Arc::new(KeyedStore::<Note>::new("notes"));
        let id = add(&store, "counter").await.id;

        let mut handles = Vec::new();
        for _ in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.update(id, |n| n.hits += 1).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.get(id).await.unwrap().hits, 50);
    }

    #[test]
    fn test_empty_store_blocking() {
        let store: KeyedStore<Note> = KeyedStore::new("notes");
        assert!(tokio_test::block_on(store.is_empty()));
    }
}
