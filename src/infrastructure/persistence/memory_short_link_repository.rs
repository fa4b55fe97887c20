//! In-process short link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{LinkCounts, NewShortLink, ShortLinkRecord};
use crate::domain::errors::LinkError;
use crate::domain::repositories::ShortLinkRepository;

/// Map-backed repository used with `DB_DRIVER=memory` and in tests.
///
/// Contents are lost on restart.
#[derive(Default)]
pub struct MemoryShortLinkRepository {
    records: RwLock<HashMap<(String, String), ShortLinkRecord>>,
}

impl MemoryShortLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortLinkRepository for MemoryShortLinkRepository {
    async fn get(&self, host: &str, path: &str) -> Result<Option<ShortLinkRecord>, LinkError> {
        let records = self.records.read().await;
        Ok(records
            .get(&(host.to_string(), path.to_string()))
            .cloned())
    }

    async fn find_guessable(
        &self,
        host: &str,
        raw_query: &str,
    ) -> Result<Option<String>, LinkError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| !r.unguessable && r.host == host && r.raw_query == raw_query)
            .min_by_key(|r| r.created_at)
            .map(|r| r.path.clone()))
    }

    async fn put(&self, new_link: NewShortLink) -> Result<(), LinkError> {
        let mut records = self.records.write().await;
        match records.entry((new_link.host.clone(), new_link.path.clone())) {
            Entry::Occupied(_) => Err(LinkError::DuplicatePath),
            Entry::Vacant(slot) => {
                slot.insert(ShortLinkRecord::new(
                    new_link.host,
                    new_link.path,
                    new_link.raw_query,
                    new_link.unguessable,
                    Utc::now(),
                ));
                Ok(())
            }
        }
    }

    async fn count(&self) -> Result<LinkCounts, LinkError> {
        let records = self.records.read().await;
        let unguessable = records.values().filter(|r| r.unguessable).count() as i64;
        Ok(LinkCounts {
            guessable: records.len() as i64 - unguessable,
            unguessable,
        })
    }

    async fn ping(&self) -> Result<(), LinkError> {
        Ok(())
    }
}
