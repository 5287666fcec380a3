//! Partner singleton under `@partner`. Local flag only, no network sync.

use std::sync::Arc;

use crate::domain::Partner;
use crate::error::{EkiliError, Result};
use crate::ports::KeyValueStore;

use super::{PARTNER_KEY, log_failure};

#[derive(Clone)]
pub struct PartnerRepository {
    store: Arc<dyn KeyValueStore>,
}

impl PartnerRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// `None` when unset or unreadable.
    pub async fn get_partner(&self) -> Option<Partner> {
        match self.try_get_partner().await {
            Ok(partner) => partner,
            Err(e) => {
                tracing::error!(key = PARTNER_KEY, error = ?e, "error getting partner info");
                None
            }
        }
    }

    pub async fn try_get_partner(&self) -> Result<Option<Partner>> {
        let raw = self
            .store
            .get(PARTNER_KEY)
            .await
            .map_err(|e| EkiliError::store(PARTNER_KEY, e))?;

        raw.map(|raw| {
            serde_json::from_str(&raw).map_err(|source| EkiliError::Decode {
                key: PARTNER_KEY.to_string(),
                source,
            })
        })
        .transpose()
    }

    /// Overwrites unconditionally.
    pub async fn set_partner(&self, partner: &Partner) -> Result<()> {
        let write = async {
            let body = serde_json::to_string(partner).map_err(|source| EkiliError::Encode {
                key: PARTNER_KEY.to_string(),
                source,
            })?;
            self.store
                .set(PARTNER_KEY, body)
                .await
                .map_err(|e| EkiliError::store(PARTNER_KEY, e))
        };
        write.await.inspect_err(log_failure("set partner"))?;
        tracing::debug!(key = PARTNER_KEY, connected = partner.connected, "partner saved");
        Ok(())
    }

    pub async fn clear_partner(&self) -> Result<()> {
        self.store
            .remove(PARTNER_KEY)
            .await
            .map_err(|e| EkiliError::store(PARTNER_KEY, e))
            .inspect_err(log_failure("clear partner"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PartnerId;
    use crate::impls::InMemoryStore;

    fn sam() -> Partner {
        Partner::new(PartnerId::new("p1"), "Sam", "sam@example.com").connected()
    }

    #[tokio::test]
    async fn unset_partner_is_none() {
        let repo = PartnerRepository::new(Arc::new(InMemoryStore::new()));
        assert_eq!(repo.get_partner().await, None);
    }

    #[tokio::test]
    async fn set_overwrites_and_clear_removes() {
        let store = InMemoryStore::new();
        let repo = PartnerRepository::new(Arc::new(store.clone()));

        repo.set_partner(&Partner::new(PartnerId::new("p0"), "Old", "old@example.com"))
            .await
            .unwrap();
        repo.set_partner(&sam()).await.unwrap();
        assert_eq!(repo.get_partner().await, Some(sam()));

        repo.clear_partner().await.unwrap();
        assert_eq!(repo.get_partner().await, None);
        assert!(store.keys().await.is_empty());
    }

    #[tokio::test]
    async fn undecodable_partner_reads_as_none() {
        let store = InMemoryStore::new().with_entry(PARTNER_KEY, "[1,2,3]").await;
        let repo = PartnerRepository::new(Arc::new(store));

        assert_eq!(repo.get_partner().await, None);
        assert!(matches!(
            repo.try_get_partner().await,
            Err(EkiliError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn failed_clear_is_reported() {
        let store = InMemoryStore::new();
        store.fail_writes(true);
        let repo = PartnerRepository::new(Arc::new(store));

        assert!(repo.clear_partner().await.is_err());
    }

    #[tokio::test]
    async fn unknown_partner_keys_are_kept() {
        let raw = r#"{"id":"p1","name":"Sam","email":"sam@example.com","connected":false,"avatar":"sam.png"}"#;
        let store = InMemoryStore::new().with_entry(PARTNER_KEY, raw).await;
        let repo = PartnerRepository::new(Arc::new(store.clone()));

        let partner = repo.get_partner().await.unwrap();
        repo.set_partner(&partner.connected()).await.unwrap();

        let stored: serde_json::Value =
            serde_json::from_str(&store.get(PARTNER_KEY).await.unwrap().unwrap()).unwrap();
        assert_eq!(stored["avatar"], "sam.png");
        assert_eq!(stored["connected"], true);
    }
}
