//! In-memory configuration store.
//!
//! Reference implementation of [`ConfigurationStore`] used by tests and
//! development hosts. Production apps supply a secure backend (the secret
//! inside a configuration must land in platform key storage, not a file).

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::model::Configuration;
use crate::store::traits::ConfigurationStore;

#[derive(Default)]
pub struct MemoryConfigStore {
    current: RwLock<Option<Configuration>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigurationStore for MemoryConfigStore {
    async fn current(&self) -> Result<Option<Configuration>, StoreError> {
        Ok(self.current.read().await.clone())
    }

    async fn apply(&self, configuration: &Configuration) -> Result<(), StoreError> {
        *self.current.write().await = Some(configuration.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use secrecy::SecretString;

    use super::*;
    use crate::model::{Identity, Network, Secret};

    #[tokio::test]
    async fn apply_replaces_current() {
        let store = MemoryConfigStore::new();
        assert!(store.current().await.unwrap().is_none());

        let secret = Secret::new(Identity::from("@alice"), SecretString::from("k1"));
        let first = Configuration::new("Alice", Network::Main, secret, true, Utc::now());
        store.apply(&first).await.unwrap();
        assert_eq!(
            store.current().await.unwrap().unwrap().identity().as_str(),
            "@alice"
        );

        let secret = Secret::new(Identity::from("@bob"), SecretString::from("k2"));
        let second = Configuration::new("Bob", Network::Main, secret, true, Utc::now());
        store.apply(&second).await.unwrap();
        assert_eq!(
            store.current().await.unwrap().unwrap().identity().as_str(),
            "@bob"
        );
    }
}
