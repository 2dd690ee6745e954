//! Store contracts consumed by the onboarding coordinator.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{Configuration, Identity};
use crate::onboarding::OnboardingStatus;

/// Secure persistence for the current [`Configuration`].
///
/// The mechanics (keychain, encrypted file) belong to the host app; this
/// crate only requires that at most one configuration is current and that it
/// survives process restarts together with its secret.
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// The current configuration, if one has been applied.
    async fn current(&self) -> Result<Option<Configuration>, StoreError>;

    /// Make `configuration` current and save the configuration set.
    async fn apply(&self, configuration: &Configuration) -> Result<(), StoreError>;
}

/// Durable mapping from identity to onboarding status.
///
/// One entry per identity for the lifetime of the installation, no eviction.
/// This is what lets the app route a restarted process to `resume` instead of
/// `start`.
#[async_trait]
pub trait OnboardingStatusStore: Send + Sync {
    /// Status for `identity`; [`OnboardingStatus::NotStarted`] when absent.
    async fn status(&self, identity: &Identity) -> Result<OnboardingStatus, StoreError>;

    /// Overwrite the status for `identity`.
    async fn set_status(
        &self,
        identity: &Identity,
        status: OnboardingStatus,
    ) -> Result<(), StoreError>;
}
