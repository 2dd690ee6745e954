//! Error types for the onboarding workflow.

/// Errors surfaced by the external replication engine ("bot").
///
/// The engine itself lives outside this crate; implementations of
/// [`crate::bot::Bot`] map their native failures into these variants so the
/// workflow can report a uniform cause.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Secret creation failed: {reason}")]
    SecretCreation { reason: String },

    #[error("Login failed: {reason}")]
    Login { reason: String },

    #[error("Logout failed: {reason}")]
    Logout { reason: String },

    #[error("Publish failed: {reason}")]
    Publish { reason: String },

    #[error("Directory fetch failed: {reason}")]
    DirectoryFetch { reason: String },

    #[error("No active session")]
    NotLoggedIn,
}

/// Persistence errors for the configuration and status stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open store: {0}")]
    Open(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Failures of a `start` or `resume` attempt.
///
/// Validation variants are local precondition failures: no external call has
/// been made and no state has been mutated when they are returned.
#[derive(Debug, thiserror::Error)]
pub enum StartError {
    /// Birthdate does not meet the minimum-age requirement.
    #[error("Birthdate does not meet the minimum age requirement")]
    InvalidBirthdate,

    /// Phone verification is retired; the variant remains for callers that
    /// still map it to UI copy.
    #[error("Invalid phone number")]
    InvalidPhoneNumber,

    #[error("Invalid display name")]
    InvalidName,

    /// An identity is already logged in; onboarding a second one is not
    /// supported.
    #[error("Cannot onboard while logged in")]
    CannotOnboardWhileLoggedIn,

    /// Identity provisioning failed. No configuration was persisted.
    #[error("Identity provisioning failed: {0}")]
    SecretFailed(#[source] BotError),

    /// Login, publish, or directory fetch failed. Whether a configuration was
    /// already persisted depends on which step failed; callers decide between
    /// `reset` (start path) and retry (resume path).
    #[error("Engine error: {0}")]
    Bot(#[source] BotError),

    /// No resumable configuration exists; the caller must fall back to
    /// `start`.
    #[error("No resumable configuration")]
    ConfigurationFailed,

    /// Catch-all for an unexpected underlying error.
    #[error("Onboarding failed: {0}")]
    Failed(#[source] anyhow::Error),
}

impl From<StoreError> for StartError {
    fn from(e: StoreError) -> Self {
        StartError::Failed(e.into())
    }
}
