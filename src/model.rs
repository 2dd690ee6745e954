//! Core data model: identities, secrets, networks, configurations, and the
//! published profile record.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Opaque handle for a cryptographic keypair representing a user.
///
/// The keypair itself is owned by the replication engine; everything in this
/// crate only references identities by handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Reference to a message accepted into the engine's feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageRef(pub String);

/// Private key material plus the identity it backs.
///
/// Created by the engine, held only for the duration of a start attempt, and
/// handed to the secure configuration store wrapped in a [`Configuration`].
/// The key material is never serialized by this crate; `Debug` output is
/// redacted by `secrecy`.
#[derive(Debug, Clone)]
pub struct Secret {
    identity: Identity,
    private_key: SecretString,
}

impl Secret {
    pub fn new(identity: Identity, private_key: SecretString) -> Self {
        Self {
            identity,
            private_key,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn private_key(&self) -> &SecretString {
        &self.private_key
    }
}

/// Which replication network a configuration talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    /// The production Orbit network.
    Main,
    /// The isolated network used by integration tests and CI.
    IntegrationTests,
}

impl Network {
    /// Launch argument that selects the integration-test network.
    pub const CI_FLAG: &'static str = "--use-ci-network";

    /// The well-known network key (base64) peers handshake with.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Main => "G2cYs31kXq0I7kZH8fQvBpm5TxNdE4aWc9uYhVjM3rA=",
            Self::IntegrationTests => "Qx7VmP2eJt8bK4yLwZs0cNdR6fUgA1oXiC5nHh9uE3k=",
        }
    }

    /// Human-readable network name, used when identifying to the sinks.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Main => "orbit",
            Self::IntegrationTests => "orbit-ci",
        }
    }

    /// Resolve the network from launch arguments: [`Self::CI_FLAG`] selects
    /// the integration-test network, anything else the production one.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if args.into_iter().any(|a| a.as_ref() == Self::CI_FLAG) {
            Self::IntegrationTests
        } else {
            Self::Main
        }
    }

    /// Resolve the network from the process launch arguments.
    pub fn from_env() -> Self {
        Self::from_args(std::env::args())
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The published directory entry for a user: identity plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub identity: Identity,
    pub name: String,
}

impl About {
    /// Feed record type under which the profile is published.
    pub const RECORD_TYPE: &'static str = "about";

    pub fn new(identity: Identity, name: impl Into<String>) -> Self {
        Self {
            identity,
            name: name.into(),
        }
    }
}

/// A named, persistable record binding a [`Secret`] to app-level settings.
///
/// Exactly one configuration is "current" at a time (enforced by the
/// configuration store). The bound identity is immutable after construction;
/// only the display name may change.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Display name for the configuration (not the published profile name).
    pub name: String,
    network: Network,
    secret: Secret,
    /// Whether this account opted into the shared directory system.
    pub joined_directory: bool,
    /// Optional feed-signing key for networks that require one.
    signing_key: Option<SecretString>,
    created_at: DateTime<Utc>,
}

impl Configuration {
    pub fn new(
        name: impl Into<String>,
        network: Network,
        secret: Secret,
        joined_directory: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            network,
            secret,
            joined_directory,
            signing_key: None,
            created_at,
        }
    }

    /// Attach a feed-signing key.
    pub fn with_signing_key(mut self, key: SecretString) -> Self {
        self.signing_key = Some(key);
        self
    }

    pub fn signing_key(&self) -> Option<&SecretString> {
        self.signing_key.as_ref()
    }

    pub fn identity(&self) -> &Identity {
        self.secret.identity()
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_from_args_defaults_to_main() {
        assert_eq!(Network::from_args(["orbit"]), Network::Main);
        assert_eq!(Network::from_args(Vec::<String>::new()), Network::Main);
    }

    #[test]
    fn network_from_args_honors_ci_flag() {
        assert_eq!(
            Network::from_args(["orbit", "--use-ci-network"]),
            Network::IntegrationTests
        );
    }

    #[test]
    fn network_keys_differ() {
        assert_ne!(Network::Main.key(), Network::IntegrationTests.key());
        assert_ne!(Network::Main.name(), Network::IntegrationTests.name());
    }

    #[test]
    fn secret_debug_redacts_key_material() {
        let secret = Secret::new(
            Identity::from("@alice.ed25519"),
            SecretString::from("super-private"),
        );
        let dump = format!("{secret:?}");
        assert!(!dump.contains("super-private"));
    }

    #[test]
    fn about_serializes_identity_as_plain_string() {
        let about = About::new(Identity::from("@alice.ed25519"), "Alice");
        let json = serde_json::to_value(&about).unwrap();
        assert_eq!(json["identity"], "@alice.ed25519");
        assert_eq!(json["name"], "Alice");
    }

    #[test]
    fn configuration_exposes_bound_identity() {
        let secret = Secret::new(Identity::from("@bob.ed25519"), SecretString::from("k"));
        let config = Configuration::new("Bob", Network::Main, secret, true, Utc::now());
        assert_eq!(config.identity().as_str(), "@bob.ed25519");
        assert!(config.joined_directory);
    }
}
