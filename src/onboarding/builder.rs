//! Configuration derivation — pure and local, cannot fail.

use chrono::{DateTime, Utc};

use crate::model::{Configuration, Network, Secret};

/// Derives a persistable [`Configuration`] from a freshly provisioned secret
/// and user input.
pub struct ConfigurationBuilder {
    network: Network,
}

impl ConfigurationBuilder {
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    /// Build a configuration bound to `secret`.
    ///
    /// The configuration name is the display name stamped with the creation
    /// time so multiple attempts stay distinguishable in the configuration
    /// list. New accounts join the directory system.
    pub fn build(&self, secret: Secret, name: &str, now: DateTime<Utc>) -> Configuration {
        let config_name = format!("{name} ({})", now.format("%Y-%m-%d %H:%M"));
        Configuration::new(config_name, self.network, secret, true, now)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::model::Identity;

    #[test]
    fn build_binds_secret_and_network() {
        let builder = ConfigurationBuilder::new(Network::IntegrationTests);
        let secret = Secret::new(Identity::from("@alice"), SecretString::from("k"));
        let now = Utc::now();

        let config = builder.build(secret, "Alice", now);
        assert_eq!(config.identity().as_str(), "@alice");
        assert_eq!(config.network(), Network::IntegrationTests);
        assert!(config.joined_directory);
        assert_eq!(config.created_at(), now);
        assert!(config.name.starts_with("Alice ("));
    }
}
