//! Account onboarding: create an identity, register it with the directory,
//! publish the initial profile, and make the whole chain resumable.

pub mod builder;
pub mod context;
pub mod coordinator;
pub mod provisioner;
pub mod publisher;
pub mod session;
pub mod status;

pub use builder::ConfigurationBuilder;
pub use context::Context;
pub use coordinator::{Onboarding, OnboardingDeps, ResumeOutcome};
pub use provisioner::IdentityProvisioner;
pub use publisher::DirectoryPublisher;
pub use session::SessionGateway;
pub use status::OnboardingStatus;
