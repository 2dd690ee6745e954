//! Analytics and crash-reporting sinks.
//!
//! Both are one-way, fire-and-forget: calls never fail and never block the
//! workflow chain. Real implementations are expected to enqueue and transmit
//! in the background; transmission failures stay inside the sink.

use crate::error::BotError;

/// Product analytics sink.
pub trait Analytics: Send + Sync {
    /// A start attempt passed its local preconditions.
    fn track_onboarding_start(&self);

    /// A start attempt completed fully (status written).
    fn track_onboarding_end(&self);

    /// Associate subsequent events with an identified user.
    fn identify(&self, identifier: &str, name: &str, network: &str);

    /// Drop the current user association.
    fn forget(&self);
}

/// Crash-reporting sink.
pub trait CrashReporting: Send + Sync {
    /// Attach a failed external call to the crash log.
    fn report(&self, context: &str, error: &BotError);

    /// Associate crash reports with an identified user.
    fn identify(&self, identifier: &str, name: &str, network_key: &str, network_name: &str);
}

/// No-op analytics, for hosts that run without an analytics backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAnalytics;

impl Analytics for NullAnalytics {
    fn track_onboarding_start(&self) {}
    fn track_onboarding_end(&self) {}
    fn identify(&self, _identifier: &str, _name: &str, _network: &str) {}
    fn forget(&self) {}
}

/// No-op crash reporting.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCrashReporting;

impl CrashReporting for NullCrashReporting {
    fn report(&self, _context: &str, _error: &BotError) {}
    fn identify(&self, _identifier: &str, _name: &str, _network_key: &str, _network_name: &str) {}
}
