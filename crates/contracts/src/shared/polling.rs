use serde::{Deserialize, Serialize};

/// How a list page refreshes itself while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingPolicy {
    /// 0 disables interval polling.
    pub interval_ms: u32,
    pub jitter_ms: u32,
    pub refetch_on_focus: bool,
}

impl Default for PollingPolicy {
    fn default() -> Self {
        Self {
            interval_ms: 30_000,
            jitter_ms: 0,
            refetch_on_focus: true,
        }
    }
}

impl PollingPolicy {
    /// Load on mount and on explicit user action only.
    pub fn disabled() -> Self {
        Self {
            interval_ms: 0,
            jitter_ms: 0,
            refetch_on_focus: false,
        }
    }

    pub fn with_jitter(mut self, jitter_ms: u32) -> Self {
        self.jitter_ms = jitter_ms;
        self
    }

    pub fn is_interval_enabled(&self) -> bool {
        self.interval_ms > 0
    }

    /// Delay before the next tick. `unit` is a random sample in [0, 1].
    pub fn next_delay(&self, unit: f64) -> u32 {
        let unit = if unit.is_nan() { 0.0 } else { unit.clamp(0.0, 1.0) };
        let jitter = (self.jitter_ms as f64 * unit).floor() as u32;
        self.interval_ms.saturating_add(jitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PollingPolicy::default();
        assert_eq!(policy.next_delay(0.7), 30_000);
        assert!(policy.is_interval_enabled());
        assert!(policy.refetch_on_focus);
    }

    #[test]
    fn test_jitter_is_bounded() {
        let policy = PollingPolicy::default().with_jitter(1_000);
        assert_eq!(policy.next_delay(0.0), 30_000);
        assert_eq!(policy.next_delay(0.5), 30_500);
        assert_eq!(policy.next_delay(1.0), 31_000);
        assert_eq!(policy.next_delay(7.0), 31_000);
        assert_eq!(policy.next_delay(-1.0), 30_000);
        assert_eq!(policy.next_delay(f64::NAN), 30_000);
    }

    #[test]
    fn test_disabled_policy() {
        let policy = PollingPolicy::disabled();
        assert!(!policy.is_interval_enabled());
        assert!(!policy.refetch_on_focus);
    }
}
