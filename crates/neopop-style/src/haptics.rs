//! Haptic feedback as an injected capability.
//!
//! Widgets fire haptic patterns on press; whether anything buzzes depends
//! entirely on the provider the host application hands them. There is no
//! ambient global and no load-time probing: a host with no haptics engine
//! passes [`NoopHaptics`] and everything proceeds silently.
//!
//! # Examples
//!
//! ```
//! use neopop_style::haptics::{HapticPattern, HapticsProvider, NoopHaptics};
//!
//! fn on_press(haptics: &dyn HapticsProvider) {
//!     haptics.trigger(HapticPattern::ImpactLight);
//! }
//!
//! on_press(&NoopHaptics);
//! ```

/// A haptic feedback pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticPattern {
    /// Light tap impact.
    ImpactLight,
    /// Medium tap impact.
    ImpactMedium,
    /// Heavy tap impact.
    ImpactHeavy,
    /// Success notification.
    NotificationSuccess,
    /// Warning notification.
    NotificationWarning,
    /// Error notification.
    NotificationError,
    /// Selection change tick.
    Selection,
}

/// A sink for haptic feedback requests.
///
/// Implementations must never fail loudly: a haptic that cannot fire is
/// dropped, not surfaced to the UI.
pub trait HapticsProvider {
    /// Fires the given pattern.
    fn trigger(&self, pattern: HapticPattern);
}

/// A provider that drops every request. The default when the host has no
/// haptics engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticsProvider for NoopHaptics {
    fn trigger(&self, _pattern: HapticPattern) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every pattern it receives.
    struct RecordingHaptics {
        fired: RefCell<Vec<HapticPattern>>,
    }

    impl RecordingHaptics {
        fn new() -> Self {
            Self {
                fired: RefCell::new(Vec::new()),
            }
        }
    }

    impl HapticsProvider for RecordingHaptics {
        fn trigger(&self, pattern: HapticPattern) {
            self.fired.borrow_mut().push(pattern);
        }
    }

    fn press_feedback(haptics: &dyn HapticsProvider) {
        haptics.trigger(HapticPattern::ImpactLight);
    }

    #[test]
    fn test_injected_provider_receives_patterns() {
        let haptics = RecordingHaptics::new();
        press_feedback(&haptics);
        haptics.trigger(HapticPattern::NotificationError);
        assert_eq!(
            *haptics.fired.borrow(),
            vec![HapticPattern::ImpactLight, HapticPattern::NotificationError]
        );
    }

    #[test]
    fn test_noop_is_usable_everywhere() {
        // Absence of a haptics engine is just another provider.
        press_feedback(&NoopHaptics);
    }
}
