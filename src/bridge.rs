//! Process-wide bridge from feedback intents to the platform backend

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::backend::{HapticBackend, platform_backend};
use crate::feedback::{ImpactStyle, NotificationFeedback};

/// Global storage for the shared bridge instance
static SHARED_BRIDGE: OnceLock<HapticBridge> = OnceLock::new();

/// Dispatcher that forwards feedback intents to the platform's haptic subsystem
///
/// The bridge holds the backend selected for the compile target and a global
/// enable switch; beyond those it is stateless. Every trigger is synchronous
/// and fire-and-forget: when the device lacks haptic support or the switch is
/// off, the call is a silent no-op. No error is ever surfaced to the caller.
///
/// # Example
///
/// ```no_run
/// use bevy_haptic::{HapticBridge, ImpactStyle};
///
/// if HapticBridge::shared().is_supported() {
///     HapticBridge::shared().impact(ImpactStyle::Heavy);
/// }
/// ```
pub struct HapticBridge {
    backend: Box<dyn HapticBackend>,
    enabled: AtomicBool,
}

impl HapticBridge {
    /// Returns the process-wide bridge, creating it on first call
    ///
    /// All callers observe the same instance; near-simultaneous first calls
    /// race safely on the one-time initialization.
    pub fn shared() -> &'static HapticBridge {
        SHARED_BRIDGE.get_or_init(|| {
            let bridge = HapticBridge::with_backend(platform_backend());
            log::debug!(
                "haptic bridge initialized, supported: {}",
                bridge.is_supported()
            );
            bridge
        })
    }

    /// Creates a bridge over the given capability provider
    ///
    /// The shared instance always uses the platform backend; this constructor
    /// exists for hosts that manage their own provider and for tests.
    pub fn with_backend(backend: Box<dyn HapticBackend>) -> Self {
        Self {
            backend,
            enabled: AtomicBool::new(true),
        }
    }

    /// Request a notification-style pulse for the given outcome
    pub fn notification(&self, kind: NotificationFeedback) {
        if !self.should_trigger() {
            return;
        }
        self.backend.notification(kind);
    }

    /// Request a selection-changed pulse
    pub fn selection(&self) {
        if !self.should_trigger() {
            return;
        }
        self.backend.selection();
    }

    /// Request an impact-style pulse at the given intensity
    pub fn impact(&self, style: ImpactStyle) {
        if !self.should_trigger() {
            return;
        }
        self.backend.impact(style);
    }

    fn should_trigger(&self) -> bool {
        self.is_enabled() && self.backend.is_supported()
    }

    /// Whether the current device exposes haptic feedback
    ///
    /// Advisory: a `true` result does not guarantee a subsequent trigger will
    /// be perceptible (the user may have disabled system haptics). Unaffected
    /// by [`set_enabled`](Self::set_enabled).
    pub fn is_supported(&self) -> bool {
        self.backend.is_supported()
    }

    /// Globally enable or disable the three trigger operations
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Whether triggers are currently enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;

    /// Capability provider standing in for the platform, recording every trigger
    #[derive(Default)]
    struct CountingBackend {
        supported: bool,
        notifications: AtomicUsize,
        selections: AtomicUsize,
        heavy_impacts: AtomicUsize,
        other_impacts: AtomicUsize,
    }

    impl CountingBackend {
        fn trigger_count(&self) -> usize {
            self.notifications.load(Ordering::Relaxed)
                + self.selections.load(Ordering::Relaxed)
                + self.heavy_impacts.load(Ordering::Relaxed)
                + self.other_impacts.load(Ordering::Relaxed)
        }
    }

    impl HapticBackend for &'static CountingBackend {
        fn notification(&self, _kind: NotificationFeedback) {
            self.notifications.fetch_add(1, Ordering::Relaxed);
        }

        fn selection(&self) {
            self.selections.fetch_add(1, Ordering::Relaxed);
        }

        fn impact(&self, style: ImpactStyle) {
            if style == ImpactStyle::Heavy {
                self.heavy_impacts.fetch_add(1, Ordering::Relaxed);
            } else {
                self.other_impacts.fetch_add(1, Ordering::Relaxed);
            }
        }

        fn is_supported(&self) -> bool {
            self.supported
        }
    }

    fn counting_bridge(supported: bool) -> (HapticBridge, &'static CountingBackend) {
        let backend: &'static CountingBackend = Box::leak(Box::new(CountingBackend {
            supported,
            ..Default::default()
        }));
        (HapticBridge::with_backend(Box::new(backend)), backend)
    }

    #[test]
    fn shared_returns_the_same_instance() {
        let first = HapticBridge::shared() as *const HapticBridge;
        let second = HapticBridge::shared() as *const HapticBridge;
        assert_eq!(first, second);
    }

    #[test]
    fn shared_races_to_a_single_instance() {
        let handles: Vec<_> = (0..2)
            .map(|_| thread::spawn(|| HapticBridge::shared() as *const HapticBridge as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(addresses[0], addresses[1]);
    }

    #[test]
    fn is_supported_is_stable_across_calls() {
        let (bridge, _) = counting_bridge(true);
        let first = bridge.is_supported();
        for _ in 0..8 {
            assert_eq!(bridge.is_supported(), first);
        }
    }

    #[test]
    fn every_notification_kind_triggers_once_when_supported() {
        let (bridge, backend) = counting_bridge(true);
        for kind in [
            NotificationFeedback::Success,
            NotificationFeedback::Warning,
            NotificationFeedback::Error,
        ] {
            bridge.notification(kind);
        }
        assert_eq!(backend.notifications.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn every_impact_style_completes_under_both_support_conditions() {
        let styles = [
            ImpactStyle::Light,
            ImpactStyle::Medium,
            ImpactStyle::Heavy,
            ImpactStyle::Soft,
            ImpactStyle::Rigid,
        ];
        for supported in [true, false] {
            let (bridge, _) = counting_bridge(supported);
            for style in styles {
                bridge.impact(style);
            }
            bridge.selection();
        }
    }

    #[test]
    fn heavy_impact_reaches_the_backend_exactly_once() {
        let (bridge, backend) = counting_bridge(true);
        bridge.impact(ImpactStyle::Heavy);
        assert_eq!(backend.heavy_impacts.load(Ordering::Relaxed), 1);
        assert_eq!(backend.trigger_count(), 1);
    }

    #[test]
    fn unsupported_device_triggers_nothing() {
        let (bridge, backend) = counting_bridge(false);
        bridge.notification(NotificationFeedback::Error);
        assert!(!bridge.is_supported());
        assert_eq!(backend.trigger_count(), 0);
    }

    #[test]
    fn disabled_bridge_forwards_nothing() {
        let (bridge, backend) = counting_bridge(true);
        bridge.set_enabled(false);
        bridge.notification(NotificationFeedback::Success);
        bridge.selection();
        bridge.impact(ImpactStyle::Light);
        assert_eq!(backend.trigger_count(), 0);
        assert!(bridge.is_supported());

        bridge.set_enabled(true);
        bridge.selection();
        assert_eq!(backend.trigger_count(), 1);
    }
}
