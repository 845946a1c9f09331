//! Backend seam between the bridge and the platform's haptic subsystem

use crate::feedback::{ImpactStyle, NotificationFeedback};

/// Trait for a platform haptic capability provider
///
/// Implementations translate the generic feedback intents into native trigger
/// calls. Every trigger is best-effort: an implementation must swallow platform
/// unavailability rather than surface it.
pub trait HapticBackend: Send + Sync {
    /// Fire a notification-style pulse for the given outcome
    fn notification(&self, kind: NotificationFeedback);

    /// Fire a selection-changed pulse
    fn selection(&self);

    /// Fire an impact-style pulse at the given intensity
    fn impact(&self, style: ImpactStyle);

    /// Whether the device exposes haptic feedback at all
    fn is_supported(&self) -> bool;
}

/// Backend for targets without a haptic subsystem (desktop, CI)
///
/// Reports no support and drops every trigger.
pub struct NullBackend;

impl HapticBackend for NullBackend {
    fn notification(&self, _kind: NotificationFeedback) {}

    fn selection(&self) {}

    fn impact(&self, _style: ImpactStyle) {}

    fn is_supported(&self) -> bool {
        false
    }
}

/// Select the backend for the compile target
///
/// Adding a platform means one new [`HapticBackend`] impl plus one arm here.
pub(crate) fn platform_backend() -> Box<dyn HapticBackend> {
    #[cfg(target_os = "ios")]
    {
        Box::new(crate::ios::IosHapticBackend)
    }

    #[cfg(target_os = "android")]
    {
        Box::new(crate::android::AndroidHapticBackend)
    }

    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        Box::new(NullBackend)
    }
}
