//! C ABI entry points for hosts without Rust bindings
//!
//! Managed-code layers (C#, Kotlin, Swift) bind these by symbol name, so the
//! signatures are stable: raw `u8` discriminants in, nothing or a `bool` out.
//! A discriminant outside the declared enumeration is dropped without
//! triggering; it is a caller programming error, not a recoverable one.

use crate::bridge::HapticBridge;
use crate::feedback::{ImpactStyle, NotificationFeedback};

/// Trigger a notification-style pulse
///
/// `kind`: 0 = Success, 1 = Warning, 2 = Error. Other values are ignored.
#[unsafe(no_mangle)]
pub extern "C" fn bevy_haptic_notification(kind: u8) {
    if let Some(kind) = NotificationFeedback::from_u8(kind) {
        HapticBridge::shared().notification(kind);
    } else {
        log::debug!("ignoring out-of-range notification kind {kind}");
    }
}

/// Trigger a selection-changed pulse
#[unsafe(no_mangle)]
pub extern "C" fn bevy_haptic_selection() {
    HapticBridge::shared().selection();
}

/// Trigger an impact-style pulse
///
/// `style`: 0 = Light, 1 = Medium, 2 = Heavy, 3 = Soft, 4 = Rigid. Other
/// values are ignored.
#[unsafe(no_mangle)]
pub extern "C" fn bevy_haptic_impact(style: u8) {
    if let Some(style) = ImpactStyle::from_u8(style) {
        HapticBridge::shared().impact(style);
    } else {
        log::debug!("ignoring out-of-range impact style {style}");
    }
}

/// Whether the current device exposes haptic feedback
#[unsafe(no_mangle)]
pub extern "C" fn bevy_haptic_is_supported() -> bool {
    HapticBridge::shared().is_supported()
}

/// Globally enable or disable feedback triggers
#[unsafe(no_mangle)]
pub extern "C" fn bevy_haptic_set_enabled(enabled: bool) {
    HapticBridge::shared().set_enabled(enabled);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_return_normally_for_every_raw_value() {
        for kind in 0..=3u8 {
            bevy_haptic_notification(kind);
        }
        for style in 0..=5u8 {
            bevy_haptic_impact(style);
        }
        bevy_haptic_selection();
    }

    #[test]
    fn out_of_range_values_are_dropped() {
        bevy_haptic_notification(u8::MAX);
        bevy_haptic_impact(u8::MAX);
    }

    #[test]
    fn support_probe_is_stable() {
        assert_eq!(bevy_haptic_is_supported(), bevy_haptic_is_supported());
    }
}
