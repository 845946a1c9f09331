//! iOS backend driving the UIKit feedback generators

#![allow(unsafe_op_in_unsafe_fn)]
#![allow(unsafe_code)]
#![allow(unused_unsafe)]

use objc2::{MainThreadMarker, MainThreadOnly};
use objc2_foundation::NSProcessInfo;
use objc2_ui_kit::{
    UIDevice, UIImpactFeedbackGenerator, UIImpactFeedbackStyle, UINotificationFeedbackGenerator,
    UINotificationFeedbackType, UISelectionFeedbackGenerator, UIUserInterfaceIdiom,
};

use crate::backend::HapticBackend;
use crate::feedback::{ImpactStyle, NotificationFeedback};

/// Map a notification outcome to the UIKit feedback type
fn notification_type(kind: NotificationFeedback) -> UINotificationFeedbackType {
    match kind {
        NotificationFeedback::Success => UINotificationFeedbackType::Success,
        NotificationFeedback::Warning => UINotificationFeedbackType::Warning,
        NotificationFeedback::Error => UINotificationFeedbackType::Error,
    }
}

/// Map an impact intensity to the UIKit generator style
fn impact_style(style: ImpactStyle) -> UIImpactFeedbackStyle {
    match style {
        ImpactStyle::Light => UIImpactFeedbackStyle::Light,
        ImpactStyle::Medium => UIImpactFeedbackStyle::Medium,
        ImpactStyle::Heavy => UIImpactFeedbackStyle::Heavy,
        ImpactStyle::Soft => UIImpactFeedbackStyle::Soft,
        ImpactStyle::Rigid => UIImpactFeedbackStyle::Rigid,
    }
}

/// Capability provider backed by `UIFeedbackGenerator` and friends
///
/// UIKit's feedback generators are main-thread-only; triggers arriving on any
/// other thread are dropped. Generators are created, prepared, and fired per
/// call rather than cached.
pub struct IosHapticBackend;

impl IosHapticBackend {
    fn main_thread() -> Option<MainThreadMarker> {
        let mtm = MainThreadMarker::new();
        if mtm.is_none() {
            log::debug!("haptic trigger dropped off the main thread");
        }
        mtm
    }
}

impl HapticBackend for IosHapticBackend {
    fn notification(&self, kind: NotificationFeedback) {
        let Some(mtm) = Self::main_thread() else {
            return;
        };
        unsafe {
            let generator = UINotificationFeedbackGenerator::new(mtm);
            generator.prepare();
            generator.notificationOccurred(notification_type(kind));
        }
    }

    fn selection(&self) {
        let Some(mtm) = Self::main_thread() else {
            return;
        };
        unsafe {
            let generator = UISelectionFeedbackGenerator::new(mtm);
            generator.prepare();
            generator.selectionChanged();
        }
    }

    fn impact(&self, style: ImpactStyle) {
        let Some(mtm) = Self::main_thread() else {
            return;
        };
        unsafe {
            let generator = UIImpactFeedbackGenerator::initWithStyle(
                UIImpactFeedbackGenerator::alloc(mtm),
                impact_style(style),
            );
            generator.prepare();
            generator.impactOccurred();
        }
    }

    fn is_supported(&self) -> bool {
        // UIKit has no public taptic-engine query. Probe the handheld idiom
        // plus the OS version that introduced the generator API.
        let Some(mtm) = MainThreadMarker::new() else {
            return false;
        };
        let idiom = unsafe { UIDevice::currentDevice(mtm).userInterfaceIdiom() };
        if idiom != UIUserInterfaceIdiom::Phone {
            return false;
        }
        let version = unsafe { NSProcessInfo::processInfo().operatingSystemVersion() };
        version.majorVersion >= 10
    }
}
