//! Engine-side plugin that wires the haptic bridge into a Bevy app

use bevy::{
    app::{App, Plugin},
    ecs::resource::Resource,
};

use crate::bridge::HapticBridge;
use crate::feedback::{ImpactStyle, NotificationFeedback};

/// Plugin that provides haptic feedback support
///
/// Adding this plugin initializes the shared bridge eagerly (so the first
/// trigger does not pay the backend probe) and inserts the [`Haptics`]
/// resource for systems to trigger feedback through.
///
/// # Example
///
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_haptic::{HapticPlugin, Haptics, ImpactStyle};
///
/// fn on_collision(haptics: Res<Haptics>) {
///     haptics.impact(ImpactStyle::Heavy);
/// }
///
/// fn main() {
///     App::new()
///         .add_plugins((MinimalPlugins, HapticPlugin))
///         .add_systems(Update, on_collision)
///         .run();
/// }
/// ```
#[derive(Default)]
pub struct HapticPlugin;

impl Plugin for HapticPlugin {
    fn name(&self) -> &str {
        "bevy_haptic::HapticPlugin"
    }

    fn build(&self, app: &mut App) {
        let _ = HapticBridge::shared();
        app.init_resource::<Haptics>();
    }
}

/// Resource handle for triggering haptic feedback from systems
///
/// A zero-sized forwarder to the process-wide [`HapticBridge`]; every system
/// observes the same underlying instance. Triggers are fire-and-forget and
/// never fail; on devices without haptic support they are silent no-ops.
#[derive(Resource, Default)]
pub struct Haptics;

impl Haptics {
    /// Request a notification-style pulse for the given outcome
    pub fn notification(&self, kind: NotificationFeedback) {
        HapticBridge::shared().notification(kind);
    }

    /// Request a selection-changed pulse
    pub fn selection(&self) {
        HapticBridge::shared().selection();
    }

    /// Request an impact-style pulse at the given intensity
    pub fn impact(&self, style: ImpactStyle) {
        HapticBridge::shared().impact(style);
    }

    /// Whether the current device exposes haptic feedback
    pub fn is_supported(&self) -> bool {
        HapticBridge::shared().is_supported()
    }

    /// Globally enable or disable feedback triggers
    pub fn set_enabled(&self, enabled: bool) {
        HapticBridge::shared().set_enabled(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_inserts_the_haptics_resource() {
        let mut app = App::new();
        app.add_plugins(HapticPlugin);
        assert!(app.world().contains_resource::<Haptics>());
    }

    #[test]
    fn resource_triggers_complete_without_haptic_hardware() {
        let haptics = Haptics;
        haptics.notification(NotificationFeedback::Success);
        haptics.selection();
        haptics.impact(ImpactStyle::Light);
        // Test hosts have no haptic subsystem.
        assert!(!haptics.is_supported());
    }
}
