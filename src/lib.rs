//! Device haptic feedback support for Bevy Engine
//!
//! This crate provides a thin bridge between an engine-side haptic request
//! (notification, selection, impact) and the host platform's haptic feedback
//! subsystem, plus a runtime capability probe. Triggers are synchronous and
//! fire-and-forget: on devices without haptic support every trigger is a
//! silent no-op.
//!
//! # Architecture
//!
//! - **HapticBridge**: process-wide singleton dispatching feedback intents
//! - **HapticBackend**: seam between the bridge and the platform subsystem
//!   (UIKit feedback generators on iOS, the system vibrator on Android)
//! - **HapticPlugin** / **Haptics**: Bevy-side integration for ECS callers
//! - `ffi`: C ABI entry points for hosts without Rust bindings

#![warn(missing_docs)]

mod backend;
mod bridge;
mod feedback;
mod ffi;
mod plugin;

#[cfg(target_os = "ios")]
pub mod ios;

#[cfg(target_os = "android")]
pub mod android;

pub use backend::*;
pub use bridge::*;
pub use feedback::*;
pub use ffi::*;
pub use plugin::*;

#[cfg(target_os = "ios")]
pub use ios::*;

#[cfg(target_os = "android")]
pub use android::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{backend::*, bridge::*, feedback::*, plugin::*};
}
