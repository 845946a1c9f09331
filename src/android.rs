//! Android backend driving the system vibrator service over JNI

#![allow(unsafe_code)]

use jni::objects::{JObject, JValue};
use jni::{JNIEnv, JavaVM};
use log::debug;

use crate::backend::HapticBackend;
use crate::feedback::{ImpactStyle, NotificationFeedback};

// Predefined effect ids from android.os.VibrationEffect
const EFFECT_CLICK: i32 = 0;
const EFFECT_DOUBLE_CLICK: i32 = 1;
const EFFECT_TICK: i32 = 2;
const EFFECT_HEAVY_CLICK: i32 = 5;

/// Map a notification outcome to a predefined vibration effect
fn notification_effect(kind: NotificationFeedback) -> i32 {
    match kind {
        NotificationFeedback::Success => EFFECT_CLICK,
        NotificationFeedback::Warning => EFFECT_DOUBLE_CLICK,
        NotificationFeedback::Error => EFFECT_HEAVY_CLICK,
    }
}

/// Map an impact intensity to a predefined vibration effect
fn impact_effect(style: ImpactStyle) -> i32 {
    match style {
        ImpactStyle::Light | ImpactStyle::Soft => EFFECT_TICK,
        ImpactStyle::Medium | ImpactStyle::Rigid => EFFECT_CLICK,
        ImpactStyle::Heavy => EFFECT_HEAVY_CLICK,
    }
}

/// Capability provider backed by `android.os.Vibrator`
///
/// Reaches the vibrator service through the VM and activity context published
/// by `ndk-context`, which the embedding host initializes during startup.
/// Every JNI failure is swallowed into a no-op.
pub struct AndroidHapticBackend;

impl AndroidHapticBackend {
    fn vibrate(effect_id: i32) {
        if let Err(err) = Self::with_vibrator(|env, vibrator| {
            let effect = env
                .call_static_method(
                    "android/os/VibrationEffect",
                    "createPredefined",
                    "(I)Landroid/os/VibrationEffect;",
                    &[JValue::Int(effect_id)],
                )?
                .l()?;
            env.call_method(
                vibrator,
                "vibrate",
                "(Landroid/os/VibrationEffect;)V",
                &[JValue::Object(&effect)],
            )?;
            Ok(())
        }) {
            debug!("vibration effect {effect_id} dropped: {err:?}");
        }
    }

    fn has_vibrator() -> bool {
        Self::with_vibrator(|env, vibrator| {
            env.call_method(vibrator, "hasVibrator", "()Z", &[])?.z()
        })
        .unwrap_or(false)
    }

    /// Attach to the VM and run `f` against the vibrator service object
    fn with_vibrator<T>(
        f: impl FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> jni::errors::Result<T>,
    ) -> jni::errors::Result<T> {
        let ctx = ndk_context::android_context();
        let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }?;
        let mut env = vm.attach_current_thread()?;
        let context = unsafe { JObject::from_raw(ctx.context().cast()) };

        let result = (|| {
            let service_name = env.new_string("vibrator")?;
            let vibrator = env
                .call_method(
                    &context,
                    "getSystemService",
                    "(Ljava/lang/String;)Ljava/lang/Object;",
                    &[JValue::Object(&service_name)],
                )?
                .l()?;
            if vibrator.is_null() {
                return Err(jni::errors::Error::NullPtr("no vibrator service"));
            }
            f(&mut env, &vibrator)
        })();

        if result.is_err() && env.exception_check().unwrap_or(false) {
            let _ = env.exception_clear();
        }
        result
    }
}

impl HapticBackend for AndroidHapticBackend {
    fn notification(&self, kind: NotificationFeedback) {
        Self::vibrate(notification_effect(kind));
    }

    fn selection(&self) {
        Self::vibrate(EFFECT_TICK);
    }

    fn impact(&self, style: ImpactStyle) {
        Self::vibrate(impact_effect(style));
    }

    fn is_supported(&self) -> bool {
        Self::has_vibrator()
    }
}
