//! Feedback intent vocabulary shared by all backends

/// Semantic outcome signaled by a notification-style haptic pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotificationFeedback {
    /// Task completed successfully
    Success = 0,
    /// Task produced a warning
    Warning = 1,
    /// Task failed
    Error = 2,
}

impl NotificationFeedback {
    /// Create a NotificationFeedback from a raw discriminant
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(NotificationFeedback::Success),
            1 => Some(NotificationFeedback::Warning),
            2 => Some(NotificationFeedback::Error),
            _ => None,
        }
    }
}

/// Intensity/sharpness of an impact-style haptic pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ImpactStyle {
    /// Collision between small, light interface elements
    Light = 0,
    /// Collision between medium-sized interface elements
    Medium = 1,
    /// Collision between large, heavy interface elements
    Heavy = 2,
    /// Collision between soft, flexible interface elements
    Soft = 3,
    /// Collision between rigid, inflexible interface elements
    Rigid = 4,
}

impl ImpactStyle {
    /// Create an ImpactStyle from a raw discriminant
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ImpactStyle::Light),
            1 => Some(ImpactStyle::Medium),
            2 => Some(ImpactStyle::Heavy),
            3 => Some(ImpactStyle::Soft),
            4 => Some(ImpactStyle::Rigid),
            _ => None,
        }
    }
}
