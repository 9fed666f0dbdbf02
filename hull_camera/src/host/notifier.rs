/// Transient on-screen text.

/// Screen placement of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    UpperLeft,
    UpperCenter,
    UpperRight,
    LowerCenter,
}

pub trait Notifier {
    /// Show `text` for `duration` seconds
    fn post_screen_message(&mut self, text: &str, duration: f32, style: MessageStyle);
}
