use alloc::sync::Weak;

/// Receives change notifications from a [`ConnectionProperties`] provider.
pub trait UpdateSink: Send + Sync {
    /// One or more properties of the display changed.
    fn updated(&self);
}

/// Token identifying one sink subscribed to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(pub u64);

/// The remote object exposing the properties of a single display.
///
/// Every accessor is a round trip to the display service, implementations bound the call with
/// the transport timeout.
pub trait ConnectionProperties: Send + Sync {
    /// Whether audio is passed through to the display untouched.
    fn is_audio_passthrough(&self) -> bool;

    /// Whether a display is connected to the output.
    fn connected(&self) -> bool;

    /// Horizontal resolution in pixels.
    fn width(&self) -> u32;

    /// Vertical resolution in pixels.
    fn height(&self) -> u32;

    /// Vertical refresh rate in Hz.
    fn vertical_frequency(&self) -> u32;

    /// Raw HDR state, see [`crate::raw`].
    fn hdr_type(&self) -> u32;

    /// Raw HDCP state, see [`crate::raw`].
    fn hdcp_protection(&self) -> u32;

    /// Start delivering update events to `sink`.
    ///
    /// The provider only keeps the weak reference, a sink that can no longer be upgraded is
    /// skipped.
    fn subscribe(&self, sink: Weak<dyn UpdateSink>) -> Subscription;

    /// Stop delivering update events for a subscription. Unknown subscriptions are ignored.
    fn unsubscribe(&self, subscription: Subscription);
}
