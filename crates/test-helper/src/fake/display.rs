use alloc::sync::{Arc, Weak};
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use display_info::{ConnectionProperties, Subscription, UpdateSink, raw};
use parking_lot::Mutex;

/// The state a [`FakeDisplay`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub width: u32,
    pub height: u32,
    pub vertical_frequency: u32,
    pub hdr: u32,
    pub hdcp: u32,
    pub audio_passthrough: bool,
    pub connected: bool,
}

impl Default for Mode {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            vertical_frequency: 60,
            hdr: raw::HDR_OFF,
            hdcp: raw::HDCP_UNENCRYPTED,
            audio_passthrough: false,
            connected: true,
        }
    }
}

/// An in-memory provider whose setters notify the subscribed sinks.
#[derive(Default)]
pub struct FakeDisplay {
    mode: Mutex<Mode>,
    sinks: Mutex<Vec<(Subscription, Weak<dyn UpdateSink>)>>,
    next_subscription: AtomicU64,
    reads: AtomicUsize,
    subscribes: AtomicUsize,
    unsubscribes: AtomicUsize,
}

impl FakeDisplay {
    pub fn new(mode: Mode) -> Arc<Self> {
        Arc::new(Self {
            mode: Mutex::new(mode),
            ..Self::default()
        })
    }

    pub fn mode(&self) -> Mode {
        *self.mode.lock()
    }

    /// Replaces the whole mode and emits one update.
    pub fn set_mode(&self, mode: Mode) {
        *self.mode.lock() = mode;
        self.emit();
    }

    pub fn set_hdr(&self, hdr: u32) {
        self.mode.lock().hdr = hdr;
        self.emit();
    }

    pub fn set_hdcp(&self, hdcp: u32) {
        self.mode.lock().hdcp = hdcp;
        self.emit();
    }

    pub fn set_resolution(&self, width: u32, height: u32) {
        {
            let mut mode = self.mode.lock();
            mode.width = width;
            mode.height = height;
        }
        self.emit();
    }

    pub fn set_connected(&self, connected: bool) {
        self.mode.lock().connected = connected;
        self.emit();
    }

    /// Notifies every live subscriber, the sink list is not locked while they run.
    pub fn emit(&self) {
        let sinks: Vec<Weak<dyn UpdateSink>> = self
            .sinks
            .lock()
            .iter()
            .map(|(_, sink)| Weak::clone(sink))
            .collect();

        for sink in sinks {
            if let Some(sink) = sink.upgrade() {
                sink.updated();
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sinks.lock().len()
    }

    /// Total property reads served.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Acquire)
    }

    pub fn subscribes(&self) -> usize {
        self.subscribes.load(Ordering::Acquire)
    }

    pub fn unsubscribes(&self) -> usize {
        self.unsubscribes.load(Ordering::Acquire)
    }

    fn read(&self) -> Mode {
        self.reads.fetch_add(1, Ordering::AcqRel);
        *self.mode.lock()
    }
}

impl ConnectionProperties for FakeDisplay {
    fn is_audio_passthrough(&self) -> bool {
        self.read().audio_passthrough
    }

    fn connected(&self) -> bool {
        self.read().connected
    }

    fn width(&self) -> u32 {
        self.read().width
    }

    fn height(&self) -> u32 {
        self.read().height
    }

    fn vertical_frequency(&self) -> u32 {
        self.read().vertical_frequency
    }

    fn hdr_type(&self) -> u32 {
        self.read().hdr
    }

    fn hdcp_protection(&self) -> u32 {
        self.read().hdcp
    }

    fn subscribe(&self, sink: Weak<dyn UpdateSink>) -> Subscription {
        let subscription = Subscription(self.next_subscription.fetch_add(1, Ordering::AcqRel));
        self.sinks.lock().push((subscription, sink));
        self.subscribes.fetch_add(1, Ordering::AcqRel);
        subscription
    }

    fn unsubscribe(&self, subscription: Subscription) {
        let mut sinks = self.sinks.lock();
        let before = sinks.len();
        sinks.retain(|(existing, _)| *existing != subscription);

        if sinks.len() != before {
            self.unsubscribes.fetch_add(1, Ordering::AcqRel);
        }
    }
}
