//! Tests for the C-callable surface
//!
//! All tests share the process-wide registry, so each uses its own display name and the module
//! catalog is fixed at install time.

use core::ffi::{CStr, c_char, c_void};
use std::{
    ptr,
    sync::{
        Arc, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use display_info::{Config, raw};
use display_info_capi::{
    copy_truncated, displayinfo_connected, displayinfo_enumerate, displayinfo_hdcp_protection,
    displayinfo_hdcp_protection_t, displayinfo_hdr, displayinfo_hdr_t, displayinfo_height,
    displayinfo_instance, displayinfo_is_audio_passthrough, displayinfo_name, displayinfo_register,
    displayinfo_release, displayinfo_type, displayinfo_unregister, displayinfo_vertical_frequency,
    displayinfo_width, install, install_with_config, registry,
};
use parking_lot::Mutex;
use test_helper::{FakeDirectory, FakeDisplay, Mode, logger::init_logger};

const DISPLAYS: [&str; 7] = [
    "DisplayInfo",
    "Lifecycle",
    "Callbacks",
    "Dedup",
    "Properties",
    "Strange",
    "\u{FFFD}",
];

struct Fixture {
    callbacks: Arc<FakeDisplay>,
    dedup: Arc<FakeDisplay>,
}

fn fixture() -> &'static Fixture {
    static FIXTURE: OnceLock<Fixture> = OnceLock::new();

    FIXTURE.get_or_init(|| {
        init_logger();

        let directory = FakeDirectory::new();
        let callbacks = FakeDisplay::new(Mode::default());
        let dedup = FakeDisplay::new(Mode::default());

        for name in DISPLAYS {
            let display = match name {
                "Callbacks" => Arc::clone(&callbacks),
                "Dedup" => Arc::clone(&dedup),
                "Properties" => FakeDisplay::new(Mode {
                    width: 3840,
                    height: 2160,
                    vertical_frequency: 50,
                    hdr: raw::HDR_TECHNICOLOR,
                    hdcp: raw::HDCP_2X,
                    audio_passthrough: true,
                    connected: true,
                }),
                "Strange" => FakeDisplay::new(Mode {
                    hdr: 42,
                    hdcp: 9,
                    ..Mode::default()
                }),
                _ => FakeDisplay::new(Mode::default()),
            };
            directory.add_display(name, display);

            if name == "Lifecycle" {
                directory.add_module("Controller");
            }
        }

        install_with_config(Config::default(), directory).unwrap();

        Fixture { callbacks, dedup }
    })
}

fn instance(name: &CStr) -> *mut displayinfo_type {
    unsafe { displayinfo_instance(name.as_ptr()) }
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<usize>>,
}

extern "C" fn record(handle: *mut displayinfo_type, userdata: *mut c_void) {
    let recorder = unsafe { &*userdata.cast::<Recorder>() };
    recorder.calls.lock().push(handle as usize);
}

static RECORDED_AGAIN: AtomicUsize = AtomicUsize::new(0);

extern "C" fn record_again(handle: *mut displayinfo_type, userdata: *mut c_void) {
    RECORDED_AGAIN.fetch_add(1, Ordering::AcqRel);
    record(handle, userdata);
}

fn userdata(recorder: &Recorder) -> *mut c_void {
    ptr::from_ref(recorder).cast_mut().cast()
}

#[test]
fn second_install_fails() {
    fixture();

    assert!(registry().is_some());
    assert!(install(FakeDirectory::new()).is_err());
}

#[test]
fn same_name_same_handle() {
    fixture();

    let first = instance(c"Lifecycle");
    let second = instance(c"Lifecycle");
    assert!(!first.is_null());
    assert_eq!(first, second);

    let registry = registry().unwrap();
    unsafe { displayinfo_release(first) };
    assert!(registry.contains("Lifecycle"));
    unsafe { displayinfo_release(second) };
    assert!(!registry.contains("Lifecycle"));
}

#[test]
fn null_name_is_default_display() {
    fixture();

    let by_null = unsafe { displayinfo_instance(ptr::null()) };
    let by_name = instance(c"DisplayInfo");
    assert!(!by_null.is_null());
    assert_eq!(by_null, by_name);

    unsafe {
        displayinfo_release(by_null);
        displayinfo_release(by_name);
    }
}

#[test]
fn unknown_name_is_null() {
    fixture();

    assert!(instance(c"NoSuchDisplay").is_null());
    assert!(!registry().unwrap().contains("NoSuchDisplay"));
}

#[test]
fn non_utf8_name_is_null() {
    fixture();

    // Neither name may fall back to the replacement character display.
    assert!(instance(c"\xff").is_null());
    assert!(instance(c"\xfe").is_null());
    assert!(!registry().unwrap().contains("\u{FFFD}"));

    let replacement = instance(c"\xef\xbf\xbd");
    assert!(!replacement.is_null());
    unsafe { displayinfo_release(replacement) };
}

#[test]
fn null_handles_are_ignored() {
    fixture();
    let null = ptr::null_mut();

    unsafe {
        displayinfo_release(null);
        displayinfo_register(null, Some(record), ptr::null_mut());
        displayinfo_unregister(null, Some(record));

        assert_eq!(displayinfo_width(null), 0);
        assert_eq!(displayinfo_height(null), 0);
        assert_eq!(displayinfo_vertical_frequency(null), 0);
        assert!(!displayinfo_connected(null));
        assert!(!displayinfo_is_audio_passthrough(null));
        assert_eq!(displayinfo_hdr(null), displayinfo_hdr_t::DISPLAYINFO_HDR_UNKNOWN);
        assert_eq!(
            displayinfo_hdcp_protection(null),
            displayinfo_hdcp_protection_t::DISPLAYINFO_HDCP_UNKNOWN
        );

        let mut buffer = [b'x' as c_char; 8];
        displayinfo_name(null, buffer.as_mut_ptr(), 8);
        assert!(buffer.iter().all(|byte| *byte == b'x' as c_char));
    }
}

#[test]
fn properties() {
    fixture();

    let handle = instance(c"Properties");
    assert!(!handle.is_null());

    unsafe {
        assert_eq!(displayinfo_width(handle), 3840);
        assert_eq!(displayinfo_height(handle), 2160);
        assert_eq!(displayinfo_vertical_frequency(handle), 50);
        assert!(displayinfo_connected(handle));
        assert!(displayinfo_is_audio_passthrough(handle));
        assert_eq!(
            displayinfo_hdr(handle),
            displayinfo_hdr_t::DISPLAYINFO_HDR_TECHNICOLOR
        );
        assert_eq!(
            displayinfo_hdcp_protection(handle),
            displayinfo_hdcp_protection_t::DISPLAYINFO_HDCP_2X
        );

        let mut buffer = [0 as c_char; 16];
        displayinfo_name(handle, buffer.as_mut_ptr(), 16);
        assert_eq!(CStr::from_ptr(buffer.as_ptr()), c"Properties");

        displayinfo_release(handle);
    }
}

#[test]
fn unknown_codes() {
    fixture();

    let handle = instance(c"Strange");

    unsafe {
        assert_eq!(displayinfo_hdr(handle), displayinfo_hdr_t::DISPLAYINFO_HDR_UNKNOWN);
        assert_eq!(
            displayinfo_hdcp_protection(handle),
            displayinfo_hdcp_protection_t::DISPLAYINFO_HDCP_UNKNOWN
        );

        displayinfo_release(handle);
    }
}

#[test]
fn name_is_truncated_without_terminator() {
    fixture();

    let handle = instance(c"Properties");

    unsafe {
        let mut buffer = [b'x' as c_char; 6];
        displayinfo_name(handle, buffer.as_mut_ptr(), 4);

        let expected = [b'P', b'r', b'o', b'p', b'x', b'x'].map(|byte| byte as c_char);
        assert_eq!(buffer, expected);

        displayinfo_release(handle);
    }
}

#[test]
fn callbacks_receive_handle_and_userdata() {
    let fixture = fixture();
    let handle = instance(c"Callbacks");

    let first = Recorder::default();
    let second = Recorder::default();

    unsafe {
        displayinfo_register(handle, Some(record), userdata(&first));
        displayinfo_register(handle, Some(record_again), userdata(&second));
    }

    fixture.callbacks.set_hdr(raw::HDR_10);

    assert_eq!(*first.calls.lock(), vec![handle as usize]);
    assert_eq!(*second.calls.lock(), vec![handle as usize]);

    unsafe { displayinfo_unregister(handle, Some(record)) };
    fixture.callbacks.emit();

    assert_eq!(first.calls.lock().len(), 1);
    assert_eq!(second.calls.lock().len(), 2);
    assert_eq!(RECORDED_AGAIN.load(Ordering::Acquire), 2);

    unsafe {
        displayinfo_unregister(handle, Some(record_again));
        displayinfo_release(handle);
    }
}

#[test]
fn same_callback_registers_once() {
    let fixture = fixture();
    let handle = instance(c"Dedup");

    let first = Recorder::default();
    let second = Recorder::default();

    unsafe {
        displayinfo_register(handle, Some(record), userdata(&first));
        displayinfo_register(handle, Some(record), userdata(&second));
        displayinfo_register(handle, None, userdata(&second));
    }

    fixture.dedup.emit();

    assert_eq!(first.calls.lock().len(), 1);
    assert!(second.calls.lock().is_empty());

    unsafe {
        displayinfo_unregister(handle, Some(record));
        displayinfo_release(handle);
    }

    // The proxy is gone, updates reach nobody.
    fixture.dedup.emit();
    assert_eq!(first.calls.lock().len(), 1);
}

// The enumeration snapshot is process wide, so the whole walk stays in one test.
#[test]
fn enumeration_walk() {
    fixture();

    let mut names = Vec::new();
    for index in 0..=u8::MAX {
        let mut buffer = [0 as c_char; 32];
        if !unsafe { displayinfo_enumerate(index, 32, buffer.as_mut_ptr()) } {
            break;
        }

        let name = unsafe { CStr::from_ptr(buffer.as_ptr()) };
        names.push(name.to_string_lossy().into_owned());
    }

    assert_eq!(names, DISPLAYS);

    let mut buffer = [b'x' as c_char; 4];
    let found = unsafe { displayinfo_enumerate(7, 4, buffer.as_mut_ptr()) };
    assert!(!found);
    assert!(buffer.iter().all(|byte| *byte == b'x' as c_char));

    // A short buffer gets a truncated, unterminated name.
    assert!(unsafe { displayinfo_enumerate(0, 4, buffer.as_mut_ptr()) });
    let expected = [b'D', b'i', b's', b'p'].map(|byte| byte as c_char);
    assert_eq!(buffer, expected);
}

#[test]
fn copy_truncated_semantics() {
    let mut buffer = [0xffu8; 8];
    copy_truncated(&mut buffer, "abc");
    assert_eq!(buffer, *b"abc\0\0\0\0\0");

    let mut buffer = [0xffu8; 3];
    copy_truncated(&mut buffer, "abcdef");
    assert_eq!(buffer, *b"abc");

    let mut buffer = [0xffu8; 5];
    copy_truncated(&mut buffer, "ab\0cd");
    assert_eq!(buffer, *b"ab\0\0\0");

    let mut buffer = [0xffu8; 4];
    copy_truncated(&mut buffer, "");
    assert_eq!(buffer, [0; 4]);

    let mut empty: [u8; 0] = [];
    copy_truncated(&mut empty, "abc");
}
