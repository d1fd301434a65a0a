use core::ffi::c_char;

use crate::{
    buffer::write_name,
    types::{displayinfo_hdcp_protection_t, displayinfo_hdr_t, displayinfo_type, proxy},
};

/// Copies the display name into `buffer`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_name(
    handle: *mut displayinfo_type,
    buffer: *mut c_char,
    length: u8,
) {
    if let Some(display) = unsafe { proxy(handle) } {
        unsafe { write_name(buffer, length, display.name()) };
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_is_audio_passthrough(handle: *mut displayinfo_type) -> bool {
    unsafe { proxy(handle) }.is_some_and(|display| display.is_audio_passthrough())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_connected(handle: *mut displayinfo_type) -> bool {
    unsafe { proxy(handle) }.is_some_and(|display| display.connected())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_width(handle: *mut displayinfo_type) -> u32 {
    unsafe { proxy(handle) }.map_or(0, |display| display.width())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_height(handle: *mut displayinfo_type) -> u32 {
    unsafe { proxy(handle) }.map_or(0, |display| display.height())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_vertical_frequency(handle: *mut displayinfo_type) -> u32 {
    unsafe { proxy(handle) }.map_or(0, |display| display.vertical_frequency())
}

/// The HDR mode, `DISPLAYINFO_HDR_UNKNOWN` for a null handle or an unrecognised mode.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_hdr(handle: *mut displayinfo_type) -> displayinfo_hdr_t {
    unsafe { proxy(handle) }.map_or(displayinfo_hdr_t::DISPLAYINFO_HDR_UNKNOWN, |display| {
        display.hdr().into()
    })
}

/// The HDCP level, `DISPLAYINFO_HDCP_UNKNOWN` for a null handle or an unrecognised level.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_hdcp_protection(
    handle: *mut displayinfo_type,
) -> displayinfo_hdcp_protection_t {
    unsafe { proxy(handle) }.map_or(
        displayinfo_hdcp_protection_t::DISPLAYINFO_HDCP_UNKNOWN,
        |display| display.hdcp_protection().into(),
    )
}
