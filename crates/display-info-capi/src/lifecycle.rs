use core::ffi::{CStr, c_char, c_void};

use display_info::{CallbackId, DEFAULT_DISPLAY, DisplayProxy, Released};
use tracing::{debug, warn};

use crate::{
    ENUMERATION, REGISTRY,
    buffer::write_name,
    types::{UserData, displayinfo_type, displayinfo_updated_cb, handle_of, proxy},
};

/// Copies the name of the display at `index` into `buffer`.
///
/// Index `0` starts a fresh enumeration, later indices read from that snapshot. Returns
/// `false` and leaves `buffer` untouched past the end of the snapshot.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_enumerate(index: u8, length: u8, buffer: *mut c_char) -> bool {
    let Some(registry) = REGISTRY.get() else {
        return false;
    };

    let Some(name) = ENUMERATION.name_at(registry, usize::from(index)) else {
        return false;
    };

    unsafe { write_name(buffer, length, &name) };
    true
}

/// Acquires the display called `name`, null selects the default display.
///
/// Returns null when the display cannot be resolved or `name` is not UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_instance(name: *const c_char) -> *mut displayinfo_type {
    let Some(registry) = REGISTRY.get() else {
        return core::ptr::null_mut();
    };

    let name = if name.is_null() {
        DEFAULT_DISPLAY
    } else {
        match unsafe { CStr::from_ptr(name) }.to_str() {
            Ok(name) => name,
            Err(e) => {
                debug!("Display name is not UTF-8: {e}");
                return core::ptr::null_mut();
            }
        }
    };

    match registry.instance(name) {
        Some(display) => display.into_raw().cast_mut().cast(),
        None => core::ptr::null_mut(),
    }
}

/// Releases one reference, the display is destroyed with the last one.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_release(handle: *mut displayinfo_type) {
    let Some(registry) = REGISTRY.get() else {
        return;
    };

    let proxy = handle.cast::<DisplayProxy>().cast_const();

    match registry.display_from_raw(proxy) {
        Some(display) => {
            if display.release() == Released::Destroyed {
                debug!("Released last reference to {proxy:p}");
            }
        }
        None => warn!("Release of unknown display handle {proxy:p}"),
    }
}

/// Registers `callback` to run on every update of the display.
///
/// Registering the same callback again keeps the first registration and its `userdata`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_register(
    handle: *mut displayinfo_type,
    callback: Option<displayinfo_updated_cb>,
    userdata: *mut c_void,
) {
    let (Some(display), Some(callback)) = (unsafe { proxy(handle) }, callback) else {
        return;
    };

    let id = CallbackId::from_address(callback as usize);
    let userdata = UserData::new(userdata);

    display.register_as(id, move |display| {
        callback(handle_of(display), userdata.get());
    });
}

/// Removes a callback registered with [`displayinfo_register`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn displayinfo_unregister(
    handle: *mut displayinfo_type,
    callback: Option<displayinfo_updated_cb>,
) {
    let (Some(display), Some(callback)) = (unsafe { proxy(handle) }, callback) else {
        return;
    };

    display.unregister(CallbackId::from_address(callback as usize));
}
