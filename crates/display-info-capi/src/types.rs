use core::{ffi::c_void, ptr};

use display_info::{DisplayProxy, HdcpProtection, HdrType};

/// Opaque display handle.
#[repr(C)]
pub struct displayinfo_type {
    _private: [u8; 0],
}

/// Called after the properties of a display changed.
pub type displayinfo_updated_cb =
    extern "C" fn(session: *mut displayinfo_type, userdata: *mut c_void);

/// HDR mode codes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_enums)]
pub enum displayinfo_hdr_t {
    DISPLAYINFO_HDR_OFF = 0,
    DISPLAYINFO_HDR_10 = 1,
    DISPLAYINFO_HDR_10PLUS = 2,
    DISPLAYINFO_HDR_DOLBYVISION = 3,
    DISPLAYINFO_HDR_TECHNICOLOR = 4,
    DISPLAYINFO_HDR_UNKNOWN = 5,
}

impl From<HdrType> for displayinfo_hdr_t {
    fn from(value: HdrType) -> Self {
        match value {
            HdrType::Off => Self::DISPLAYINFO_HDR_OFF,
            HdrType::Hdr10 => Self::DISPLAYINFO_HDR_10,
            HdrType::Hdr10Plus => Self::DISPLAYINFO_HDR_10PLUS,
            HdrType::DolbyVision => Self::DISPLAYINFO_HDR_DOLBYVISION,
            HdrType::Technicolor => Self::DISPLAYINFO_HDR_TECHNICOLOR,
            HdrType::Unknown => Self::DISPLAYINFO_HDR_UNKNOWN,
        }
    }
}

/// HDCP protection codes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_enums)]
pub enum displayinfo_hdcp_protection_t {
    DISPLAYINFO_HDCP_UNENCRYPTED = 0,
    DISPLAYINFO_HDCP_1X = 1,
    DISPLAYINFO_HDCP_2X = 2,
    DISPLAYINFO_HDCP_UNKNOWN = 3,
}

impl From<HdcpProtection> for displayinfo_hdcp_protection_t {
    fn from(value: HdcpProtection) -> Self {
        match value {
            HdcpProtection::Unencrypted => Self::DISPLAYINFO_HDCP_UNENCRYPTED,
            HdcpProtection::Hdcp1x => Self::DISPLAYINFO_HDCP_1X,
            HdcpProtection::Hdcp2x => Self::DISPLAYINFO_HDCP_2X,
            HdcpProtection::Unknown => Self::DISPLAYINFO_HDCP_UNKNOWN,
        }
    }
}

/// Caller supplied context handed back to a callback.
#[derive(Clone, Copy)]
pub(crate) struct UserData(*mut c_void);

// The pointer is only passed back to the caller, never dereferenced here.
unsafe impl Send for UserData {}
unsafe impl Sync for UserData {}

impl UserData {
    pub fn new(pointer: *mut c_void) -> Self {
        Self(pointer)
    }

    pub fn get(self) -> *mut c_void {
        self.0
    }
}

/// The handle handed out for a proxy.
pub(crate) fn handle_of(proxy: &DisplayProxy) -> *mut displayinfo_type {
    ptr::from_ref(proxy).cast_mut().cast()
}

/// Borrows the proxy behind a handle.
///
/// # Safety
/// `handle` is null or was returned by `displayinfo_instance` and not yet released.
pub(crate) unsafe fn proxy<'a>(handle: *mut displayinfo_type) -> Option<&'a DisplayProxy> {
    unsafe { handle.cast::<DisplayProxy>().cast_const().as_ref() }
}
