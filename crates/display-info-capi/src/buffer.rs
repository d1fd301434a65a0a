use core::ffi::c_char;

/// Copies `source` into `target` the way `strncpy` does.
///
/// Copying stops at the end of `target` or at the first NUL in `source`, the rest of `target`
/// is zero filled. A truncated copy is not terminated.
pub fn copy_truncated(target: &mut [u8], source: &str) {
    let source = source.as_bytes();
    let source = match source.iter().position(|byte| *byte == 0) {
        Some(end) => &source[..end],
        None => source,
    };

    let copied = source.len().min(target.len());
    target[..copied].copy_from_slice(&source[..copied]);
    target[copied..].fill(0);
}

/// # Safety
/// `buffer` is null or valid for `length` bytes of writes.
pub(crate) unsafe fn write_name(buffer: *mut c_char, length: u8, name: &str) {
    if buffer.is_null() || length == 0 {
        return;
    }

    let target =
        unsafe { core::slice::from_raw_parts_mut(buffer.cast::<u8>(), usize::from(length)) };
    copy_truncated(target, name);
}
