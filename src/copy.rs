use crate::{
    element::{as_bytes, as_bytes_mut, byte_len, Element},
    error::{Error, Result},
};
use core::fmt;
use log::{debug, trace};

/// Resolves an optional copy size against the room both sides have.
#[inline]
fn resolve_size(size: Option<usize>, dst_len: usize, src_len: usize, unit: &str) -> Result<usize> {
    let available = dst_len.min(src_len);
    match size {
        Some(requested) if requested > available => Err(Error::SizeOutOfBounds(requested, available)),
        Some(requested) => Ok(requested),
        None => {
            if dst_len != src_len {
                debug!(
                    "buffer lengths differ (dst {} {unit}, src {} {unit}), copying {} {unit}",
                    dst_len, src_len, available
                );
            }
            Ok(available)
        }
    }
}

/// Block-copies the first `size` bytes of `src` into `dst`.
///
/// `size` is counted in bytes and defaults to the shorter byte length. A size
/// that is not a multiple of `size_of::<T>()` copies the trailing element
/// partially, in native byte order. Nothing is written on error.
#[inline]
pub fn bulk_copy<T: Element>(dst: &mut [T], src: &[T], size: Option<usize>) -> Result<()> {
    let size = resolve_size(size, byte_len(dst), byte_len(src), "bytes")?;
    trace!("bulk_copy {} bytes", size);
    as_bytes_mut(dst)[..size].copy_from_slice(&as_bytes(src)[..size]);
    Ok(())
}

/// Copies the first `size` elements of `src` into `dst`, one at a time.
///
/// `size` is counted in elements and defaults to the shorter length.
#[inline]
pub fn element_copy<T: Element>(dst: &mut [T], src: &[T], size: Option<usize>) -> Result<()> {
    let size = resolve_size(size, dst.len(), src.len(), "elements")?;
    trace!("element_copy {} elements", size);
    // SAFETY: size <= min(dst.len(), src.len()), and the borrows cannot alias
    unsafe {
        let mut src_ptr = src.as_ptr();
        let mut dst_ptr = dst.as_mut_ptr();
        let end_ptr = src_ptr.add(size);

        while src_ptr < end_ptr {
            *dst_ptr = *src_ptr;
            src_ptr = src_ptr.add(1);
            dst_ptr = dst_ptr.add(1);
        }
    }
    Ok(())
}

/// The two ways of moving a buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    Bulk,
    Element,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Bulk, Strategy::Element];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Bulk => "bulk_copy",
            Strategy::Element => "element_copy",
        }
    }

    /// Copies the whole common prefix of `src` into `dst`.
    #[inline]
    pub fn copy<T: Element>(self, dst: &mut [T], src: &[T]) -> Result<()> {
        match self {
            Strategy::Bulk => bulk_copy(dst, src, None),
            Strategy::Element => element_copy(dst, src, None),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
