use core::mem::size_of_val;

/// Plain integer types whose every byte pattern is a valid value.
/// # Safety: implementors must have no padding and no invalid bit patterns,
/// otherwise the byte views below are undefined behaviour.
pub unsafe trait Element: Copy + 'static {
    /// `index` truncated into `Self`.
    fn wrapping_from_index(index: usize) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),+ $(,)?) => {$(
        unsafe impl Element for $t {
            #[inline(always)]
            fn wrapping_from_index(index: usize) -> Self {
                index as $t
            }
        }
    )+};
}

impl_element!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Byte length of a slice of elements.
#[inline(always)]
pub const fn byte_len<T: Element>(elements: &[T]) -> usize {
    elements.len() * core::mem::size_of::<T>()
}

#[inline(always)]
pub fn as_bytes<T: Element>(elements: &[T]) -> &[u8] {
    // SAFETY: Element types are padding-free, u8 has alignment 1
    unsafe { core::slice::from_raw_parts(elements.as_ptr().cast::<u8>(), size_of_val(elements)) }
}

#[inline(always)]
pub fn as_bytes_mut<T: Element>(elements: &mut [T]) -> &mut [u8] {
    let len = size_of_val(elements);
    // SAFETY: as above, and any byte pattern written back is a valid T
    unsafe { core::slice::from_raw_parts_mut(elements.as_mut_ptr().cast::<u8>(), len) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn byte_view_matches_native_order() {
        let words = [0x0403_0201u32, 0x0807_0605];
        let expected: Vec<u8> = words.iter().flat_map(|w| w.to_ne_bytes()).collect();
        assert_eq!(as_bytes(&words), expected.as_slice());
        assert_eq!(byte_len(&words), 8);
    }

    #[test]
    fn byte_view_of_bytes_is_identity() {
        let raw = hex!("deadbeef");
        assert_eq!(as_bytes(&raw), &hex!("deadbeef"));
    }

    #[test]
    fn writes_through_mut_view() {
        let mut words = [0i32; 2];
        as_bytes_mut(&mut words).fill(0xFF);
        assert_eq!(words, [-1, -1]);
    }

    #[test]
    fn wrapping_index() {
        assert_eq!(u8::wrapping_from_index(0x1FF), 0xFF);
        assert_eq!(i32::wrapping_from_index(7), 7);
    }
}
