//! Blobs returned by D3DX through `ID3DXBuffer`.

use crate::Result;

/// Reads `bytes` as a slice of `T`. Fails when the size or alignment of
/// the bytes does not fit `T`.
pub fn cast_bytes<T: bytemuck::Pod>(bytes: &[u8]) -> Result<&[T]> {
    // An empty slice may carry a dangling pointer of any alignment.
    if bytes.is_empty() {
        return Ok(&[]);
    }
    bytemuck::try_cast_slice(bytes).map_err(|e| {
        format!(
            "A buffer of {} bytes cannot be read as {}: {e}.",
            bytes.len(),
            std::any::type_name::<T>()
        )
        .into()
    })
}

/// Decodes compiler output, dropping the NUL terminators D3DX leaves at
/// the end.
pub fn text_from_bytes(bytes: &[u8]) -> String {
    let end = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(windows)]
pub use platform::*;

#[cfg(windows)]
mod platform {
    use super::{cast_bytes, text_from_bytes};
    use crate::{com::ComPtr, sys, Result};

    /// An `ID3DXBuffer`.
    #[derive(Debug)]
    pub struct Buffer(ComPtr<sys::ID3DXBuffer>);

    impl Buffer {
        /// Takes ownership of a buffer returned by D3DX.
        ///
        /// # Safety
        ///
        /// `raw` must be null or a buffer reference owned by the caller.
        pub unsafe fn from_raw(raw: sys::LPD3DXBUFFER) -> Option<Self> {
            ComPtr::from_raw(raw).map(Self)
        }

        /// Returns the start of the buffer's contents.
        pub fn as_ptr(&self) -> *mut libc::c_void {
            unsafe { sys::HELPERS_D3DX_ID3DXBuffer_GetBufferPointer(self.0.as_raw()) }
        }

        /// The size of the contents in bytes.
        pub fn len(&self) -> usize {
            unsafe { sys::HELPERS_D3DX_ID3DXBuffer_GetBufferSize(self.0.as_raw()) as usize }
        }

        /// Whether the buffer holds no bytes.
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// The contents of the buffer.
        pub fn as_bytes(&self) -> &[u8] {
            let data = self.as_ptr();
            let len = self.len();
            if data.is_null() || len == 0 {
                return &[];
            }
            unsafe { std::slice::from_raw_parts(data.cast(), len) }
        }

        /// The contents of the buffer as a slice of `T`, see [`cast_bytes`].
        pub fn as_slice<T: bytemuck::Pod>(&self) -> Result<&[T]> {
            cast_bytes(self.as_bytes())
        }

        /// The contents as text, see [`text_from_bytes`].
        pub fn to_string_lossy(&self) -> String {
            text_from_bytes(self.as_bytes())
        }

        /// Returns the underlying interface.
        pub fn as_raw(&self) -> sys::LPD3DXBUFFER {
            self.0.as_raw()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn trailing_nuls_are_trimmed() {
        assert_eq!(text_from_bytes(b"error X3000: syntax error\n\0"), "error X3000: syntax error\n");
        assert_eq!(text_from_bytes(b"warning\0\0\0"), "warning");
        assert_eq!(text_from_bytes(b"no terminator"), "no terminator");
    }

    #[test]
    fn interior_nuls_are_kept() {
        assert_eq!(text_from_bytes(b"a\0b\0"), "a\0b");
    }

    #[test]
    fn empty_text() {
        assert_eq!(text_from_bytes(b""), "");
        assert_eq!(text_from_bytes(b"\0\0"), "");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(text_from_bytes(b"x\xFFy\0"), "x\u{FFFD}y");
    }

    #[test]
    fn casts_check_the_size() {
        let words = [1u32, 2, 3];
        let bytes: &[u8] = bytemuck::cast_slice(&words);
        assert_eq!(cast_bytes::<u32>(bytes).unwrap(), &words);
        assert!(matches!(cast_bytes::<u32>(&bytes[..7]), Err(Error::Other(_))));
        assert!(cast_bytes::<u32>(&[]).unwrap().is_empty());
    }
}
