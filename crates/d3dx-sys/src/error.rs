//! Result codes and the error type shared by the D3DX crates.

/// An `HRESULT` as returned by D3DX. Negative values are failures.
#[repr(transparent)]
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HResult(pub i32);

/// Builds `MAKE_HRESULT(1, _FACD3D, code)`, the shape of every `D3DERR_*`
/// and `D3DXERR_*` value.
pub const fn make_d3d_hresult(code: u32) -> HResult {
    const FACILITY_D3D: u32 = 0x876;
    HResult(((1u32 << 31) | (FACILITY_D3D << 16) | code) as i32)
}

pub const S_OK: HResult = HResult(0);
pub const S_FALSE: HResult = HResult(1);
pub const E_NOTIMPL: HResult = HResult(0x8000_4001_u32 as i32);
pub const E_POINTER: HResult = HResult(0x8000_4003_u32 as i32);
pub const E_FAIL: HResult = HResult(0x8000_4005_u32 as i32);
pub const E_OUTOFMEMORY: HResult = HResult(0x8007_000E_u32 as i32);
pub const E_INVALIDARG: HResult = HResult(0x8007_0057_u32 as i32);

pub const D3DERR_OUTOFVIDEOMEMORY: HResult = make_d3d_hresult(380);
pub const D3DERR_WASSTILLDRAWING: HResult = make_d3d_hresult(540);
pub const D3DERR_DEVICELOST: HResult = make_d3d_hresult(2152);
pub const D3DERR_DEVICENOTRESET: HResult = make_d3d_hresult(2153);
pub const D3DERR_NOTAVAILABLE: HResult = make_d3d_hresult(2154);
pub const D3DERR_NOTFOUND: HResult = make_d3d_hresult(2150);
pub const D3DERR_MOREDATA: HResult = make_d3d_hresult(2151);
pub const D3DERR_INVALIDCALL: HResult = make_d3d_hresult(2156);

pub const D3DXERR_CANNOTMODIFYINDEXBUFFER: HResult = make_d3d_hresult(2900);
pub const D3DXERR_INVALIDMESH: HResult = make_d3d_hresult(2901);
pub const D3DXERR_CANNOTATTRSORT: HResult = make_d3d_hresult(2902);
pub const D3DXERR_SKINNINGNOTSUPPORTED: HResult = make_d3d_hresult(2903);
pub const D3DXERR_TOOMANYINFLUENCES: HResult = make_d3d_hresult(2904);
pub const D3DXERR_INVALIDDATA: HResult = make_d3d_hresult(2905);
pub const D3DXERR_LOADEDMESHASNODATA: HResult = make_d3d_hresult(2906);
pub const D3DXERR_DUPLICATENAMEDFRAGMENT: HResult = make_d3d_hresult(2907);
pub const D3DXERR_CANNOTREMOVELASTITEM: HResult = make_d3d_hresult(2908);

const KNOWN_CODES: &[(HResult, &str)] = &[
    (S_OK, "S_OK"),
    (S_FALSE, "S_FALSE"),
    (E_NOTIMPL, "E_NOTIMPL"),
    (E_POINTER, "E_POINTER"),
    (E_FAIL, "E_FAIL"),
    (E_OUTOFMEMORY, "E_OUTOFMEMORY"),
    (E_INVALIDARG, "E_INVALIDARG"),
    (D3DERR_OUTOFVIDEOMEMORY, "D3DERR_OUTOFVIDEOMEMORY"),
    (D3DERR_WASSTILLDRAWING, "D3DERR_WASSTILLDRAWING"),
    (D3DERR_DEVICELOST, "D3DERR_DEVICELOST"),
    (D3DERR_DEVICENOTRESET, "D3DERR_DEVICENOTRESET"),
    (D3DERR_NOTAVAILABLE, "D3DERR_NOTAVAILABLE"),
    (D3DERR_NOTFOUND, "D3DERR_NOTFOUND"),
    (D3DERR_MOREDATA, "D3DERR_MOREDATA"),
    (D3DERR_INVALIDCALL, "D3DERR_INVALIDCALL"),
    (D3DXERR_CANNOTMODIFYINDEXBUFFER, "D3DXERR_CANNOTMODIFYINDEXBUFFER"),
    (D3DXERR_INVALIDMESH, "D3DXERR_INVALIDMESH"),
    (D3DXERR_CANNOTATTRSORT, "D3DXERR_CANNOTATTRSORT"),
    (D3DXERR_SKINNINGNOTSUPPORTED, "D3DXERR_SKINNINGNOTSUPPORTED"),
    (D3DXERR_TOOMANYINFLUENCES, "D3DXERR_TOOMANYINFLUENCES"),
    (D3DXERR_INVALIDDATA, "D3DXERR_INVALIDDATA"),
    (D3DXERR_LOADEDMESHASNODATA, "D3DXERR_LOADEDMESHASNODATA"),
    (D3DXERR_DUPLICATENAMEDFRAGMENT, "D3DXERR_DUPLICATENAMEDFRAGMENT"),
    (D3DXERR_CANNOTREMOVELASTITEM, "D3DXERR_CANNOTREMOVELASTITEM"),
];

impl HResult {
    /// `SUCCEEDED(hr)`.
    pub const fn is_ok(self) -> bool {
        self.0 >= 0
    }

    /// `FAILED(hr)`.
    pub const fn is_err(self) -> bool {
        !self.is_ok()
    }

    /// The code as the unsigned value the headers spell it with.
    pub const fn code(self) -> u32 {
        self.0 as u32
    }

    /// The symbolic name of a known code, `"UNKNOWN"` otherwise.
    pub fn name(self) -> &'static str {
        KNOWN_CODES
            .iter()
            .find(|(code, _)| *code == self)
            .map(|(_, name)| *name)
            .unwrap_or("UNKNOWN")
    }
}

impl std::fmt::Debug for HResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HResult({} {:#010x})", self.name(), self.code())
    }
}

impl std::fmt::Display for HResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:#010x})", self.name(), self.code())
    }
}

/// Errors of the D3DX bindings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A D3DX call returned a failure code.
    #[error("D3DX call failed: {0}")]
    Internal(HResult),
    /// The effect compiler rejected a source file.
    #[error("Effect compilation failed with {result}:\n{log}")]
    Compilation {
        /// The code returned by the compiler.
        result: HResult,
        /// The compiler output.
        log: String,
    },
    /// Any other error raised on the Rust side of the bindings.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// The `HRESULT` behind this error, if D3DX produced it.
    pub fn result(&self) -> Option<HResult> {
        match self {
            Self::Internal(result) | Self::Compilation { result, .. } => Some(*result),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Other(value.to_owned())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

/// The result type of the D3DX bindings.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

impl From<HResult> for Result {
    fn from(value: HResult) -> Self {
        if value.is_ok() {
            Ok(())
        } else {
            Err(Error::Internal(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d3d_codes_match_the_headers() {
        assert_eq!(D3DERR_INVALIDCALL.code(), 0x8876_086C);
        assert_eq!(D3DERR_DEVICELOST.code(), 0x8876_0868);
        assert_eq!(D3DERR_OUTOFVIDEOMEMORY.code(), 0x8876_017C);
        assert_eq!(D3DXERR_INVALIDDATA.code(), 0x8876_0B59);
        assert_eq!(D3DXERR_CANNOTMODIFYINDEXBUFFER.code(), 0x8876_0B54);
    }

    #[test]
    fn success_codes_are_ok() {
        assert!(Result::from(S_OK).is_ok());
        assert!(Result::from(S_FALSE).is_ok());
        assert!(S_FALSE.is_ok());
        assert!(E_FAIL.is_err());
    }

    #[test]
    fn failure_codes_keep_their_value() {
        let error = Result::from(D3DXERR_INVALIDDATA).unwrap_err();
        assert_eq!(error, Error::Internal(D3DXERR_INVALIDDATA));
        assert_eq!(error.result(), Some(D3DXERR_INVALIDDATA));
        assert_eq!(
            error.to_string(),
            "D3DX call failed: D3DXERR_INVALIDDATA (0x88760b59)"
        );
    }

    #[test]
    fn unknown_codes_are_named_unknown() {
        let code = HResult(0x8123_4567_u32 as i32);
        assert_eq!(code.name(), "UNKNOWN");
        assert_eq!(format!("{code:?}"), "HResult(UNKNOWN 0x81234567)");
    }

    #[test]
    fn compilation_errors_carry_the_log() {
        let error = Error::Compilation {
            result: E_FAIL,
            log: "fx.fx(3,1): error X3000: syntax error".to_owned(),
        };
        assert_eq!(error.result(), Some(E_FAIL));
        assert!(error.to_string().contains("X3000"));
        assert_eq!(Error::from("boom").result(), None);
    }
}
