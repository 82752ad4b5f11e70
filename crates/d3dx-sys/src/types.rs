//! C types used by the D3DX9 entry points.
//!
//! Interface types are opaque: they are only ever handled through
//! pointers. Value types mirror the Direct3D headers field by field.

use libc::{c_char, c_void};

use crate::error::HResult;

// Win32 widths, fixed regardless of the host's `long`.
pub type BYTE = u8;
pub type WORD = u16;
pub type DWORD = u32;
pub type UINT = u32;
pub type INT = i32;
pub type BOOL = i32;
pub type FLOAT = f32;
pub type CHAR = c_char;
pub type HRESULT = HResult;
pub type LPVOID = *mut c_void;
pub type LPCVOID = *const c_void;
pub type LPCSTR = *const c_char;

/// A packed `0xAARRGGBB` color.
pub type D3DCOLOR = DWORD;

/// A handle to an effect technique, parameter or pass. D3DX hands these
/// out; they are either a string pointer or an opaque token.
pub type D3DXHANDLE = LPCSTR;

macro_rules! opaque_interfaces {
    ($($name:ident => $pointer:ident),+ $(,)?) => {
        $(
            #[repr(C)]
            #[derive(Debug)]
            pub struct $name {
                _unused: [u8; 0],
            }

            pub type $pointer = *mut $name;
        )+
    };
}

opaque_interfaces! {
    IUnknown => LPUNKNOWN,
    IDirect3DDevice9 => LPDIRECT3DDEVICE9,
    IDirect3DBaseTexture9 => LPDIRECT3DBASETEXTURE9,
    IDirect3DTexture9 => LPDIRECT3DTEXTURE9,
    ID3DXFont => LPD3DXFONT,
    ID3DXSprite => LPD3DXSPRITE,
    ID3DXBaseEffect => LPD3DXBASEEFFECT,
    ID3DXEffect => LPD3DXEFFECT,
    ID3DXEffectPool => LPD3DXEFFECTPOOL,
    ID3DXInclude => LPD3DXINCLUDE,
    ID3DXBuffer => LPD3DXBUFFER,
    ID3DXBaseMesh => LPD3DXBASEMESH,
    ID3DXMesh => LPD3DXMESH,
}

/// `RECT` from `windef.h`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RECT {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RECT {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct D3DXVECTOR2 {
    pub x: FLOAT,
    pub y: FLOAT,
}

impl D3DXVECTOR2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn add_vec(&self, other: D3DXVECTOR2) -> D3DXVECTOR2 {
        D3DXVECTOR2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct D3DVECTOR {
    pub x: FLOAT,
    pub y: FLOAT,
    pub z: FLOAT,
}

impl D3DVECTOR {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

pub type D3DXVECTOR3 = D3DVECTOR;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct D3DXVECTOR4 {
    pub x: FLOAT,
    pub y: FLOAT,
    pub z: FLOAT,
    pub w: FLOAT,
}

impl D3DXVECTOR4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

/// Row-major 4x4 matrix, `m[row][column]`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct D3DMATRIX {
    pub m: [[FLOAT; 4]; 4],
}

impl D3DMATRIX {
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }
}

pub type D3DXMATRIX = D3DMATRIX;

/// Plane `ax + by + cz + d = 0`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct D3DXPLANE {
    pub a: FLOAT,
    pub b: FLOAT,
    pub c: FLOAT,
    pub d: FLOAT,
}

impl D3DXPLANE {
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct D3DCOLORVALUE {
    pub r: FLOAT,
    pub g: FLOAT,
    pub b: FLOAT,
    pub a: FLOAT,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct D3DXCOLOR {
    pub r: FLOAT,
    pub g: FLOAT,
    pub b: FLOAT,
    pub a: FLOAT,
}

impl D3DXCOLOR {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Scales the color channels, leaving alpha untouched.
    pub fn mult(&self, k: f32) -> D3DXCOLOR {
        D3DXCOLOR {
            r: k * self.r,
            g: k * self.g,
            b: k * self.b,
            a: self.a,
        }
    }
}

// isomorphic types
impl From<D3DCOLORVALUE> for D3DXCOLOR {
    fn from(color: D3DCOLORVALUE) -> Self {
        D3DXCOLOR {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

impl From<D3DXCOLOR> for D3DCOLORVALUE {
    fn from(color: D3DXCOLOR) -> Self {
        D3DCOLORVALUE {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct D3DMATERIAL9 {
    pub Diffuse: D3DCOLORVALUE,
    pub Ambient: D3DCOLORVALUE,
    pub Specular: D3DCOLORVALUE,
    pub Emissive: D3DCOLORVALUE,
    pub Power: FLOAT,
}

/// Material entry of the buffer returned by `D3DXLoadMeshFromX`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct D3DXMATERIAL {
    pub MatD3D: D3DMATERIAL9,
    pub pTextureFilename: *mut c_char,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct D3DVERTEXELEMENT9 {
    pub Stream: WORD,
    pub Offset: WORD,
    pub Type: BYTE,
    pub Method: BYTE,
    pub Usage: BYTE,
    pub UsageIndex: BYTE,
}

/// Preprocessor define passed to the effect compiler. Arrays of these are
/// terminated by an entry with both pointers null.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct D3DXMACRO {
    pub Name: LPCSTR,
    pub Definition: LPCSTR,
}

/// Maximum length of a font face name, including the terminating NUL.
pub const LF_FACESIZE: usize = 32;

/// ANSI font description consumed by `D3DXCreateFontIndirectA`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct D3DXFONT_DESCA {
    pub Height: INT,
    pub Width: UINT,
    pub Weight: UINT,
    pub MipLevels: UINT,
    pub Italic: BOOL,
    pub CharSet: BYTE,
    pub OutputPrecision: BYTE,
    pub Quality: BYTE,
    pub PitchAndFamily: BYTE,
    pub FaceName: [CHAR; LF_FACESIZE],
}

impl Default for D3DXFONT_DESCA {
    fn default() -> Self {
        Self {
            Height: 0,
            Width: 0,
            Weight: 0,
            MipLevels: 0,
            Italic: 0,
            CharSet: 0,
            OutputPrecision: 0,
            Quality: 0,
            PitchAndFamily: 0,
            FaceName: [0; LF_FACESIZE],
        }
    }
}

impl D3DXFONT_DESCA {
    /// Copies `name` into `FaceName`, truncating it so the terminating NUL
    /// always fits.
    pub fn set_face_name(&mut self, name: &[u8]) {
        self.FaceName = [0; LF_FACESIZE];
        let len = name.len().min(LF_FACESIZE - 1);
        for (dst, src) in self.FaceName.iter_mut().zip(&name[..len]) {
            *dst = *src as CHAR;
        }
    }

    /// Returns the face name up to its terminating NUL.
    pub fn face_name(&self) -> Vec<u8> {
        self.FaceName
            .iter()
            .take_while(|c| **c != 0)
            .map(|c| *c as u8)
            .collect()
    }
}

pub type D3DXFONT_DESC = D3DXFONT_DESCA;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn bindgen_test_layout_RECT() {
        assert_eq!(size_of::<RECT>(), 16usize);
        assert_eq!(align_of::<RECT>(), 4usize);
        assert_eq!(offset_of!(RECT, right), 8usize);
    }

    #[test]
    fn bindgen_test_layout_vectors() {
        assert_eq!(size_of::<D3DXVECTOR2>(), 8usize);
        assert_eq!(size_of::<D3DXVECTOR3>(), 12usize);
        assert_eq!(size_of::<D3DXVECTOR4>(), 16usize);
        assert_eq!(size_of::<D3DXPLANE>(), 16usize);
        assert_eq!(offset_of!(D3DXVECTOR4, w), 12usize);
        assert_eq!(offset_of!(D3DXPLANE, d), 12usize);
    }

    #[test]
    fn bindgen_test_layout_D3DMATRIX() {
        assert_eq!(size_of::<D3DMATRIX>(), 64usize);
        assert_eq!(align_of::<D3DMATRIX>(), 4usize);

        let matrix = D3DMATRIX::from_rows([
            [0.0, 1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0, 7.0],
            [8.0, 9.0, 10.0, 11.0],
            [12.0, 13.0, 14.0, 15.0],
        ]);
        let flat: &[f32] = bytemuck::cast_slice(&matrix.m);
        // _41 _42 _43 hold the translation in D3D's row-major layout.
        assert_eq!(&flat[12..15], &[12.0, 13.0, 14.0]);
    }

    #[test]
    fn bindgen_test_layout_D3DMATERIAL9() {
        assert_eq!(size_of::<D3DMATERIAL9>(), 68usize);
        assert_eq!(offset_of!(D3DMATERIAL9, Specular), 32usize);
        assert_eq!(offset_of!(D3DMATERIAL9, Power), 64usize);
    }

    #[test]
    fn bindgen_test_layout_D3DXMATERIAL() {
        assert_eq!(
            offset_of!(D3DXMATERIAL, pTextureFilename),
            size_of::<D3DMATERIAL9>().next_multiple_of(align_of::<*mut c_char>())
        );
    }

    #[test]
    fn bindgen_test_layout_D3DVERTEXELEMENT9() {
        assert_eq!(size_of::<D3DVERTEXELEMENT9>(), 8usize);
        assert_eq!(align_of::<D3DVERTEXELEMENT9>(), 2usize);
        assert_eq!(offset_of!(D3DVERTEXELEMENT9, Type), 4usize);
        assert_eq!(offset_of!(D3DVERTEXELEMENT9, UsageIndex), 7usize);
    }

    #[test]
    fn bindgen_test_layout_D3DXFONT_DESCA() {
        assert_eq!(size_of::<D3DXFONT_DESCA>(), 56usize);
        assert_eq!(align_of::<D3DXFONT_DESCA>(), 4usize);
        assert_eq!(offset_of!(D3DXFONT_DESCA, Italic), 16usize);
        assert_eq!(offset_of!(D3DXFONT_DESCA, CharSet), 20usize);
        assert_eq!(offset_of!(D3DXFONT_DESCA, FaceName), 24usize);
    }

    #[test]
    fn face_name_is_truncated_and_terminated() {
        let mut desc = D3DXFONT_DESCA::default();
        desc.set_face_name(b"Times New Roman");
        assert_eq!(desc.face_name(), b"Times New Roman");

        desc.set_face_name(&[b'x'; 40]);
        assert_eq!(desc.face_name().len(), LF_FACESIZE - 1);
        assert_eq!(desc.FaceName[LF_FACESIZE - 1], 0);

        desc.set_face_name(b"Arial");
        assert_eq!(desc.face_name(), b"Arial");
    }

    #[test]
    fn vector_and_color_helpers() {
        let sum = D3DXVECTOR2::new(1.0, 2.0).add_vec(D3DXVECTOR2::new(0.5, -4.0));
        assert_eq!(sum, D3DXVECTOR2::new(1.5, -2.0));

        let color = D3DXCOLOR::new(0.2, 0.4, 0.8, 0.5).mult(0.5);
        assert_eq!(color, D3DXCOLOR::new(0.1, 0.2, 0.4, 0.5));

        let value = D3DCOLORVALUE {
            r: 1.0,
            g: 0.0,
            b: 0.25,
            a: 1.0,
        };
        let color = D3DXCOLOR::from(value);
        assert_eq!(D3DCOLORVALUE::from(color), value);
    }
}
