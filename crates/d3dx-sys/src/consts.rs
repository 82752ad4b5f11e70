//! Constants and flag values from the D3D9/D3DX9 headers.

use crate::types::{D3DCOLOR, D3DVERTEXELEMENT9, UINT};

pub const D3DX_PI: f32 = std::f32::consts::PI;

/// `D3DX_DEFAULT`: lets D3DX pick a value (mip levels, sizes, filters).
pub const D3DX_DEFAULT: UINT = u32::MAX;

// D3DXSHADER flags

pub const D3DXSHADER_DEBUG: u32 = 1 << 0;
pub const D3DXSHADER_SKIPVALIDATION: u32 = 1 << 1;
pub const D3DXSHADER_SKIPOPTIMIZATION: u32 = 1 << 2;
pub const D3DXSHADER_PACKMATRIX_ROWMAJOR: u32 = 1 << 3;
pub const D3DXSHADER_PACKMATRIX_COLUMNMAJOR: u32 = 1 << 4;
pub const D3DXSHADER_PARTIALPRECISION: u32 = 1 << 5;
pub const D3DXSHADER_FORCE_VS_SOFTWARE_NOOPT: u32 = 1 << 6;
pub const D3DXSHADER_FORCE_PS_SOFTWARE_NOOPT: u32 = 1 << 7;
pub const D3DXSHADER_NO_PRESHADER: u32 = 1 << 8;
pub const D3DXSHADER_AVOID_FLOW_CONTROL: u32 = 1 << 9;
pub const D3DXSHADER_PREFER_FLOW_CONTROL: u32 = 1 << 10;
pub const D3DXSHADER_ENABLE_BACKWARDS_COMPATIBILITY: u32 = 1 << 12;
pub const D3DXSHADER_IEEE_STRICTNESS: u32 = 1 << 13;
pub const D3DXSHADER_USE_LEGACY_D3DX9_31_DLL: u32 = 1 << 16;

// D3DXFX flags for ID3DXEffect::Begin

pub const D3DXFX_DONOTSAVESTATE: u32 = 1 << 0;
pub const D3DXFX_DONOTSAVESHADERSTATE: u32 = 1 << 1;
pub const D3DXFX_DONOTSAVESAMPLERSTATE: u32 = 1 << 2;

// D3DXSPRITE flags

pub const D3DXSPRITE_DONOTSAVESTATE: u32 = 1 << 0;
pub const D3DXSPRITE_DONOTMODIFY_RENDERSTATE: u32 = 1 << 1;
pub const D3DXSPRITE_OBJECTSPACE: u32 = 1 << 2;
pub const D3DXSPRITE_BILLBOARD: u32 = 1 << 3;
pub const D3DXSPRITE_ALPHABLEND: u32 = 1 << 4;
pub const D3DXSPRITE_SORT_TEXTURE: u32 = 1 << 5;
pub const D3DXSPRITE_SORT_DEPTH_FRONTTOBACK: u32 = 1 << 6;
pub const D3DXSPRITE_SORT_DEPTH_BACKTOFRONT: u32 = 1 << 7;
pub const D3DXSPRITE_DO_NOT_ADDREF_TEXTURE: u32 = 1 << 8;

// enum D3DXMESH

pub const D3DXMESH_32BIT: u32 = 0x001;
pub const D3DXMESH_DONOTCLIP: u32 = 0x002;
pub const D3DXMESH_POINTS: u32 = 0x004;
pub const D3DXMESH_RTPATCHES: u32 = 0x008;
pub const D3DXMESH_NPATCHES: u32 = 0x4000;
pub const D3DXMESH_VB_SYSTEMMEM: u32 = 0x010;
pub const D3DXMESH_VB_MANAGED: u32 = 0x020;
pub const D3DXMESH_VB_WRITEONLY: u32 = 0x040;
pub const D3DXMESH_VB_DYNAMIC: u32 = 0x080;
pub const D3DXMESH_IB_SYSTEMMEM: u32 = 0x100;
pub const D3DXMESH_IB_MANAGED: u32 = 0x200;
pub const D3DXMESH_IB_WRITEONLY: u32 = 0x400;
pub const D3DXMESH_IB_DYNAMIC: u32 = 0x800;
pub const D3DXMESH_SYSTEMMEM: u32 = 0x110;
pub const D3DXMESH_MANAGED: u32 = 0x220;
pub const D3DXMESH_WRITEONLY: u32 = 0x440;
pub const D3DXMESH_DYNAMIC: u32 = 0x880;

// enum D3DXMESHOPT

pub const D3DXMESHOPT_COMPACT: u32 = 0x0100_0000;
pub const D3DXMESHOPT_ATTRSORT: u32 = 0x0200_0000;
pub const D3DXMESHOPT_VERTEXCACHE: u32 = 0x0400_0000;
pub const D3DXMESHOPT_STRIPREORDER: u32 = 0x0800_0000;
pub const D3DXMESHOPT_IGNOREVERTS: u32 = 0x1000_0000;
pub const D3DXMESHOPT_DONOTSPLIT: u32 = 0x2000_0000;
pub const D3DXMESHOPT_DEVICEINDEPENDENT: u32 = 0x0040_0000;

// D3DLOCK flags

pub const D3DLOCK_READONLY: u32 = 0x0000_0010;
pub const D3DLOCK_DISCARD: u32 = 0x0000_2000;
pub const D3DLOCK_NOOVERWRITE: u32 = 0x0000_1000;
pub const D3DLOCK_NOSYSLOCK: u32 = 0x0000_0800;
pub const D3DLOCK_DONOTWAIT: u32 = 0x0000_4000;
pub const D3DLOCK_NO_DIRTY_UPDATE: u32 = 0x0000_8000;

// DrawText formats

pub const DT_TOP: u32 = 0x0000_0000;
pub const DT_LEFT: u32 = 0x0000_0000;
pub const DT_CENTER: u32 = 0x0000_0001;
pub const DT_RIGHT: u32 = 0x0000_0002;
pub const DT_VCENTER: u32 = 0x0000_0004;
pub const DT_BOTTOM: u32 = 0x0000_0008;
pub const DT_WORDBREAK: u32 = 0x0000_0010;
pub const DT_SINGLELINE: u32 = 0x0000_0020;
pub const DT_EXPANDTABS: u32 = 0x0000_0040;
pub const DT_NOCLIP: u32 = 0x0000_0100;
pub const DT_CALCRECT: u32 = 0x0000_0400;
pub const DT_RTLREADING: u32 = 0x0002_0000;

// Font weights, charsets, precision, quality and pitch (wingdi.h)

pub const FW_DONTCARE: u32 = 0;
pub const FW_THIN: u32 = 100;
pub const FW_LIGHT: u32 = 300;
pub const FW_NORMAL: u32 = 400;
pub const FW_MEDIUM: u32 = 500;
pub const FW_SEMIBOLD: u32 = 600;
pub const FW_BOLD: u32 = 700;
pub const FW_HEAVY: u32 = 900;

pub const ANSI_CHARSET: u8 = 0;
pub const DEFAULT_CHARSET: u8 = 1;
pub const SYMBOL_CHARSET: u8 = 2;

pub const OUT_DEFAULT_PRECIS: u8 = 0;
pub const OUT_TT_PRECIS: u8 = 4;
pub const OUT_TT_ONLY_PRECIS: u8 = 7;

pub const DEFAULT_QUALITY: u8 = 0;
pub const DRAFT_QUALITY: u8 = 1;
pub const PROOF_QUALITY: u8 = 2;
pub const NONANTIALIASED_QUALITY: u8 = 3;
pub const ANTIALIASED_QUALITY: u8 = 4;
pub const CLEARTYPE_QUALITY: u8 = 5;

pub const DEFAULT_PITCH: u8 = 0;
pub const FIXED_PITCH: u8 = 1;
pub const VARIABLE_PITCH: u8 = 2;

pub const FF_DONTCARE: u8 = 0 << 4;
pub const FF_ROMAN: u8 = 1 << 4;
pub const FF_SWISS: u8 = 2 << 4;
pub const FF_MODERN: u8 = 3 << 4;

// Vertex declarations

pub const MAXD3DDECLLENGTH: u32 = 64;
pub const MAX_FVF_DECL_SIZE: u32 = MAXD3DDECLLENGTH + 1;

// D3DDECLTYPE
pub const D3DDECLTYPE_FLOAT1: u8 = 0;
pub const D3DDECLTYPE_FLOAT2: u8 = 1;
pub const D3DDECLTYPE_FLOAT3: u8 = 2;
pub const D3DDECLTYPE_FLOAT4: u8 = 3;
pub const D3DDECLTYPE_D3DCOLOR: u8 = 4;
pub const D3DDECLTYPE_UBYTE4: u8 = 5;
pub const D3DDECLTYPE_SHORT2: u8 = 6;
pub const D3DDECLTYPE_SHORT4: u8 = 7;
pub const D3DDECLTYPE_UBYTE4N: u8 = 8;
pub const D3DDECLTYPE_SHORT2N: u8 = 9;
pub const D3DDECLTYPE_SHORT4N: u8 = 10;
pub const D3DDECLTYPE_USHORT2N: u8 = 11;
pub const D3DDECLTYPE_USHORT4N: u8 = 12;
pub const D3DDECLTYPE_UDEC3: u8 = 13;
pub const D3DDECLTYPE_DEC3N: u8 = 14;
pub const D3DDECLTYPE_FLOAT16_2: u8 = 15;
pub const D3DDECLTYPE_FLOAT16_4: u8 = 16;
pub const D3DDECLTYPE_UNUSED: u8 = 17;

// D3DDECLMETHOD
pub const D3DDECLMETHOD_DEFAULT: u8 = 0;

// D3DDECLUSAGE
pub const D3DDECLUSAGE_POSITION: u8 = 0;
pub const D3DDECLUSAGE_BLENDWEIGHT: u8 = 1;
pub const D3DDECLUSAGE_BLENDINDICES: u8 = 2;
pub const D3DDECLUSAGE_NORMAL: u8 = 3;
pub const D3DDECLUSAGE_PSIZE: u8 = 4;
pub const D3DDECLUSAGE_TEXCOORD: u8 = 5;
pub const D3DDECLUSAGE_TANGENT: u8 = 6;
pub const D3DDECLUSAGE_BINORMAL: u8 = 7;
pub const D3DDECLUSAGE_TESSFACTOR: u8 = 8;
pub const D3DDECLUSAGE_POSITIONT: u8 = 9;
pub const D3DDECLUSAGE_COLOR: u8 = 10;
pub const D3DDECLUSAGE_FOG: u8 = 11;
pub const D3DDECLUSAGE_DEPTH: u8 = 12;
pub const D3DDECLUSAGE_SAMPLE: u8 = 13;

/// `D3DDECL_END()`: terminates every vertex declaration.
pub const D3DDECL_END: D3DVERTEXELEMENT9 = D3DVERTEXELEMENT9 {
    Stream: 0xFF,
    Offset: 0,
    Type: D3DDECLTYPE_UNUSED,
    Method: 0,
    Usage: 0,
    UsageIndex: 0,
};

/// Size in bytes of one element of the given `D3DDECLTYPE`, `None` for
/// `D3DDECLTYPE_UNUSED` and unknown values.
pub const fn decl_type_size(decl_type: u8) -> Option<u16> {
    Some(match decl_type {
        D3DDECLTYPE_FLOAT1 => 4,
        D3DDECLTYPE_FLOAT2 => 8,
        D3DDECLTYPE_FLOAT3 => 12,
        D3DDECLTYPE_FLOAT4 => 16,
        D3DDECLTYPE_D3DCOLOR | D3DDECLTYPE_UBYTE4 | D3DDECLTYPE_UBYTE4N => 4,
        D3DDECLTYPE_SHORT2 | D3DDECLTYPE_SHORT2N | D3DDECLTYPE_USHORT2N => 4,
        D3DDECLTYPE_SHORT4 | D3DDECLTYPE_SHORT4N | D3DDECLTYPE_USHORT4N => 8,
        D3DDECLTYPE_UDEC3 | D3DDECLTYPE_DEC3N => 4,
        D3DDECLTYPE_FLOAT16_2 => 4,
        D3DDECLTYPE_FLOAT16_4 => 8,
        _ => return None,
    })
}

// D3DCOLOR packing (d3d9types.h macros)

#[allow(non_snake_case)]
pub const fn D3DCOLOR_ARGB(a: u8, r: u8, g: u8, b: u8) -> D3DCOLOR {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[allow(non_snake_case)]
pub const fn D3DCOLOR_RGBA(r: u8, g: u8, b: u8, a: u8) -> D3DCOLOR {
    D3DCOLOR_ARGB(a, r, g, b)
}

#[allow(non_snake_case)]
pub const fn D3DCOLOR_XRGB(r: u8, g: u8, b: u8) -> D3DCOLOR {
    D3DCOLOR_ARGB(0xFF, r, g, b)
}

/// `D3DCOLOR_COLORVALUE`: each channel is scaled to `[0, 255]` and
/// truncated. Like the header macro it does not clamp; values outside
/// `[0, 1]` wrap to their low byte.
#[allow(non_snake_case)]
pub fn D3DCOLOR_COLORVALUE(r: f32, g: f32, b: f32, a: f32) -> D3DCOLOR {
    let channel = |v: f32| ((v * 255.0) as i64 & 0xFF) as u8;
    D3DCOLOR_ARGB(channel(a), channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_pack_as_argb() {
        assert_eq!(D3DCOLOR_ARGB(0x80, 0x11, 0x22, 0x33), 0x8011_2233);
        assert_eq!(D3DCOLOR_RGBA(0x11, 0x22, 0x33, 0x80), 0x8011_2233);
        assert_eq!(D3DCOLOR_XRGB(0, 0, 0), 0xFF00_0000);
        assert_eq!(D3DCOLOR_COLORVALUE(1.0, 0.0, 0.0, 1.0), 0xFFFF_0000);
    }

    #[test]
    fn color_value_truncates_and_wraps() {
        assert_eq!(D3DCOLOR_COLORVALUE(0.5, 0.5, 0.5, 1.0), 0xFF7F_7F7F);
        // 2.0 * 255 = 510 = 0x1FE, -1.0 * 255 = -255 = ..0x01.
        assert_eq!(D3DCOLOR_COLORVALUE(2.0, -1.0, 1.0, 0.0), 0x00FE_01FF);
    }

    #[test]
    fn mesh_memory_flags_combine_vertex_and_index_pools() {
        assert_eq!(D3DXMESH_SYSTEMMEM, D3DXMESH_VB_SYSTEMMEM | D3DXMESH_IB_SYSTEMMEM);
        assert_eq!(D3DXMESH_MANAGED, D3DXMESH_VB_MANAGED | D3DXMESH_IB_MANAGED);
        assert_eq!(D3DXMESH_WRITEONLY, D3DXMESH_VB_WRITEONLY | D3DXMESH_IB_WRITEONLY);
        assert_eq!(D3DXMESH_DYNAMIC, D3DXMESH_VB_DYNAMIC | D3DXMESH_IB_DYNAMIC);
    }

    #[test]
    fn declaration_terminator() {
        assert_eq!(MAX_FVF_DECL_SIZE, 65);
        assert_eq!(D3DDECL_END.Stream, 0xFF);
        assert_eq!(D3DDECL_END.Type, D3DDECLTYPE_UNUSED);
        assert_eq!(decl_type_size(D3DDECL_END.Type), None);
        assert_eq!(decl_type_size(D3DDECLTYPE_FLOAT3), Some(12));
        assert_eq!(decl_type_size(D3DDECLTYPE_D3DCOLOR), Some(4));
    }
}
