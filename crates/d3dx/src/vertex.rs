//! Vertex declarations for meshes.

use crate::{
    sys::{self, D3DVERTEXELEMENT9},
    Result,
};

/// The data type of a vertex element (`D3DDECLTYPE`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DeclType {
    /// One `f32`.
    Float1 = sys::D3DDECLTYPE_FLOAT1,
    /// Two `f32`s.
    Float2 = sys::D3DDECLTYPE_FLOAT2,
    /// Three `f32`s.
    Float3 = sys::D3DDECLTYPE_FLOAT3,
    /// Four `f32`s.
    Float4 = sys::D3DDECLTYPE_FLOAT4,
    /// A packed `D3DCOLOR`, expanded to RGBA.
    Color = sys::D3DDECLTYPE_D3DCOLOR,
    /// Four `u8`s.
    UByte4 = sys::D3DDECLTYPE_UBYTE4,
    /// Two `i16`s.
    Short2 = sys::D3DDECLTYPE_SHORT2,
    /// Four `i16`s.
    Short4 = sys::D3DDECLTYPE_SHORT4,
    /// Four `u8`s normalized to `[0, 1]`.
    UByte4N = sys::D3DDECLTYPE_UBYTE4N,
    /// Two `i16`s normalized to `[-1, 1]`.
    Short2N = sys::D3DDECLTYPE_SHORT2N,
    /// Four `i16`s normalized to `[-1, 1]`.
    Short4N = sys::D3DDECLTYPE_SHORT4N,
    /// Two `u16`s normalized to `[0, 1]`.
    UShort2N = sys::D3DDECLTYPE_USHORT2N,
    /// Four `u16`s normalized to `[0, 1]`.
    UShort4N = sys::D3DDECLTYPE_USHORT4N,
    /// Three unsigned 10-bit values.
    UDec3 = sys::D3DDECLTYPE_UDEC3,
    /// Three signed normalized 10-bit values.
    Dec3N = sys::D3DDECLTYPE_DEC3N,
    /// Two half floats.
    Float16x2 = sys::D3DDECLTYPE_FLOAT16_2,
    /// Four half floats.
    Float16x4 = sys::D3DDECLTYPE_FLOAT16_4,
}

impl DeclType {
    /// The size of the element in bytes.
    pub const fn size(self) -> u16 {
        match sys::decl_type_size(self as u8) {
            Some(size) => size,
            None => 0,
        }
    }
}

/// What a vertex element is used for (`D3DDECLUSAGE`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DeclUsage {
    /// Untransformed position.
    Position = sys::D3DDECLUSAGE_POSITION,
    /// Skinning weights.
    BlendWeight = sys::D3DDECLUSAGE_BLENDWEIGHT,
    /// Skinning matrix indices.
    BlendIndices = sys::D3DDECLUSAGE_BLENDINDICES,
    /// Vertex normal.
    Normal = sys::D3DDECLUSAGE_NORMAL,
    /// Point sprite size.
    PointSize = sys::D3DDECLUSAGE_PSIZE,
    /// Texture coordinates.
    TexCoord = sys::D3DDECLUSAGE_TEXCOORD,
    /// Tangent vector.
    Tangent = sys::D3DDECLUSAGE_TANGENT,
    /// Binormal vector.
    Binormal = sys::D3DDECLUSAGE_BINORMAL,
    /// Tessellation factor.
    TessFactor = sys::D3DDECLUSAGE_TESSFACTOR,
    /// Transformed screen-space position.
    PositionT = sys::D3DDECLUSAGE_POSITIONT,
    /// Diffuse or specular color.
    Color = sys::D3DDECLUSAGE_COLOR,
    /// Fog blend value.
    Fog = sys::D3DDECLUSAGE_FOG,
    /// Depth value.
    Depth = sys::D3DDECLUSAGE_DEPTH,
    /// Sampler data.
    Sample = sys::D3DDECLUSAGE_SAMPLE,
}

/// Builds a single-stream vertex declaration with tightly packed elements.
///
/// ```
/// use d3dx::{DeclType, DeclUsage, VertexDeclaration};
///
/// let declaration = VertexDeclaration::new()
///     .element(DeclType::Float3, DeclUsage::Position, 0)
///     .element(DeclType::Float3, DeclUsage::Normal, 0)
///     .element(DeclType::Float2, DeclUsage::TexCoord, 0);
/// assert_eq!(declaration.stride(), 32);
/// assert_eq!(declaration.build().unwrap().len(), 4);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VertexDeclaration {
    elements: Vec<(DeclType, DeclUsage, u8)>,
}

impl VertexDeclaration {
    /// An empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element right after the previous one.
    pub fn element(mut self, decl_type: DeclType, usage: DeclUsage, usage_index: u8) -> Self {
        self.elements.push((decl_type, usage, usage_index));
        self
    }

    /// The size of one vertex in bytes.
    pub fn stride(&self) -> u32 {
        self.elements
            .iter()
            .map(|(decl_type, ..)| u32::from(decl_type.size()))
            .sum()
    }

    /// The elements followed by the `D3DDECL_END` terminator.
    ///
    /// Fails when there are more than `MAXD3DDECLLENGTH` elements.
    pub fn build(&self) -> Result<Vec<D3DVERTEXELEMENT9>> {
        if self.elements.len() > sys::MAXD3DDECLLENGTH as usize {
            return Err(format!(
                "A vertex declaration has at most {} elements, got {}.",
                sys::MAXD3DDECLLENGTH,
                self.elements.len()
            )
            .into());
        }
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        // At most 64 elements of at most 16 bytes each.
        let mut offset = 0u16;
        for &(decl_type, usage, usage_index) in &self.elements {
            elements.push(D3DVERTEXELEMENT9 {
                Stream: 0,
                Offset: offset,
                Type: decl_type as u8,
                Method: sys::D3DDECLMETHOD_DEFAULT,
                Usage: usage as u8,
                UsageIndex: usage_index,
            });
            offset += decl_type.size();
        }
        elements.push(sys::D3DDECL_END);
        Ok(elements)
    }
}

/// The size of a vertex of stream 0 described by `declaration`, which may
/// or may not be terminated.
pub fn stride_of(declaration: &[D3DVERTEXELEMENT9]) -> u32 {
    declaration
        .iter()
        .take_while(|element| **element != sys::D3DDECL_END)
        .filter(|element| element.Stream == 0)
        .filter_map(|element| {
            sys::decl_type_size(element.Type)
                .map(|size| u32::from(element.Offset) + u32::from(size))
        })
        .max()
        .unwrap_or(0)
}

/// The number of elements of `declaration` up to and including its
/// `D3DDECL_END` terminator, or all of them when there is none.
pub fn terminated_len(declaration: &[D3DVERTEXELEMENT9]) -> usize {
    declaration
        .iter()
        .position(|element| *element == sys::D3DDECL_END)
        .map_or(declaration.len(), |end| end + 1)
}

/// Checks that a declaration can be handed to D3DX, which reads up to the
/// terminator: at most `MAX_FVF_DECL_SIZE` entries, the last being
/// `D3DDECL_END`.
pub fn check_declaration(declaration: &[D3DVERTEXELEMENT9]) -> Result {
    if declaration.len() > sys::MAX_FVF_DECL_SIZE as usize {
        return Err(format!(
            "A vertex declaration has at most {} elements, got {}.",
            sys::MAX_FVF_DECL_SIZE,
            declaration.len()
        )
        .into());
    }
    match declaration.last() {
        Some(last) if *last == sys::D3DDECL_END => Ok(()),
        _ => Err("The vertex declaration is not terminated by D3DDECL_END.".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_accumulate() {
        let elements = VertexDeclaration::new()
            .element(DeclType::Float3, DeclUsage::Position, 0)
            .element(DeclType::Color, DeclUsage::Color, 0)
            .element(DeclType::Float2, DeclUsage::TexCoord, 0)
            .element(DeclType::Float2, DeclUsage::TexCoord, 1)
            .build()
            .unwrap();

        let offsets: Vec<u16> = elements.iter().map(|e| e.Offset).collect();
        assert_eq!(offsets, [0, 12, 16, 24, 0]);
        assert_eq!(elements[3].UsageIndex, 1);
        assert_eq!(elements[1].Type, sys::D3DDECLTYPE_D3DCOLOR);
        assert_eq!(elements.last(), Some(&sys::D3DDECL_END));
    }

    #[test]
    fn stride_matches_the_declaration() {
        let declaration = VertexDeclaration::new()
            .element(DeclType::Float3, DeclUsage::Position, 0)
            .element(DeclType::Float3, DeclUsage::Normal, 0);
        assert_eq!(declaration.stride(), 24);
        assert_eq!(stride_of(&declaration.build().unwrap()), 24);
        assert_eq!(stride_of(&[]), 0);
        assert_eq!(stride_of(&[sys::D3DDECL_END]), 0);
    }

    #[test]
    fn stride_of_large_offsets() {
        let element = D3DVERTEXELEMENT9 {
            Offset: u16::MAX - 1,
            Type: sys::D3DDECLTYPE_FLOAT4,
            ..Default::default()
        };
        assert_eq!(stride_of(&[element, sys::D3DDECL_END]), u32::from(u16::MAX) + 15);
    }

    #[test]
    fn declarations_are_capped() {
        let full = (0..sys::MAXD3DDECLLENGTH).fold(VertexDeclaration::new(), |declaration, _| {
            declaration.element(DeclType::Float4, DeclUsage::TexCoord, 0)
        });
        let elements = full.build().unwrap();
        assert_eq!(elements.len(), sys::MAX_FVF_DECL_SIZE as usize);
        assert_eq!(elements[63].Offset, 63 * 16);
        assert!(check_declaration(&elements).is_ok());

        let over = full.element(DeclType::Float1, DeclUsage::Fog, 0);
        assert_eq!(over.stride(), 64 * 16 + 4);
        assert!(matches!(over.build(), Err(crate::Error::Other(_))));

        let huge = (0..5000).fold(VertexDeclaration::new(), |declaration, _| {
            declaration.element(DeclType::Float4, DeclUsage::TexCoord, 0)
        });
        assert_eq!(huge.stride(), 80_000);
        assert!(huge.build().is_err());
    }

    #[test]
    fn declarations_must_be_terminated() {
        let position = VertexDeclaration::new()
            .element(DeclType::Float3, DeclUsage::Position, 0)
            .build()
            .unwrap();
        assert!(check_declaration(&position).is_ok());
        assert!(check_declaration(&position[..1]).is_err());
        assert!(check_declaration(&[]).is_err());

        let too_long = vec![sys::D3DDECL_END; sys::MAX_FVF_DECL_SIZE as usize + 1];
        assert!(matches!(check_declaration(&too_long), Err(crate::Error::Other(_))));
    }

    #[test]
    fn terminator_ends_the_declaration() {
        let mut elements = [sys::D3DDECL_END; sys::MAX_FVF_DECL_SIZE as usize];
        assert_eq!(terminated_len(&elements), 1);

        elements[0] = D3DVERTEXELEMENT9 {
            Type: sys::D3DDECLTYPE_FLOAT3,
            Usage: sys::D3DDECLUSAGE_POSITION,
            ..Default::default()
        };
        elements[1] = D3DVERTEXELEMENT9 {
            Offset: 12,
            Type: sys::D3DDECLTYPE_FLOAT2,
            Usage: sys::D3DDECLUSAGE_TEXCOORD,
            ..Default::default()
        };
        assert_eq!(terminated_len(&elements), 3);
        assert_eq!(terminated_len(&elements[..2]), 2);
        assert_eq!(terminated_len(&[]), 0);
    }

    #[test]
    fn type_sizes() {
        assert_eq!(DeclType::Float1.size(), 4);
        assert_eq!(DeclType::Float4.size(), 16);
        assert_eq!(DeclType::Short4N.size(), 8);
        assert_eq!(DeclType::Float16x2.size(), 4);
    }
}
