//! Text rendering through `ID3DXFont`.

use derive_builder::Builder;

use crate::sys;

/// The face used when none is given.
pub const DEFAULT_FACE_NAME: &str = "Times New Roman";

/// Describes the font to create. Only the height is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct FontDescription {
    /// Character height in logical units.
    pub height: i32,
    /// Average character width. `0` picks one matching the height.
    #[builder(default)]
    pub width: u32,
    /// One of the `FW_*` weights.
    #[builder(default = "sys::FW_NORMAL")]
    pub weight: u32,
    /// Mip levels of the glyph textures.
    #[builder(default = "1")]
    pub mip_levels: u32,
    /// Whether the font is italic.
    #[builder(default)]
    pub italic: bool,
    /// One of the `*_CHARSET` values.
    #[builder(default = "sys::DEFAULT_CHARSET")]
    pub char_set: u8,
    /// One of the `OUT_*` precision values.
    #[builder(default = "sys::OUT_DEFAULT_PRECIS")]
    pub output_precision: u8,
    /// One of the `*_QUALITY` values.
    #[builder(default = "sys::DEFAULT_QUALITY")]
    pub quality: u8,
    /// A pitch value combined with an `FF_*` family.
    #[builder(default = "sys::DEFAULT_PITCH | sys::FF_DONTCARE")]
    pub pitch_and_family: u8,
    /// The typeface name. Must fit into `LF_FACESIZE` bytes with its
    /// terminator.
    #[builder(setter(into), default = "DEFAULT_FACE_NAME.to_owned()")]
    pub face_name: String,
}

impl FontDescriptionBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(face_name) = &self.face_name {
            if face_name.len() >= sys::LF_FACESIZE {
                return Err(format!(
                    "The face name {face_name:?} is longer than {} bytes.",
                    sys::LF_FACESIZE - 1
                ));
            }
            if face_name.contains('\0') {
                return Err(format!("The face name {face_name:?} contains a NUL byte."));
            }
        }
        Ok(())
    }
}

impl FontDescription {
    /// Returns a builder for a font description.
    pub fn builder() -> FontDescriptionBuilder {
        FontDescriptionBuilder::default()
    }

    /// Lays the description out the way `D3DXCreateFontIndirectA` reads it.
    pub fn to_raw(&self) -> sys::D3DXFONT_DESCA {
        let mut raw = sys::D3DXFONT_DESCA {
            Height: self.height,
            Width: self.width,
            Weight: self.weight,
            MipLevels: self.mip_levels,
            Italic: self.italic.into(),
            CharSet: self.char_set,
            OutputPrecision: self.output_precision,
            Quality: self.quality,
            PitchAndFamily: self.pitch_and_family,
            ..Default::default()
        };
        raw.set_face_name(self.face_name.as_bytes());
        raw
    }
}

/// The longest prefix of `text` of at most `max` bytes that ends on a
/// character boundary.
#[cfg_attr(not(windows), allow(dead_code))]
fn truncate_to_char_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(windows)]
pub use platform::*;

#[cfg(windows)]
mod platform {
    use windows::Win32::Graphics::Direct3D9::IDirect3DDevice9;

    use super::{truncate_to_char_boundary, FontDescription};
    use crate::{
        com::{device_ptr, ComPtr},
        sprite::Sprite,
        sys, Result,
    };

    /// An `ID3DXFont`.
    #[derive(Debug)]
    pub struct Font(ComPtr<sys::ID3DXFont>);

    impl Font {
        /// Creates a font for `device`.
        pub fn new(device: &IDirect3DDevice9, description: &FontDescription) -> Result<Self> {
            let raw = description.to_raw();
            let mut font = std::ptr::null_mut();
            Result::from(unsafe {
                sys::HELPERS_D3DX_CreateFontIndirect(device_ptr(device), &raw, &mut font)
            })?;
            log::debug!("Created font {:?} ({}).", description.face_name, description.height);
            unsafe { ComPtr::from_created(font) }.map(Self)
        }

        /// Draws `text` into `rect` and returns the height of the drawn
        /// text, or `0` on failure. With `DT_CALCRECT` nothing is drawn
        /// and `rect` is updated to the extent of the text instead.
        ///
        /// When `sprite` is given the glyphs are batched into it, which
        /// must then be between `begin` and `end`.
        ///
        /// D3DX takes the length as an `i32`; text beyond `i32::MAX` bytes
        /// is cut after the last whole character that fits.
        pub fn draw_text(
            &self,
            sprite: Option<&Sprite>,
            text: &str,
            rect: &mut sys::RECT,
            format: u32,
            color: sys::D3DCOLOR,
        ) -> i32 {
            let sprite = sprite.map_or(std::ptr::null_mut(), Sprite::as_raw);
            let text = truncate_to_char_boundary(text, i32::MAX as usize);
            // Passing the length lets the text contain NUL bytes.
            let count = text.len() as i32;
            unsafe {
                sys::HELPERS_D3DX_ID3DXFont_DrawText(
                    self.0.as_raw(),
                    sprite,
                    text.as_ptr().cast(),
                    count,
                    rect,
                    format,
                    color,
                )
            }
        }

        /// Releases the video memory held by the font before a device reset.
        pub fn on_lost_device(&self) -> Result {
            Result::from(unsafe { sys::HELPERS_D3DX_ID3DXFont_OnLostDevice(self.0.as_raw()) })
        }

        /// Recreates the resources released by [`Font::on_lost_device`].
        pub fn on_reset_device(&self) -> Result {
            Result::from(unsafe { sys::HELPERS_D3DX_ID3DXFont_OnResetDevice(self.0.as_raw()) })
        }

        /// Returns the underlying interface.
        pub fn as_raw(&self) -> sys::LPD3DXFONT {
            self.0.as_raw()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let description = FontDescription::builder().height(24).build().unwrap();
        assert_eq!(description.height, 24);
        assert_eq!(description.width, 0);
        assert_eq!(description.weight, sys::FW_NORMAL);
        assert_eq!(description.mip_levels, 1);
        assert!(!description.italic);
        assert_eq!(description.char_set, sys::DEFAULT_CHARSET);
        assert_eq!(description.face_name, DEFAULT_FACE_NAME);
    }

    #[test]
    fn height_is_required() {
        let error = FontDescription::builder().face_name("Arial").build().unwrap_err();
        assert!(matches!(
            error,
            FontDescriptionBuilderError::UninitializedField("height")
        ));
    }

    #[test]
    fn face_name_must_fit() {
        let error = FontDescription::builder()
            .height(12)
            .face_name("A face name well beyond thirty one bytes")
            .build()
            .unwrap_err();
        assert!(matches!(error, FontDescriptionBuilderError::ValidationError(_)));

        let error = FontDescription::builder()
            .height(12)
            .face_name("Ari\0al")
            .build()
            .unwrap_err();
        assert!(matches!(error, FontDescriptionBuilderError::ValidationError(_)));
    }

    #[test]
    fn raw_description() {
        let raw = FontDescription::builder()
            .height(-18)
            .weight(sys::FW_BOLD)
            .italic(true)
            .quality(sys::ANTIALIASED_QUALITY)
            .face_name("Consolas")
            .build()
            .unwrap()
            .to_raw();
        assert_eq!(raw.Height, -18);
        assert_eq!(raw.Weight, 700);
        assert_eq!(raw.Italic, 1);
        assert_eq!(raw.Quality, sys::ANTIALIASED_QUALITY);
        assert_eq!(raw.PitchAndFamily, 0);
        assert_eq!(raw.face_name(), b"Consolas");
        assert_eq!(raw.FaceName[8], 0);
    }

    #[test]
    fn long_text_is_cut_between_characters() {
        assert_eq!(truncate_to_char_boundary("héllo", 2), "h");
        assert_eq!(truncate_to_char_boundary("héllo", 3), "hé");
        assert_eq!(truncate_to_char_boundary("héllo", 6), "héllo");
        assert_eq!(truncate_to_char_boundary("héllo", 100), "héllo");
        assert_eq!(truncate_to_char_boundary("日本", 5), "日");
        assert_eq!(truncate_to_char_boundary("日本", 0), "");
    }
}
