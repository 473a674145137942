//! Closed enumerations for the format codes, flag bits and resource tags found in a VTF
//! header.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw value of [`ImageFormat::None`] as stored in the unsigned low-res format field.
///
/// The thumbnail format must be compared against this as an unsigned 32-bit value so the
/// sentinel stays distinct from the valid format code `0`.
pub const FORMAT_NONE: u32 = 0xFFFF_FFFF;

/// Image format codes used for both the texture data and the thumbnail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ImageFormat {
    /// No image data present; stored as `0xFFFFFFFF` / `-1`
    None,
    Rgba8888,
    Abgr8888,
    Rgb888,
    Bgr888,
    Rgb565,
    I8,
    Ia88,
    P8,
    A8,
    Rgb888Bluescreen,
    Bgr888Bluescreen,
    Argb8888,
    Bgra8888,
    Dxt1,
    Dxt3,
    Dxt5,
    Bgrx8888,
    Bgr565,
    Bgrx5551,
    Bgra4444,
    Dxt1OneBitAlpha,
    Bgra5551,
    Uv88,
    Uvwq8888,
    Rgba16161616F,
    Rgba16161616,
    Uvlx8888,
    /// A format code outside the known enumeration
    Unknown(i32),
}

impl ImageFormat {
    /// Resolve a raw format code. Every possible code resolves to a variant, out-of-range
    /// codes become [`ImageFormat::Unknown`].
    pub fn from_raw(code: i32) -> ImageFormat {
        match code {
            -1 => ImageFormat::None,
            0 => ImageFormat::Rgba8888,
            1 => ImageFormat::Abgr8888,
            2 => ImageFormat::Rgb888,
            3 => ImageFormat::Bgr888,
            4 => ImageFormat::Rgb565,
            5 => ImageFormat::I8,
            6 => ImageFormat::Ia88,
            7 => ImageFormat::P8,
            8 => ImageFormat::A8,
            9 => ImageFormat::Rgb888Bluescreen,
            10 => ImageFormat::Bgr888Bluescreen,
            11 => ImageFormat::Argb8888,
            12 => ImageFormat::Bgra8888,
            13 => ImageFormat::Dxt1,
            14 => ImageFormat::Dxt3,
            15 => ImageFormat::Dxt5,
            16 => ImageFormat::Bgrx8888,
            17 => ImageFormat::Bgr565,
            18 => ImageFormat::Bgrx5551,
            19 => ImageFormat::Bgra4444,
            20 => ImageFormat::Dxt1OneBitAlpha,
            21 => ImageFormat::Bgra5551,
            22 => ImageFormat::Uv88,
            23 => ImageFormat::Uvwq8888,
            24 => ImageFormat::Rgba16161616F,
            25 => ImageFormat::Rgba16161616,
            26 => ImageFormat::Uvlx8888,
            other => ImageFormat::Unknown(other),
        }
    }

    /// Whether this format is one of the block-compressed DXT formats (codes 13 through 15).
    pub fn is_compressed(&self) -> bool {
        matches!(self, ImageFormat::Dxt1 | ImageFormat::Dxt3 | ImageFormat::Dxt5)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImageFormat::None => write!(f, "NONE"),
            ImageFormat::Rgba8888 => write!(f, "RGBA8888"),
            ImageFormat::Abgr8888 => write!(f, "ABGR8888"),
            ImageFormat::Rgb888 => write!(f, "RGB888"),
            ImageFormat::Bgr888 => write!(f, "BGR888"),
            ImageFormat::Rgb565 => write!(f, "RGB565"),
            ImageFormat::I8 => write!(f, "I8"),
            ImageFormat::Ia88 => write!(f, "IA88"),
            ImageFormat::P8 => write!(f, "P8"),
            ImageFormat::A8 => write!(f, "A8"),
            ImageFormat::Rgb888Bluescreen => write!(f, "RGB888_BLUESCREEN"),
            ImageFormat::Bgr888Bluescreen => write!(f, "BGR888_BLUESCREEN"),
            ImageFormat::Argb8888 => write!(f, "ARGB8888"),
            ImageFormat::Bgra8888 => write!(f, "BGRA8888"),
            ImageFormat::Dxt1 => write!(f, "DXT1"),
            ImageFormat::Dxt3 => write!(f, "DXT3"),
            ImageFormat::Dxt5 => write!(f, "DXT5"),
            ImageFormat::Bgrx8888 => write!(f, "BGRX8888"),
            ImageFormat::Bgr565 => write!(f, "BGR565"),
            ImageFormat::Bgrx5551 => write!(f, "BGRX5551"),
            ImageFormat::Bgra4444 => write!(f, "BGRA4444"),
            ImageFormat::Dxt1OneBitAlpha => write!(f, "DXT1_ONEBITALPHA"),
            ImageFormat::Bgra5551 => write!(f, "BGRA5551"),
            ImageFormat::Uv88 => write!(f, "UV88"),
            ImageFormat::Uvwq8888 => write!(f, "UVWQ8888"),
            ImageFormat::Rgba16161616F => write!(f, "RGBA16161616F"),
            ImageFormat::Rgba16161616 => write!(f, "RGBA16161616"),
            ImageFormat::Uvlx8888 => write!(f, "UVLX8888"),
            ImageFormat::Unknown(code) => write!(f, "UNKNOWN ({code})"),
        }
    }
}

/// Texture flag bits stored in the header's 4-byte flag field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum TextureFlag {
    PointSample = 0x0000_0001,
    Trilinear = 0x0000_0002,
    ClampS = 0x0000_0004,
    ClampT = 0x0000_0008,
    Anisotropic = 0x0000_0010,
    HintDxt5 = 0x0000_0020,
    PwlCorrected = 0x0000_0040,
    NormalMap = 0x0000_0080,
    NoMipmaps = 0x0000_0100,
    NoLevelOfDetail = 0x0000_0200,
    AllMipmaps = 0x0000_0400,
    Procedural = 0x0000_0800,
    OneBitAlpha = 0x0000_1000,
    EightBitAlpha = 0x0000_2000,
    EnvironmentMap = 0x0000_4000,
    RenderTarget = 0x0000_8000,
    DepthRenderTarget = 0x0001_0000,
    NoDebugOverride = 0x0002_0000,
    SingleCopy = 0x0004_0000,
    PreSrgb = 0x0008_0000,
    NoDepthBuffer = 0x0080_0000,
    ClampU = 0x0200_0000,
    VertexTexture = 0x0400_0000,
    SsBump = 0x0800_0000,
    Border = 0x2000_0000,
}

impl TextureFlag {
    /// Every known flag in declaration order.
    pub const ALL: [TextureFlag; 25] = [
        TextureFlag::PointSample,
        TextureFlag::Trilinear,
        TextureFlag::ClampS,
        TextureFlag::ClampT,
        TextureFlag::Anisotropic,
        TextureFlag::HintDxt5,
        TextureFlag::PwlCorrected,
        TextureFlag::NormalMap,
        TextureFlag::NoMipmaps,
        TextureFlag::NoLevelOfDetail,
        TextureFlag::AllMipmaps,
        TextureFlag::Procedural,
        TextureFlag::OneBitAlpha,
        TextureFlag::EightBitAlpha,
        TextureFlag::EnvironmentMap,
        TextureFlag::RenderTarget,
        TextureFlag::DepthRenderTarget,
        TextureFlag::NoDebugOverride,
        TextureFlag::SingleCopy,
        TextureFlag::PreSrgb,
        TextureFlag::NoDepthBuffer,
        TextureFlag::ClampU,
        TextureFlag::VertexTexture,
        TextureFlag::SsBump,
        TextureFlag::Border,
    ];

    /// The flag's bit position in the mask.
    pub fn bits(&self) -> u32 {
        *self as u32
    }

    /// Collect every flag set in a raw mask, in declaration order. A zero mask yields an
    /// empty list.
    pub fn from_mask(mask: u32) -> Vec<TextureFlag> {
        TextureFlag::ALL
            .into_iter()
            .filter(|flag| mask & flag.bits() != 0)
            .collect()
    }
}

impl fmt::Display for TextureFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TextureFlag::PointSample => write!(f, "Point Sample"),
            TextureFlag::Trilinear => write!(f, "Trilinear"),
            TextureFlag::ClampS => write!(f, "Clamp S"),
            TextureFlag::ClampT => write!(f, "Clamp T"),
            TextureFlag::Anisotropic => write!(f, "Anisotropic"),
            TextureFlag::HintDxt5 => write!(f, "Hint DXT5"),
            TextureFlag::PwlCorrected => write!(f, "PWL Corrected"),
            TextureFlag::NormalMap => write!(f, "Normal Map"),
            TextureFlag::NoMipmaps => write!(f, "No Mipmaps"),
            TextureFlag::NoLevelOfDetail => write!(f, "No Level Of Detail"),
            TextureFlag::AllMipmaps => write!(f, "All Mipmaps"),
            TextureFlag::Procedural => write!(f, "Procedural"),
            TextureFlag::OneBitAlpha => write!(f, "One-Bit Alpha"),
            TextureFlag::EightBitAlpha => write!(f, "Eight-Bit Alpha"),
            TextureFlag::EnvironmentMap => write!(f, "Environment Map"),
            TextureFlag::RenderTarget => write!(f, "Render Target"),
            TextureFlag::DepthRenderTarget => write!(f, "Depth Render Target"),
            TextureFlag::NoDebugOverride => write!(f, "No Debug Override"),
            TextureFlag::SingleCopy => write!(f, "Single Copy"),
            TextureFlag::PreSrgb => write!(f, "Pre-SRGB"),
            TextureFlag::NoDepthBuffer => write!(f, "No Depth Buffer"),
            TextureFlag::ClampU => write!(f, "Clamp U"),
            TextureFlag::VertexTexture => write!(f, "Vertex Texture"),
            TextureFlag::SsBump => write!(f, "SSBump"),
            TextureFlag::Border => write!(f, "Border"),
        }
    }
}

/// Resource directory entry tags.
///
/// A tag is 3 raw bytes. Only the closed set below is known; anything else becomes
/// [`ResourceTag::Unknown`] and is skipped by byte count rather than rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResourceTag {
    Thumbnail,
    HighResImage,
    AnimatedParticleSheet,
    CrcData,
    LevelOfDetail,
    ExtendedCustomFlags,
    KeyValueData,
    Unknown([u8; 3]),
}

impl ResourceTag {
    /// Resolve a raw 3-byte tag.
    pub fn from_bytes(tag: [u8; 3]) -> ResourceTag {
        match &tag {
            b"\x01\0\0" => ResourceTag::Thumbnail,
            b"\x30\0\0" => ResourceTag::HighResImage,
            b"\x10\0\0" => ResourceTag::AnimatedParticleSheet,
            b"CRC" => ResourceTag::CrcData,
            b"LOD" => ResourceTag::LevelOfDetail,
            b"TSO" => ResourceTag::ExtendedCustomFlags,
            b"KVD" => ResourceTag::KeyValueData,
            _ => ResourceTag::Unknown(tag),
        }
    }

    /// Human-readable label for a known tag, `None` for an unrecognized one.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ResourceTag::Thumbnail => Some("Thumbnail"),
            ResourceTag::HighResImage => Some("High Res Image"),
            ResourceTag::AnimatedParticleSheet => Some("Animated Particle Sheet"),
            ResourceTag::CrcData => Some("CRC Data"),
            ResourceTag::LevelOfDetail => Some("Level of Detail"),
            ResourceTag::ExtendedCustomFlags => Some("Extended Custom Flags"),
            ResourceTag::KeyValueData => Some("Arbitrary KeyValues"),
            ResourceTag::Unknown(_) => None,
        }
    }
}
