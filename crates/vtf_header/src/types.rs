//! The decoded header value object
//!

use crate::format::{ImageFormat, TextureFlag, FORMAT_NONE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every field decoded from a VTF header and its resource directory.
///
/// Built in one pass by [`VtfFile::read`](crate::read) and immutable afterwards; the
/// caller owns the value outright and the input stream is released when the read returns,
/// on success and failure alike.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VtfFile {
    /// Major file version, 7 for every known file
    pub version_major: i32,
    /// Minor file version, gates which trailing fields are present
    pub version_minor: i32,
    /// Size of the header plus resource directory, the zero point for resource offsets
    pub header_size: i32,
    /// Width of the largest mipmap
    pub width: i16,
    /// Height of the largest mipmap
    pub height: i16,
    /// Raw texture flag mask
    pub flags_raw: u32,
    /// Flags set in the mask, in declaration order
    pub flags: Vec<TextureFlag>,
    /// Number of animation frames
    pub frame_count: i16,
    /// First frame of the animation
    pub first_frame: i16,
    /// Per-channel reflectivity vector
    pub reflectivity: [f32; 3],
    /// Bumpmap scale
    pub bumpmap_scale: f32,
    /// Raw image format code of the texture data
    pub high_res_format: i32,
    /// Number of mipmaps
    pub mipmap_count: u8,
    /// Raw image format code of the thumbnail; `0xFFFFFFFF` means no thumbnail
    pub low_res_format: u32,
    /// Thumbnail width
    pub thumbnail_width: u8,
    /// Thumbnail height
    pub thumbnail_height: u8,
    /// Depth of a volume texture; only present from minor version 2
    pub texture_depth: Option<i16>,
    /// Number of resource directory entries; only present from minor version 3
    pub resource_count: Option<i32>,
    /// Labels of the recognized resource entries, in directory order
    pub tags: Vec<String>,
    /// Embedded key/value metadata, in encounter order
    pub key_values: Vec<(String, String)>,
}

impl VtfFile {
    /// Depth of the texture; 0 for files predating the depth field.
    pub fn texture_depth(&self) -> i16 {
        self.texture_depth.unwrap_or(0)
    }

    /// Number of resource entries; 0 for files predating the resource directory.
    pub fn resource_count(&self) -> i32 {
        self.resource_count.unwrap_or(0)
    }

    /// The texture data format.
    pub fn format(&self) -> ImageFormat {
        ImageFormat::from_raw(self.high_res_format)
    }

    /// The thumbnail format, [`ImageFormat::None`] when no thumbnail is present.
    pub fn thumbnail_format(&self) -> ImageFormat {
        ImageFormat::from_raw(self.low_res_format as i32)
    }

    /// Whether the texture data is stored in a block-compressed (DXT) format.
    pub fn is_compressed(&self) -> bool {
        self.format().is_compressed()
    }

    /// Whether the texture has more than one animation frame.
    pub fn is_animated(&self) -> bool {
        self.frame_count > 1
    }

    /// Whether any mipmaps are stored.
    pub fn has_mipmaps(&self) -> bool {
        self.mipmap_count != 0
    }

    /// Whether a thumbnail is present. A zero-valued format code is a real format, only
    /// the sentinel means absence.
    pub fn has_thumbnail(&self) -> bool {
        self.low_res_format != FORMAT_NONE
    }

    /// Whether any texture flags are set.
    pub fn has_flags(&self) -> bool {
        self.flags_raw != 0
    }

    /// Whether the file carried embedded key/value metadata.
    pub fn has_key_values(&self) -> bool {
        !self.key_values.is_empty()
    }
}
