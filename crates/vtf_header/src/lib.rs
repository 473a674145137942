//! # VTF Header Format Documentation
//!
//! This crate provides utilities to read the header and resource directory of the **VTF**
//! (Valve Texture Format) container used by Source engine games. A VTF file stores a texture
//! together with its mipmaps, an optional thumbnail, and optional out-of-line resources such
//! as embedded key/value metadata. VTF files are typically identified with the `.vtf`
//! extension.
//!
//! Only the header and resource directory are decoded; pixel, mipmap and thumbnail image
//! data are never read.
//!
//! ## File Structure
//!
//! A VTF file begins with a fixed header present in every supported version:
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Signature              | 4 bytes: "VTF\0"                                           |
//! | 0x0004         | Version Major          | 4 bytes: Major version, always 7                           |
//! | 0x0008         | Version Minor          | 4 bytes: Minor version, 0 through 6                        |
//! | 0x000C         | Header Size            | 4 bytes: Size of the header plus resource directory        |
//! | 0x0010         | Width                  | 2 bytes: Width of the largest mipmap                       |
//! | 0x0012         | Height                 | 2 bytes: Height of the largest mipmap                      |
//! | 0x0014         | Flags                  | 4 bytes: Bitmask of texture flags                          |
//! | 0x0018         | Frame Count            | 2 bytes: Number of animation frames                        |
//! | 0x001A         | First Frame            | 2 bytes: First frame of the animation                      |
//! | 0x001C         | Padding                | 4 bytes                                                    |
//! | 0x0020         | Reflectivity           | 12 bytes: 3 floats, per-channel reflectivity vector        |
//! | 0x002C         | Padding                | 4 bytes                                                    |
//! | 0x0030         | Bumpmap Scale          | 4 bytes: float                                             |
//! | 0x0034         | High-Res Format        | 4 bytes: Image format code of the texture data             |
//! | 0x0038         | Mipmap Count           | 1 byte: Number of mipmaps                                  |
//! | 0x0039         | Low-Res Format         | 4 bytes: Image format code of the thumbnail, or 0xFFFFFFFF |
//! | 0x003D         | Thumbnail Width        | 1 byte                                                     |
//! | 0x003E         | Thumbnail Height       | 1 byte                                                     |
//!
//! The low-resolution (thumbnail) format is the only unsigned format field: the reserved
//! value `0xFFFFFFFF` means "no thumbnail present" and must stay distinguishable from the
//! valid format code `0`.
//!
//! ## Version-Gated Fields
//!
//! Later minor versions append fields to the fixed header:
//!
//! - **Texture Depth** (minor >= 2): 2 bytes, depth of a volume texture.
//! - **Resource Directory** (minor >= 3): 3 bytes of padding, a 4-byte resource count,
//!   8 bytes of padding, then one 8-byte entry per resource.
//!
//! ## Resource Directory
//!
//! Each resource entry has the following structure:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Tag                    | 3 bytes: Resource type identifier                       |
//! | 0x0003         | Flags                  | 1 byte: Unused                                          |
//! | 0x0004         | Payload                | 4 bytes: Inline data or offset to out-of-line data      |
//!
//! Known tags are `\x01\0\0` (thumbnail), `\x30\0\0` (high-res image), `\x10\0\0`
//! (animated particle sheet), `CRC`, `LOD`, `TSO` and `KVD`. Unrecognized tags are skipped
//! by byte count. Two tags interpret their payload specially:
//!
//! - **`LOD`**: the payload holds two single-byte texture LOD clamp values (U and V);
//!   the remaining 2 bytes are unused.
//! - **`KVD`**: the payload is an absolute file offset to the embedded key/value text
//!   block. The block is a brace-and-quote delimited list of string pairs under a leading
//!   section label, e.g. `"Information" { "author" "you" }`.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.vtf`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod cursor;
pub mod error;
pub mod format;
pub mod keyvalues;
pub mod read;
pub mod types;

pub use format::{ImageFormat, ResourceTag, TextureFlag};
pub use types::VtfFile;
