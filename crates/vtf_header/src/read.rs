//! Types for reading VTF headers
//!

use std::io::{Read, Seek};
use tracing::debug;

use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use crate::format::{ResourceTag, TextureFlag};
use crate::keyvalues;
use crate::types::VtfFile;

/// Leading file signature, "VTF" and a NUL.
const SIGNATURE: &[u8] = b"VTF\0";

/// On-the-wire size of one resource directory entry.
const RESOURCE_ENTRY_SIZE: u64 = 8;

/// Read granularity for recovering the key/value text block.
const KEY_VALUE_CHUNK: u64 = 64;

/// Whether a minor version stores the texture depth field.
fn has_depth_field(version_minor: i32) -> bool {
    version_minor >= 2
}

/// Whether a minor version stores the resource directory.
fn has_resource_directory(version_minor: i32) -> bool {
    version_minor >= 3
}

impl VtfFile {
    /// Read a VTF header and resource directory from a stream.
    ///
    /// The stream is consumed and dropped when this returns, whether the decode succeeded
    /// or not. Either every field is populated or exactly one [`Error`] is returned; no
    /// partial value escapes.
    ///
    /// ```no_run
    /// use std::fs::File;
    ///
    /// fn inspect(path: &str) -> vtf_header::error::Result<()> {
    ///     let vtf = vtf_header::VtfFile::read(File::open(path)?)?;
    ///
    ///     println!("{}x{} {}", vtf.width, vtf.height, vtf.format());
    ///
    ///     Ok(())
    /// }
    /// ```
    pub fn read<R: Read + Seek>(reader: R) -> Result<VtfFile> {
        let mut cursor = ByteCursor::new(reader)?;

        let signature = cursor.read_bytes(4)?;
        if signature != SIGNATURE {
            return Err(Error::InvalidSignature);
        }

        let version_major = cursor.read_i32()?;
        let version_minor = cursor.read_i32()?;
        debug!(version_major, version_minor, "vtf version");

        let header_size = cursor.read_i32()?;
        let width = cursor.read_i16()?;
        let height = cursor.read_i16()?;
        debug!(header_size, width, height, "header prefix");

        let flags_raw = cursor.read_u32()?;
        let flags = TextureFlag::from_mask(flags_raw);
        for flag in &flags {
            debug!(flag = %flag, bits = format_args!("{:#010x}", flag.bits()), "texture flag");
        }

        let frame_count = cursor.read_i16()?;
        let first_frame = cursor.read_i16()?;
        cursor.skip(4)?;

        let reflectivity = read_reflectivity(&mut cursor)?;
        cursor.skip(4)?;

        let bumpmap_scale = cursor.read_f32()?;
        let high_res_format = cursor.read_i32()?;
        let mipmap_count = cursor.read_u8()?;
        let low_res_format = cursor.read_u32()?;
        let thumbnail_width = cursor.read_u8()?;
        let thumbnail_height = cursor.read_u8()?;

        let mut vtf = VtfFile {
            version_major,
            version_minor,
            header_size,
            width,
            height,
            flags_raw,
            flags,
            frame_count,
            first_frame,
            reflectivity,
            bumpmap_scale,
            high_res_format,
            mipmap_count,
            low_res_format,
            thumbnail_width,
            thumbnail_height,
            texture_depth: None,
            resource_count: None,
            tags: Vec::new(),
            key_values: Vec::new(),
        };
        read_depth_and_resources(&mut cursor, &mut vtf)?;

        Ok(vtf)
    }
}

/// Read the fixed 3-component reflectivity vector.
fn read_reflectivity<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<[f32; 3]> {
    let mut vector = [0f32; 3];
    for component in &mut vector {
        *component = cursor.read_f32()?;
    }
    Ok(vector)
}

/// Read the version-gated tail of the header: the depth field and the resource directory.
fn read_depth_and_resources<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
    vtf: &mut VtfFile,
) -> Result<()> {
    if !has_depth_field(vtf.version_minor) {
        return Ok(());
    }

    vtf.texture_depth = Some(cursor.read_i16()?);
    debug!(texture_depth = vtf.texture_depth, "texture depth");

    if !has_resource_directory(vtf.version_minor) {
        return Ok(());
    }

    cursor.skip(3)?;
    let resource_count = cursor.read_i32()?;
    debug!(resource_count, "resource directory");

    // A count whose entries alone would overrun the stream cannot be real; rejecting it
    // here bounds the loop below against hostile input.
    if resource_count < 0 || resource_count as u64 * RESOURCE_ENTRY_SIZE > cursor.remaining() {
        return Err(Error::InvalidResourceCount(resource_count));
    }

    cursor.skip(8)?;
    vtf.resource_count = Some(resource_count);

    for _ in 0..resource_count {
        read_resource_entry(cursor, vtf)?;
    }

    Ok(())
}

/// Read one resource directory entry, dispatching on its tag.
fn read_resource_entry<R: Read + Seek>(cursor: &mut ByteCursor<R>, vtf: &mut VtfFile) -> Result<()> {
    let bytes = cursor.read_bytes(3)?;
    let tag = ResourceTag::from_bytes([bytes[0], bytes[1], bytes[2]]);

    if let Some(label) = tag.label() {
        debug!(label, "resource entry");
        vtf.tags.push(label.to_owned());
    }

    // Resource flag byte, unused by the format.
    cursor.read_u8()?;

    match tag {
        ResourceTag::LevelOfDetail => {
            let clamp_u = cursor.read_u8()?;
            let clamp_v = cursor.read_u8()?;
            debug!(clamp_u, clamp_v, "lod clamp");

            // The payload is 4 bytes wide but only the first 2 carry data.
            cursor.skip(2)?;
        }
        ResourceTag::KeyValueData => read_key_values(cursor, vtf)?,
        _ => {
            // An offset to data the header layer does not dereference.
            cursor.skip(4)?;
        }
    }

    Ok(())
}

/// Locate the key/value text block through its resource offset and tokenize it.
fn read_key_values<R: Read + Seek>(cursor: &mut ByteCursor<R>, vtf: &mut VtfFile) -> Result<()> {
    let offset = cursor.read_i32()?;

    // The offset is absolute and counts from the start of the file; the cursor already sits
    // at the end of an entry inside the header, so the distance left to cover is the offset
    // minus the header size, plus 4 to step over the block's length field.
    let distance = i64::from(offset) - i64::from(vtf.header_size) + 4;
    if distance < 0 || distance as u64 > cursor.remaining() {
        return Err(Error::InvalidResourceOffset(offset));
    }
    cursor.skip(distance as u64)?;

    let mut blob = Vec::with_capacity(cursor.remaining() as usize);
    while cursor.remaining() > 0 {
        let chunk = cursor.remaining().min(KEY_VALUE_CHUNK);
        blob.extend_from_slice(&cursor.read_bytes(chunk as usize)?);
    }

    vtf.key_values = keyvalues::tokenize(&String::from_utf8_lossy(&blob));
    debug!(pairs = vtf.key_values.len(), "key values");

    Ok(())
}
