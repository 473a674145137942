use std::io::Cursor;

use pretty_assertions::assert_eq;
use tracing_test::traced_test;
use vtf_header::error::{Error, Result};
use vtf_header::{ImageFormat, TextureFlag, VtfFile};

/// Builder for synthetic VTF files, writing the fixed header layout field by field.
struct TestVtf {
    version_minor: i32,
    header_size: i32,
    flags: u32,
    frame_count: i16,
    high_res_format: i32,
    mipmap_count: u8,
    low_res_format: u32,
    texture_depth: i16,
    resource_count: i32,
    resources: Vec<u8>,
    trailing: Vec<u8>,
}

impl TestVtf {
    fn new(version_minor: i32) -> TestVtf {
        TestVtf {
            version_minor,
            header_size: 80,
            flags: 0,
            frame_count: 1,
            high_res_format: 13, // DXT1
            mipmap_count: 10,
            low_res_format: 13,
            texture_depth: 1,
            resource_count: 0,
            resources: Vec::new(),
            trailing: Vec::new(),
        }
    }

    fn resource(mut self, tag: &[u8; 3], payload: [u8; 4]) -> TestVtf {
        self.resources.extend_from_slice(tag);
        self.resources.push(0); // resource flag byte
        self.resources.extend_from_slice(&payload);
        self.resource_count += 1;
        self
    }

    fn bytes(self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"VTF\0");
        out.extend_from_slice(&7i32.to_le_bytes());
        out.extend_from_slice(&self.version_minor.to_le_bytes());
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&512i16.to_le_bytes()); // width
        out.extend_from_slice(&256i16.to_le_bytes()); // height
        out.extend_from_slice(&self.flags.to_le_bytes());
        out.extend_from_slice(&self.frame_count.to_le_bytes());
        out.extend_from_slice(&0i16.to_le_bytes()); // first frame
        out.extend_from_slice(&[0; 4]); // padding
        out.extend_from_slice(&0.2f32.to_le_bytes());
        out.extend_from_slice(&0.3f32.to_le_bytes());
        out.extend_from_slice(&0.4f32.to_le_bytes());
        out.extend_from_slice(&[0; 4]); // padding
        out.extend_from_slice(&1.0f32.to_le_bytes()); // bumpmap scale
        out.extend_from_slice(&self.high_res_format.to_le_bytes());
        out.push(self.mipmap_count);
        out.extend_from_slice(&self.low_res_format.to_le_bytes());
        out.push(16); // thumbnail width
        out.push(16); // thumbnail height

        if self.version_minor >= 2 {
            out.extend_from_slice(&self.texture_depth.to_le_bytes());
        }
        if self.version_minor >= 3 {
            out.extend_from_slice(&[0; 3]); // padding
            out.extend_from_slice(&self.resource_count.to_le_bytes());
            out.extend_from_slice(&[0; 8]); // padding
            out.extend_from_slice(&self.resources);
        }
        out.extend_from_slice(&self.trailing);
        out
    }
}

#[traced_test]
#[test]
fn read_minimal_version_0_header() -> Result<()> {
    let input = TestVtf::new(0).bytes();
    assert_eq!(input.len(), 63);

    let vtf = VtfFile::read(Cursor::new(input))?;

    assert_eq!(vtf.version_major, 7);
    assert_eq!(vtf.version_minor, 0);
    assert_eq!(vtf.width, 512);
    assert_eq!(vtf.height, 256);
    assert_eq!(vtf.reflectivity, [0.2, 0.3, 0.4]);
    assert_eq!(vtf.bumpmap_scale, 1.0);
    assert_eq!(vtf.mipmap_count, 10);
    assert_eq!(vtf.thumbnail_width, 16);
    assert_eq!(vtf.thumbnail_height, 16);

    // Fields below minor version 2/3 are absent and default to zero.
    assert_eq!(vtf.texture_depth, None);
    assert_eq!(vtf.resource_count, None);
    assert_eq!(vtf.texture_depth(), 0);
    assert_eq!(vtf.resource_count(), 0);
    assert!(vtf.tags.is_empty());
    assert!(vtf.key_values.is_empty());

    Ok(())
}

#[traced_test]
#[test]
fn read_version_2_header_with_depth() -> Result<()> {
    let mut input = TestVtf::new(2);
    input.texture_depth = 4;

    let vtf = VtfFile::read(Cursor::new(input.bytes()))?;

    assert_eq!(vtf.texture_depth, Some(4));
    assert_eq!(vtf.texture_depth(), 4);
    assert_eq!(vtf.resource_count, None);

    Ok(())
}

#[traced_test]
#[test]
fn read_invalid_signature() {
    let result = VtfFile::read(Cursor::new(b"VTX\0".to_vec()));
    assert!(matches!(result, Err(Error::InvalidSignature)));
}

#[traced_test]
#[test]
fn read_truncated_header() {
    let result = VtfFile::read(Cursor::new(b"VTF\0\x07\x00".to_vec()));
    assert!(matches!(result, Err(Error::TruncatedInput { .. })));
}

#[traced_test]
#[test]
fn decode_flags_in_declaration_order() -> Result<()> {
    let mut input = TestVtf::new(0);
    input.flags = TextureFlag::ClampS.bits()
        | TextureFlag::ClampT.bits()
        | TextureFlag::NoMipmaps.bits();

    let vtf = VtfFile::read(Cursor::new(input.bytes()))?;

    assert!(vtf.has_flags());
    assert_eq!(
        vtf.flags,
        vec![
            TextureFlag::ClampS,
            TextureFlag::ClampT,
            TextureFlag::NoMipmaps,
        ]
    );

    Ok(())
}

#[traced_test]
#[test]
fn zero_mask_has_no_flags() -> Result<()> {
    let vtf = VtfFile::read(Cursor::new(TestVtf::new(0).bytes()))?;

    assert!(!vtf.has_flags());
    assert!(vtf.flags.is_empty());

    Ok(())
}

#[traced_test]
#[test]
fn derived_predicates() -> Result<()> {
    let mut input = TestVtf::new(1);
    input.frame_count = 8;
    input.high_res_format = 15; // DXT5

    let vtf = VtfFile::read(Cursor::new(input.bytes()))?;

    assert_eq!(vtf.format(), ImageFormat::Dxt5);
    assert!(vtf.is_compressed());
    assert!(vtf.is_animated());
    assert!(vtf.has_mipmaps());
    assert!(!vtf.has_key_values());

    Ok(())
}

#[traced_test]
#[test]
fn uncompressed_single_frame_texture() -> Result<()> {
    let mut input = TestVtf::new(1);
    input.high_res_format = 0; // RGBA8888
    input.mipmap_count = 0;

    let vtf = VtfFile::read(Cursor::new(input.bytes()))?;

    assert_eq!(vtf.format(), ImageFormat::Rgba8888);
    assert!(!vtf.is_compressed());
    assert!(!vtf.is_animated());
    assert!(!vtf.has_mipmaps());

    Ok(())
}

#[traced_test]
#[test]
fn thumbnail_absent_only_for_the_sentinel() -> Result<()> {
    let mut absent = TestVtf::new(0);
    absent.low_res_format = u32::MAX;
    let vtf = VtfFile::read(Cursor::new(absent.bytes()))?;
    assert!(!vtf.has_thumbnail());
    assert_eq!(vtf.thumbnail_format(), ImageFormat::None);

    // A zero-valued format code is a real format, not absence.
    let mut present = TestVtf::new(0);
    present.low_res_format = 0;
    let vtf = VtfFile::read(Cursor::new(present.bytes()))?;
    assert!(vtf.has_thumbnail());
    assert_eq!(vtf.thumbnail_format(), ImageFormat::Rgba8888);

    Ok(())
}

#[traced_test]
#[test]
fn read_lod_resource_entry() -> Result<()> {
    let input = TestVtf::new(3).resource(b"LOD", [4, 8, 0, 0]).bytes();
    assert_eq!(input.len(), 88);

    let vtf = VtfFile::read(Cursor::new(input))?;

    assert_eq!(vtf.resource_count(), 1);
    assert_eq!(vtf.tags, vec!["Level of Detail"]);

    Ok(())
}

#[traced_test]
#[test]
fn read_multiple_resource_entries() -> Result<()> {
    let input = TestVtf::new(3)
        .resource(b"CRC", [0xEF, 0xBE, 0xAD, 0xDE])
        .resource(b"LOD", [4, 8, 0, 0])
        .resource(b"XYZ", [0, 0, 0, 0]) // unrecognized, consumed but unlabeled
        .bytes();

    let vtf = VtfFile::read(Cursor::new(input))?;

    assert_eq!(vtf.resource_count(), 3);
    assert_eq!(vtf.tags, vec!["CRC Data", "Level of Detail"]);

    Ok(())
}

#[traced_test]
#[test]
fn read_key_value_resource_entry() -> Result<()> {
    // One 8-byte entry after the 80-byte fixed portion.
    let header_size: i32 = 88;
    let block = b"{\n\"Information\"\n{\n\"foo\" \"1\"\n}\n}\n";

    let mut input = TestVtf::new(3).resource(b"KVD", header_size.to_le_bytes());
    input.header_size = header_size;
    // The resource offset points at the block's 4-byte length field; the text follows it.
    input.trailing.extend_from_slice(&(block.len() as i32).to_le_bytes());
    input.trailing.extend_from_slice(block);

    let vtf = VtfFile::read(Cursor::new(input.bytes()))?;

    assert_eq!(vtf.tags, vec!["Arbitrary KeyValues"]);
    assert!(vtf.has_key_values());
    assert_eq!(
        vtf.key_values,
        vec![("foo".to_owned(), "1".to_owned())]
    );

    Ok(())
}

#[traced_test]
#[test]
fn read_negative_resource_count() {
    let mut input = TestVtf::new(3);
    input.resource_count = -1;

    let result = VtfFile::read(Cursor::new(input.bytes()));
    assert!(matches!(result, Err(Error::InvalidResourceCount(-1))));
}

#[traced_test]
#[test]
fn read_implausibly_large_resource_count() {
    let mut input = TestVtf::new(3);
    input.resource_count = i32::MAX;

    let result = VtfFile::read(Cursor::new(input.bytes()));
    assert!(matches!(
        result,
        Err(Error::InvalidResourceCount(i32::MAX))
    ));
}

#[traced_test]
#[test]
fn read_key_value_entry_with_offset_before_header() {
    // An offset this far below the header size would require seeking backwards.
    let input = TestVtf::new(3).resource(b"KVD", 4i32.to_le_bytes()).bytes();

    let result = VtfFile::read(Cursor::new(input));
    assert!(matches!(result, Err(Error::InvalidResourceOffset(4))));
}

#[traced_test]
#[test]
fn read_key_value_entry_with_offset_past_end() {
    let input = TestVtf::new(3)
        .resource(b"KVD", 4096i32.to_le_bytes())
        .bytes();

    let result = VtfFile::read(Cursor::new(input));
    assert!(matches!(result, Err(Error::InvalidResourceOffset(4096))));
}
