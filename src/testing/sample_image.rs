//! Placeholder image for the translate test
//!
//! Encoding is behind the `sample-image` feature. Without it the capability
//! probe reports the encoder as missing and the translate test is skipped.

use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

pub const SAMPLE_WIDTH: u32 = 800;
pub const SAMPLE_HEIGHT: u32 = 600;

/// Fill color (white)
pub const SAMPLE_FILL: [u8; 3] = [255, 255, 255];

/// Whether this build can synthesize the sample image
pub fn is_available() -> bool {
    cfg!(feature = "sample-image")
}

/// Write the placeholder image to `path`
///
/// Returns `Ok(None)` when the encoder is not compiled in.
pub fn create_sample_image(path: &Path) -> Result<Option<PathBuf>> {
    if !is_available() {
        println!("[INFO] PNG encoder not available, skipping sample image creation");
        return Ok(None);
    }

    let png = encode_solid_png(SAMPLE_WIDTH, SAMPLE_HEIGHT, SAMPLE_FILL)?;
    std::fs::write(path, png).map_err(|e| Error::file_write(path, e))?;
    tracing::debug!(path = %path.display(), "Wrote sample image");

    Ok(Some(path.to_path_buf()))
}

#[cfg(not(feature = "sample-image"))]
fn encode_solid_png(_width: u32, _height: u32, _rgb: [u8; 3]) -> Result<Vec<u8>> {
    Err(Error::Config(
        "built without the sample-image feature".to_string(),
    ))
}

/// Encode a single-color 8-bit RGB PNG
#[cfg(feature = "sample-image")]
fn encode_solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // bit depth 8, color type 2 (RGB), deflate, adaptive filtering, no interlace
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);

    // Each scanline: filter type 0 followed by the pixels
    let mut row = Vec::with_capacity(1 + width as usize * 3);
    row.push(0);
    for _ in 0..width {
        row.extend_from_slice(&rgb);
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    for _ in 0..height {
        encoder.write_all(&row)?;
    }
    let idat = encoder.finish()?;

    let mut png = Vec::with_capacity(SIGNATURE.len() + idat.len() + 64);
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr);
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

#[cfg(feature = "sample-image")]
fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    let mut crc = flate2::Crc::new();
    crc.update(kind);
    crc.update(data);

    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}
