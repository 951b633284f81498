use std::path::Path;

use optflow_field::{FieldSize, FlowField, FLOW_CHANNELS};

use crate::error::IoError;

/// Magic tag identifying a Middlebury .flo file.
///
/// The ASCII bytes "PIEH" reinterpreted as a little-endian f32. The tag is a
/// fixed bit pattern of the format, so it is compared exactly, never with an
/// epsilon.
pub const FLO_MAGIC: f32 = 202021.25;

/// Header length in bytes: magic tag, width and height.
const HEADER_SIZE: usize = 12;

/// Size of one sample value (bytes).
const SAMPLE_SIZE: usize = std::mem::size_of::<f32>();

/// Read a little-endian f32 from a byte buffer.
///
/// The caller guarantees `offset + 4 <= buf.len()`.
#[inline]
fn read_f32(buf: &[u8], offset: usize) -> f32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buf[offset..offset + 4]);
    f32::from_le_bytes(bytes)
}

/// Read a little-endian i32 from a byte buffer.
///
/// The caller guarantees `offset + 4 <= buf.len()`.
#[inline]
fn read_i32(buf: &[u8], offset: usize) -> i32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buf[offset..offset + 4]);
    i32::from_le_bytes(bytes)
}

/// Decode a flow field from the raw bytes of a .flo file.
///
/// The layout is little-endian throughout: a 4-byte magic tag equal to
/// [`FLO_MAGIC`], a signed 32-bit width, a signed 32-bit height, then
/// `width * height` interleaved `(u, v)` f32 pairs in row-major order.
/// Trailing bytes beyond the declared payload are ignored.
///
/// # Arguments
///
/// * `src` - Raw bytes of the .flo file.
///
/// # Returns
///
/// The decoded flow field.
///
/// # Errors
///
/// [`IoError::InvalidMagic`] when the tag does not match,
/// [`IoError::InvalidDimensions`] when a dimension is zero or negative, and
/// [`IoError::TruncatedData`] when fewer bytes remain than the header
/// declares.
pub fn decode_flo(src: &[u8]) -> Result<FlowField, IoError> {
    if src.len() < HEADER_SIZE {
        return Err(IoError::TruncatedData(HEADER_SIZE, src.len()));
    }

    let magic = read_f32(src, 0);
    if magic.to_bits() != FLO_MAGIC.to_bits() {
        return Err(IoError::InvalidMagic(magic));
    }

    let width = read_i32(src, 4);
    let height = read_i32(src, 8);
    if width <= 0 || height <= 0 {
        return Err(IoError::InvalidDimensions(width as i64, height as i64));
    }

    let size = FieldSize {
        width: width as usize,
        height: height as usize,
    };

    // Compute the expected payload length with checked arithmetic and verify
    // it against the bytes actually present before allocating, so a malformed
    // header cannot request an unbounded buffer.
    let payload_size = size
        .width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(FLOW_CHANNELS))
        .and_then(|n| n.checked_mul(SAMPLE_SIZE))
        .ok_or(IoError::InvalidDimensions(width as i64, height as i64))?;

    let available = src.len() - HEADER_SIZE;
    if available < payload_size {
        return Err(IoError::TruncatedData(payload_size, available));
    }

    let data = src[HEADER_SIZE..HEADER_SIZE + payload_size]
        .chunks_exact(SAMPLE_SIZE)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect::<Vec<_>>();

    Ok(FlowField::new(size, data)?)
}

/// Encode a flow field as the raw bytes of a .flo file.
///
/// Produces the exact inverse of [`decode_flo`]: magic tag, width, height and
/// the interleaved `(u, v)` samples, all little-endian.
///
/// # Arguments
///
/// * `flow` - The flow field to encode.
///
/// # Returns
///
/// The encoded bytes.
///
/// # Errors
///
/// [`IoError::InvalidDimensions`] when a dimension exceeds the wire format's
/// signed 32-bit range.
pub fn encode_flo(flow: &FlowField) -> Result<Vec<u8>, IoError> {
    let size = flow.size();
    if size.width > i32::MAX as usize || size.height > i32::MAX as usize {
        return Err(IoError::InvalidDimensions(
            size.width as i64,
            size.height as i64,
        ));
    }

    let samples = flow.as_slice();

    let mut buf = Vec::with_capacity(HEADER_SIZE + samples.len() * SAMPLE_SIZE);
    buf.extend_from_slice(&FLO_MAGIC.to_le_bytes());
    buf.extend_from_slice(&(size.width as i32).to_le_bytes());
    buf.extend_from_slice(&(size.height as i32).to_le_bytes());
    for sample in samples {
        buf.extend_from_slice(&sample.to_le_bytes());
    }

    Ok(buf)
}

/// Read a flow field from a .flo file.
///
/// # Arguments
///
/// * `file_path` - The path to the .flo file.
///
/// # Returns
///
/// The decoded flow field.
///
/// # Errors
///
/// The file-access variants of [`IoError`], plus everything [`decode_flo`]
/// returns.
pub fn read_flo(file_path: impl AsRef<Path>) -> Result<FlowField, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists and carries the expected extension
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("flo"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let data = std::fs::read(file_path)?;
    decode_flo(&data)
}

/// Write a flow field to a .flo file.
///
/// # Arguments
///
/// * `file_path` - The path to the .flo file.
/// * `flow` - The flow field to write.
pub fn write_flo(file_path: impl AsRef<Path>, flow: &FlowField) -> Result<(), IoError> {
    let data = encode_flo(flow)?;
    std::fs::write(file_path, data)?;
    Ok(())
}
