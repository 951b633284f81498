#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access and format-specific
/// decoding/encoding failures.
pub mod error;

/// Middlebury .flo flow-field encoding and decoding.
///
/// Read and write dense optical-flow fields in the Middlebury benchmark's
/// binary interchange format. See [`flo::read_flo`] and [`flo::write_flo`]
/// for the file-based entry points, and [`flo::decode_flo`] and
/// [`flo::encode_flo`] for operating on raw bytes.
pub mod flo;
