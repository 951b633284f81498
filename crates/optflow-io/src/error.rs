/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open or manipulate the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error when the magic tag does not identify a .flo file.
    #[error("Invalid .flo magic tag: expected 202021.25, got {0}")]
    InvalidMagic(f32),

    /// Error when a declared dimension is not strictly positive, or is not
    /// representable on the wire.
    #[error("Invalid flow dimensions: {0}x{1}")]
    InvalidDimensions(i64, i64),

    /// Error when fewer payload bytes remain than the header declares.
    #[error("Truncated flow data: expected {0} bytes, got {1}")]
    TruncatedData(usize, usize),

    /// Error to create the flow field.
    #[error("Failed to create flow field. {0}")]
    FieldCreationError(#[from] optflow_field::FieldError),
}
