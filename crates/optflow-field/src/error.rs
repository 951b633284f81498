/// An error type for the flow field module.
#[derive(thiserror::Error, Debug)]
pub enum FieldError {
    /// Error when width or height is zero.
    #[error("Invalid field dimensions: {0}x{1}")]
    InvalidDimensions(usize, usize),

    /// Error when the sample data length disagrees with the field size.
    #[error("Data length ({0}) does not match the field size ({1})")]
    SampleCountMismatch(usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds for a two-channel field")]
    ChannelIndexOutOfBounds(usize),
}
