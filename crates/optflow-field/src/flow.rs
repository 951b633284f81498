use crate::error::FieldError;

/// Flow field size in cells
///
/// A struct to represent the size of a flow field in grid cells.
///
/// # Examples
///
/// ```
/// use optflow_field::FieldSize;
///
/// let field_size = FieldSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(field_size.width, 10);
/// assert_eq!(field_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    /// Width of the field in cells
    pub width: usize,
    /// Height of the field in cells
    pub height: usize,
}

impl std::fmt::Display for FieldSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "FieldSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for FieldSize {
    fn from(size: [usize; 2]) -> Self {
        FieldSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Number of values stored per grid cell: the u and v displacement components.
pub const FLOW_CHANNELS: usize = 2;

/// Represents a dense optical-flow field.
///
/// Each grid cell holds a 2D displacement vector `(u, v)` estimating pixel
/// motion between two images. The samples are stored interleaved in row-major
/// order: all columns of one row before the next row begins, and the pair
/// `(u, v)` of a cell at (row `r`, column `c`) starts at flat index
/// `(r * width + c) * 2`.
#[derive(Clone)]
pub struct FlowField {
    size: FieldSize,
    data: Vec<f32>,
}

impl FlowField {
    /// Create a new flow field from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the field in cells.
    /// * `data` - The interleaved `(u, v)` samples in row-major order.
    ///
    /// # Returns
    ///
    /// A new flow field with the given samples.
    ///
    /// # Errors
    ///
    /// If a dimension is zero, or the data length does not match the field
    /// size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use optflow_field::{FieldSize, FlowField};
    ///
    /// let flow = FlowField::new(
    ///    FieldSize {
    ///       width: 10,
    ///      height: 20,
    ///  },
    /// vec![0f32; 10 * 20 * 2],
    /// ).unwrap();
    ///
    /// assert_eq!(flow.size().width, 10);
    /// assert_eq!(flow.size().height, 20);
    /// assert_eq!(flow.num_channels(), 2);
    /// ```
    pub fn new(size: FieldSize, data: Vec<f32>) -> Result<Self, FieldError> {
        if size.width == 0 || size.height == 0 {
            return Err(FieldError::InvalidDimensions(size.width, size.height));
        }

        // check if the data length matches the field size
        let expected = size.width * size.height * FLOW_CHANNELS;
        if data.len() != expected {
            return Err(FieldError::SampleCountMismatch(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new flow field with the given size and a constant displacement.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the field in cells.
    /// * `val` - The value assigned to both components of every cell.
    ///
    /// # Errors
    ///
    /// If a dimension is zero, an error is returned.
    pub fn from_size_val(size: FieldSize, val: f32) -> Result<Self, FieldError> {
        let data = vec![val; size.width * size.height * FLOW_CHANNELS];
        Self::new(size, data)
    }

    /// Get the size of the field in cells.
    pub fn size(&self) -> FieldSize {
        self.size
    }

    /// Get the width of the field in cells.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the field in cells.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of values stored per cell.
    pub fn num_channels(&self) -> usize {
        FLOW_CHANNELS
    }

    /// Get the samples in row-major interleaved order.
    ///
    /// The elements returned are in the following order:
    ///
    /// `field[0,0].u, field[0,0].v, field[0,1].u, ... field[0,N].v, field[1,0].u, ...`
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume the field and return the underlying sample buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Get the `(u, v)` displacement at the given cell.
    ///
    /// # Arguments
    ///
    /// * `x` - horizontal coordinate of the cell.
    /// * `y` - vertical coordinate of the cell.
    ///
    /// # Returns
    ///
    /// The displacement pair, or `None` when the coordinates are out of
    /// bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<(f32, f32)> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }

        let idx = (y * self.size.width + x) * FLOW_CHANNELS;
        Some((self.data[idx], self.data[idx + 1]))
    }

    /// Extract one component plane of the field.
    ///
    /// # Arguments
    ///
    /// * `channel` - The component to extract: 0 for u, 1 for v.
    ///
    /// # Returns
    ///
    /// The plane as a row-major vector of `width * height` values.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Vec<f32>, FieldError> {
        if channel >= FLOW_CHANNELS {
            return Err(FieldError::ChannelIndexOutOfBounds(channel));
        }

        Ok(self
            .data
            .iter()
            .skip(channel)
            .step_by(FLOW_CHANNELS)
            .copied()
            .collect())
    }

    /// Iterate every cell of the field in row-major order.
    ///
    /// The resulting iterator yields `(x, y, (u, v))` entries.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, (f32, f32))> + '_ {
        let width = self.size.width;
        self.data
            .chunks_exact(FLOW_CHANNELS)
            .enumerate()
            .map(move |(i, uv)| (i % width, i / width, (uv[0], uv[1])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;

    #[test]
    fn flow_field_new() -> Result<(), FieldError> {
        let flow = FlowField::new(
            FieldSize {
                width: 3,
                height: 2,
            },
            vec![0.0; 3 * 2 * 2],
        )?;

        assert_eq!(flow.width(), 3);
        assert_eq!(flow.height(), 2);
        assert_eq!(flow.num_channels(), 2);
        assert_eq!(flow.as_slice().len(), 12);

        Ok(())
    }

    #[test]
    fn rejects_zero_dimensions() {
        let res = FlowField::new(
            FieldSize {
                width: 0,
                height: 5,
            },
            vec![],
        );
        assert!(matches!(res, Err(FieldError::InvalidDimensions(0, 5))));

        let res = FlowField::from_size_val(
            FieldSize {
                width: 4,
                height: 0,
            },
            1.0,
        );
        assert!(matches!(res, Err(FieldError::InvalidDimensions(4, 0))));
    }

    #[test]
    fn rejects_sample_count_mismatch() {
        let res = FlowField::new(
            FieldSize {
                width: 2,
                height: 2,
            },
            vec![0.0; 7],
        );
        assert!(matches!(res, Err(FieldError::SampleCountMismatch(7, 8))));
    }

    #[test]
    fn get_maps_row_major() -> Result<(), FieldError> {
        // cell (x, y) holds (u, v) = (y * width + x, -(y * width + x))
        let size = FieldSize {
            width: 3,
            height: 2,
        };
        let data = (0..6)
            .flat_map(|i| [i as f32, -(i as f32)])
            .collect::<Vec<_>>();
        let flow = FlowField::new(size, data)?;

        assert_eq!(flow.get(0, 0), Some((0.0, -0.0)));
        assert_eq!(flow.get(2, 0), Some((2.0, -2.0)));
        assert_eq!(flow.get(0, 1), Some((3.0, -3.0)));
        assert_eq!(flow.get(2, 1), Some((5.0, -5.0)));
        assert_eq!(flow.get(3, 0), None);
        assert_eq!(flow.get(0, 2), None);

        Ok(())
    }

    #[test]
    fn channel_extracts_planes() -> Result<(), FieldError> {
        let size = FieldSize {
            width: 2,
            height: 1,
        };
        let flow = FlowField::new(size, vec![1.5, -2.0, 0.0, 3.25])?;

        assert_eq!(flow.channel(0)?, vec![1.5, 0.0]);
        assert_eq!(flow.channel(1)?, vec![-2.0, 3.25]);
        assert!(matches!(
            flow.channel(2),
            Err(FieldError::ChannelIndexOutOfBounds(2))
        ));

        Ok(())
    }

    #[test]
    fn iter_yields_row_major_cells() -> Result<(), FieldError> {
        let size = FieldSize {
            width: 2,
            height: 2,
        };
        let data = (0..4).flat_map(|i| [i as f32, i as f32]).collect::<Vec<_>>();
        let flow = FlowField::new(size, data)?;

        let cells = flow.iter().collect::<Vec<_>>();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], (0, 0, (0.0, 0.0)));
        assert_eq!(cells[1], (1, 0, (1.0, 1.0)));
        assert_eq!(cells[2], (0, 1, (2.0, 2.0)));
        assert_eq!(cells[3], (1, 1, (3.0, 3.0)));

        Ok(())
    }

    #[test]
    fn from_size_val_fills_both_components() -> Result<(), FieldError> {
        let flow = FlowField::from_size_val(
            FieldSize {
                width: 2,
                height: 3,
            },
            0.5,
        )?;

        assert_eq!(flow.as_slice(), &[0.5; 12][..]);

        Ok(())
    }
}
