use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    /// A composite cross-axis can only be laid out as ordinal.
    #[error("cross axis has {columns} columns assigned but ordinal layout is excluded")]
    MultiColumnCrossAxis { columns: usize },

    #[error("unknown pad unit: {0}")]
    UnknownPadUnit(String),

    #[error("unknown axis type: {0}")]
    UnknownAxisType(String),

    #[error("unknown column type: {0}")]
    UnknownColumnType(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
