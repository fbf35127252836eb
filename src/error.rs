use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error(
        "margins exceed outer dimensions: horizontal {horizontal} >= width {width} or vertical {vertical} >= height {height}"
    )]
    InvalidMargins {
        horizontal: f64,
        vertical: f64,
        width: f64,
        height: f64,
    },

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("field `{field}` has no finite values to compute an extent from")]
    EmptyDomain { field: &'static str },

    #[error("record {index} is missing a value for field `{field}`")]
    MissingValue { field: &'static str, index: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to read dataset: {0}")]
    DatasetIo(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),
}
