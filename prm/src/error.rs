use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrmError {
    #[error("obstacle must have non-negative finite origin and size, got ({x}, {y}) with size {width}x{height}")]
    InvalidObstacle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    #[error("map extents must be finite and positive, got {width}x{height}")]
    InvalidMapSize { width: f64, height: f64 },

    #[error("sequence base must be at least 2, got {0}")]
    InvalidBase(u32),

    #[error("halton bases {0} and {1} are not coprime")]
    NonCoprimeBases(u32, u32),

    #[error("edge check precision must be finite and positive, got {0}")]
    InvalidPrecision(f64),

    #[error("maximum edge length must be non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("unable to sample: accepted {accepted} of {target} vertices after {samples} samples")]
    SamplingExhausted {
        accepted: usize,
        target: usize,
        samples: usize,
    },
}

pub type Result<T> = std::result::Result<T, PrmError>;
