use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid value range [{min}, {max}), bounds must be finite and min < max")]
    InvalidRange { min: f64, max: f64 },

    #[error("OVERRIDE_SEED is not a valid u64: {0:?}")]
    InvalidSeed(String),

    #[error("using a random seed each time conflicts with the external seed override")]
    SeedConflict,

    #[error("failed to write status line")]
    Io(#[from] io::Error),
}
