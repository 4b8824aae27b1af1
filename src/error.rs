/// Fatal conditions reported by the benchmark driver. The sorting core itself has no error
/// cases.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("native integer width is {width} bytes, expected 4")]
    Environment { width: usize },
    #[error("n missing or invalid\n{0}")]
    Argument(String),
    #[error("sorting failed: {strategy} left element {index} smaller than its predecessor")]
    Correctness { strategy: &'static str, index: usize },
}

impl BenchError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            BenchError::Environment { .. } => 87,
            BenchError::Argument(_) => 111,
            BenchError::Correctness { .. } => 255,
        }
    }
}
