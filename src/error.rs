use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialError {
    #[error("step must be zero or positive, got {0}")]
    NegativeStep(f32),
}

pub type Result<T> = std::result::Result<T, DialError>;
