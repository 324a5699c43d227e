use thiserror::Error;

/// Argument failures callers can recover from. Broken tree invariants are not
/// represented here, those panic at the point of detection.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlockError {
    #[error("invalid size {size} at level {level} (max depth {max_depth})")]
    InvalidSize { size: i32, level: u8, max_depth: u8 },
    #[error("invalid level {level}, must be within {min}..={max}")]
    LevelOutOfRange { level: u8, min: u8, max: u8 },
}
