use thiserror::Error;

#[derive(Error, Debug)]
pub enum DynarrError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{what} {index} is out of range for length {len}")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("erase interval [{begin}, {end}) is empty")]
    EmptyInterval { begin: usize, end: usize },

    #[error("capacity overflow: cannot allocate {requested} slots")]
    CapacityOverflow { requested: usize },

    #[error("Underflow: {0}")]
    Underflow(&'static str),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl DynarrError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            DynarrError::OutOfRange { .. } | DynarrError::EmptyInterval { .. }
        )
    }

    pub fn is_capacity_overflow(&self) -> bool {
        matches!(self, DynarrError::CapacityOverflow { .. })
    }

    pub fn is_underflow(&self) -> bool {
        matches!(self, DynarrError::Underflow(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DynarrError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, DynarrError>;
