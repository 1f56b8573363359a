use core::fmt;

pub mod champion;
pub mod versions;

#[derive(Debug)]
pub enum ParsingError {
    InvalidType(String),
    Empty(String),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::InvalidType(field) => write!(f, "Invalid type for field: {}", field),
            ParsingError::Empty(field) => write!(f, "Field is empty: {}", field),
        }
    }
}
