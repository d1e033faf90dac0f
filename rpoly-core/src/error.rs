#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PolygonError {
    #[error("Invalid {field}: {requirement}. Current value: {value}")]
    InvalidArgument {
        field: &'static str,
        requirement: &'static str,
        value: String,
    },

    #[error("Invalid property {name:?}. Accepted properties: {accepted}")]
    KeyNotFound { name: String, accepted: String },

    #[error("Index {index} out of range for a sequence of {len} polygons")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Cannot compare a polygon with a {other}")]
    TypeMismatch { other: &'static str },
}

impl PolygonError {
    pub fn invalid(field: &'static str, requirement: &'static str, value: impl ToString) -> Self {
        PolygonError::InvalidArgument {
            field,
            requirement,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PolygonError>;
