use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns `true` when a label (by name or by index) could not be resolved
    /// against a label table.
    pub fn is_label_not_found(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::LabelNotFound { .. } | ErrorKind::LabelIndexNotFound { .. }
        )
    }

    pub fn is_invalid_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidRange { .. })
    }

    pub fn label_not_found(label: impl Into<String>) -> Error {
        Error(
            ErrorKind::LabelNotFound {
                label: label.into(),
            }
            .into(),
        )
    }

    pub fn label_index_not_found(index: usize, table_len: usize) -> Error {
        Error(ErrorKind::LabelIndexNotFound { index, table_len }.into())
    }

    pub fn invalid_range(position: usize, start: i64, stop: i64) -> Error {
        Error(
            ErrorKind::InvalidRange {
                position,
                start,
                stop,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("label '{label}' is not present in the label table")]
    LabelNotFound { label: String },

    #[error("label index {index} is out of bounds for a table of {table_len} labels")]
    LabelIndexNotFound { index: usize, table_len: usize },

    #[error("invalid range at position {position}: start {start} is greater than stop {stop}")]
    InvalidRange {
        position: usize,
        start: i64,
        stop: i64,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
