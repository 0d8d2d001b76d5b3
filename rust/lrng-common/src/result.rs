pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Verifies that `start..=stop` is a well-formed closed interval.
///
/// `position` identifies the offending element in the caller's input and is
/// carried into the error.
#[inline]
pub fn verify_range(position: usize, start: i64, stop: i64) -> Result<()> {
    if start <= stop {
        Ok(())
    } else {
        invalid_range(position, start, stop)
    }
}

#[cold]
pub fn invalid_range(position: usize, start: i64, stop: i64) -> Result<()> {
    Err(crate::error::Error::invalid_range(position, start, stop))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_range() {
        assert!(verify_range(0, 0, 0).is_ok());
        assert!(verify_range(0, -5, 5).is_ok());
        let err = verify_range(2, 5, 2).unwrap_err();
        assert!(err.is_invalid_range());
    }
}
