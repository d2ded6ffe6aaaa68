use thiserror::Error;

/// Errors surfaced at adapter construction time.
///
/// Everything past construction is either infallible or a contract
/// violation that panics; see the crate docs.
#[derive(Debug, Error)]
pub enum KripkeError {
    /// A proposition name does not carry a net-model identifier
    /// (`p<id>`). This indicates a broken formula-to-model linkage, not a
    /// runtime condition to recover from.
    #[error("invalid atomic proposition `{name}`")]
    InvalidProposition { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_display() {
        let err = KripkeError::InvalidProposition {
            name: "q1".to_string(),
        };
        assert_eq!(err.to_string(), "invalid atomic proposition `q1`");
    }
}
