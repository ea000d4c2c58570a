use core::fmt;

/// An error raised when a field in a YAML document has the wrong shape.
///
/// Fields which are missing never produce an error, the default value is
/// used instead.
#[derive(Debug)]
pub struct Error {
    key: Box<str>,
    kind: ErrorKind,
}

impl Error {
    /// Construct a new error.
    #[inline]
    pub(crate) fn new(key: &str, kind: ErrorKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Get the key of the field which failed to convert.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamlfields::yaml;
    ///
    /// let node: serde_yaml::Value = serde_yaml::from_str("enabled: [1, 2]")?;
    /// let error = yaml::bool_from(&node, "enabled", false).unwrap_err();
    /// assert_eq!(error.key(), "enabled");
    /// assert_eq!(error.kind(), yaml::ErrorKind::ExpectedBool);
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the kind of the error.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}: {}", self.key, self.kind)
    }
}

impl std::error::Error for Error {}

/// The kind of a field conversion error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Expected a boolean.
    ExpectedBool,
    /// Expected an integer.
    ExpectedInteger,
    /// The integer doesn't fit in the requested type.
    IntegerOutOfRange,
    /// Expected a scalar.
    ExpectedScalar,
    /// Expected a sequence.
    ExpectedSequence,
    /// Expected a scalar or a sequence.
    ExpectedScalarOrSequence,
    /// Expected an ISO 8601 date.
    ExpectedDate,
    /// Expected an ISO 8601 date and time.
    ExpectedDateTime,
    /// Expected a size or a duration.
    ExpectedQuantity,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ExpectedBool => write!(f, "expected a boolean"),
            ErrorKind::ExpectedInteger => write!(f, "expected an integer"),
            ErrorKind::IntegerOutOfRange => write!(f, "integer out of range"),
            ErrorKind::ExpectedScalar => write!(f, "expected a scalar"),
            ErrorKind::ExpectedSequence => write!(f, "not a list"),
            ErrorKind::ExpectedScalarOrSequence => write!(f, "neither scalar, nor list"),
            ErrorKind::ExpectedDate => write!(f, "expected a date"),
            ErrorKind::ExpectedDateTime => write!(f, "expected a date and time"),
            ErrorKind::ExpectedQuantity => write!(f, "expected a number or a quantity string"),
        }
    }
}
