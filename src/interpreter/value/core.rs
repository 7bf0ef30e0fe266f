use std::fmt;

/// Represents a fully reduced value.
///
/// Values are immutable once built. Evaluating a literal hands out a copy, so
/// results never alias the tree they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A bare name, such as a register or mnemonic typed without quotes.
    Identifier(String),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A string literal's decoded contents.
    String(String),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// See [`Value::Identifier`].
    Identifier,
    /// See [`Value::Integer`].
    Integer,
    /// See [`Value::Float`].
    Float,
    /// See [`Value::String`].
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
        };
        write!(f, "{name}")
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// Returns the kind of the value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Identifier(_) => ValueKind::Identifier,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Returns `true` for integers and floats.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Truthiness used by the logical operators.
    ///
    /// Zero and empty text are false; everything else is true.
    ///
    /// ```
    /// use asmrepl::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(Value::Float(0.5).is_truthy());
    /// assert!(!Value::String(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(r) => *r != 0.0,
            Self::Identifier(s) | Self::String(s) => !s.is_empty(),
        }
    }

    /// Returns the text of a string or identifier.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Identifier(s) | Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => {
                if r.is_finite() && r.fract() == 0.0 {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}
