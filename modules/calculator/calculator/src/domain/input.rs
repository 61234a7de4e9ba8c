//! Raw calculate input, kept loose enough to tell "missing" from "wrong type".

/// One request field as the client sent it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent or `null`.
    Missing,
    Number(f64),
    Text(String),
    Bool(bool),
    /// Arrays and objects.
    Composite,
}

impl FieldValue {
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// JavaScript truthiness: `0`, `""`, `false` and missing are falsy.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Text(s) => s.is_empty(),
            Self::Bool(b) => !b,
            Self::Composite => false,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculateCommand {
    pub first_value: FieldValue,
    pub second_value: FieldValue,
    pub operation: FieldValue,
}

impl CalculateCommand {
    pub(crate) fn fields(&self) -> [&FieldValue; 3] {
        [&self.first_value, &self.second_value, &self.operation]
    }
}
