use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Shape errors (a single tuple or sum is malformed)
/// - E2xxx: Domain errors (tags within a domain or universe)
/// - E3xxx: Transform errors (transform requests and differences)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Shape Errors (E1xxx)
    /// Malformed tuple or sum shape
    E1001,

    // Domain Errors (E2xxx)
    /// Two members of one domain share a tag
    E2001,
    /// Two domains share a tag
    E2002,
    /// Two tags of one domain generate the same name
    E2003,

    // Transform Errors (E3xxx)
    /// Transform request names an unknown domain
    E3001,
    /// Transform chain makes a domain its own ancestor
    E3002,
    /// Destination still references a removed tag
    E3003,
}

impl ErrorCode {
    /// Check if this is a shape error (E1xxx range).
    pub fn is_shape_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a transform error (E3xxx range).
    pub fn is_transform_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
