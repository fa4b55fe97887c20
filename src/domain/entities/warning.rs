//! Non-fatal annotations attached to a successful link creation.

use std::fmt;

/// Category of a creation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    /// A value is present but fails a format check.
    MalformedParam,
    /// A dependent parameter was supplied without its prerequisite.
    UnrecognizedParam,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedParam => "MALFORMED_PARAM",
            Self::UnrecognizedParam => "UNRECOGNIZED_PARAM",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A warning produced while canonicalizing a link description.
///
/// Warnings never change what gets encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub code: WarningCode,
    pub message: String,
}

impl Warning {
    pub fn malformed(param: &str) -> Self {
        Self {
            code: WarningCode::MalformedParam,
            message: format!("Param '{param}' is not a valid URL"),
        }
    }

    pub fn unrecognized(param: &str, missing: &str) -> Self {
        Self {
            code: WarningCode::UnrecognizedParam,
            message: format!("Param '{param}' is not needed, since '{missing}' is not specified."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        let w = Warning::malformed("si");
        assert_eq!(w.code.as_str(), "MALFORMED_PARAM");
        assert_eq!(w.message, "Param 'si' is not a valid URL");

        let w = Warning::unrecognized("at", "isi");
        assert_eq!(w.code.to_string(), "UNRECOGNIZED_PARAM");
        assert_eq!(w.message, "Param 'at' is not needed, since 'isi' is not specified.");
    }
}
