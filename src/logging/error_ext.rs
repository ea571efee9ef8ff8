//! Structured logging of settings errors

use std::error::Error as _;

use crate::types::SettingsError;

/// Log a settings error once, at the point it stops propagating
pub trait ErrorTraceExt {
    fn trace_error(&self) -> &Self;
}

impl ErrorTraceExt for SettingsError {
    fn trace_error(&self) -> &Self {
        let causes: Vec<String> = std::iter::successors(self.source(), |e| (*e).source())
            .map(ToString::to_string)
            .collect();

        match self {
            SettingsError::TypeMismatch {
                key,
                expected,
                found,
            } => tracing::error!(
                key = %key,
                expected = %expected,
                found = %found,
                "Setting holds a value of another type"
            ),
            SettingsError::InvalidPattern { pattern, .. } => tracing::error!(
                pattern = %pattern,
                causes = ?causes,
                "Extension search pattern does not compile"
            ),
            _ => tracing::error!(
                error = %self,
                error_kind = self.kind(),
                causes = ?causes,
                "Settings could not be loaded"
            ),
        }

        self
    }
}
