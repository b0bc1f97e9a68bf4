//! Soft failures raised while evaluating templates and casting values.
//!
//! Evaluation never returns these to the caller. Each one is paired with a
//! fallback value at the point it occurs, and reported to a [`DiagnosticSink`].

use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A placeholder value could not be serialized; it was spliced as `""`.
    #[error("failed to stringify value for placeholder `{expression}`: {message}")]
    PlaceholderStringify { expression: String, message: String },

    /// An `object` field held a string that is not JSON; the trimmed string was kept.
    #[error("failed to parse object field value as JSON: {message}")]
    ObjectParse { input: String, message: String },

    /// A `string` field value could not be serialized; debug formatting was used.
    #[error("failed to stringify value for string field: {message}")]
    StringStringify { message: String },
}

/// Receiver for evaluation diagnostics.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Forwards diagnostics to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::PlaceholderStringify { expression, .. } => {
                tracing::warn!(%expression, "{diagnostic}");
            }
            Diagnostic::ObjectParse { input, .. } => {
                tracing::warn!(input_len = input.len(), "{diagnostic}");
            }
            Diagnostic::StringStringify { .. } => {
                tracing::warn!("{diagnostic}");
            }
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Buffers diagnostics in memory, in the order they were reported.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Remove and return everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A poisoned buffer still holds valid diagnostics.
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}
