//! Human-readable reports for annotated errors.

use std::fmt::Write;

use crate::error::Error;

/// Render the full report for `err`.
///
/// A plain error renders as its bare description, with no stack section.
/// A wrapped [`Error`] renders its message followed by every captured
/// frame and the parameters attached there.
pub fn render(err: &(dyn std::error::Error + 'static)) -> String {
    match err.downcast_ref::<Error>() {
        Some(wrapped) => wrapped.report(),
        None => err.to_string(),
    }
}

impl Error {
    /// The report body: message header, then each frame in capture order
    /// with its attachment-ordered parameters.
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "err:{}", self.message());
        out.push_str("stack info:\n");
        for (idx, frame) in self.frames().iter().enumerate() {
            let _ = writeln!(out, "{}.{}", idx + 1, frame);
            let params = self.params(&frame.id());
            if params.is_empty() {
                continue;
            }
            out.push_str("  params:\n");
            for param in params {
                let _ = writeln!(out, "\t{}:{}", param.key(), param.value());
            }
        }
        out
    }
}
