//! The annotated error type and its annotation entry points.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::DynError;
use crate::frame::{CallStackResolver, Frame, FrameId, FrameResolver};
use crate::value::Value;

/// One key/value annotation attached at a call site.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    key: String,
    value: Value,
}

impl Param {
    /// The annotation label.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The annotation payload.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An error carrying the call stack captured when it was first wrapped and
/// the parameters each call site attached afterwards.
///
/// The stack is captured exactly once. Wrapping an [`Error`] again hands
/// back the same instance, and annotation only appends to the invoking
/// call site's parameter bucket; the frame list never changes after
/// construction.
pub struct Error {
    message: String,
    frames: Vec<Frame>,
    params: HashMap<FrameId, Vec<Param>>,
    resolver: Arc<dyn FrameResolver + Send + Sync>,
}

impl Error {
    /// Wrap a plain error, capturing the call stack once.
    ///
    /// Wrapping an already-wrapped error returns that same instance: no
    /// second capture, no frame duplication, parameters kept. The input is
    /// moved in, so there is no null case to handle.
    pub fn wrap(err: impl Into<DynError>) -> Error {
        Self::wrap_with(err, Arc::new(CallStackResolver))
    }

    /// Wrap with an explicit frame resolver.
    ///
    /// Annotation calls on the returned error resolve their call sites
    /// through the same resolver. An already-wrapped input keeps the
    /// resolver it was created with.
    pub fn wrap_with(
        err: impl Into<DynError>,
        resolver: Arc<dyn FrameResolver + Send + Sync>,
    ) -> Error {
        match err.into().downcast::<Error>() {
            Ok(wrapped) => *wrapped,
            Err(plain) => {
                let frames = resolver.capture(0);
                tracing::trace!("captured {} frames wrapping '{}'", frames.len(), plain);
                Error {
                    message: plain.to_string(),
                    frames,
                    params: HashMap::new(),
                    resolver,
                }
            }
        }
    }

    /// Attach `key:value` to the call site invoking this method.
    ///
    /// Returns the same error for chaining. The call site is the nearest
    /// enclosing function; if it cannot be resolved the attachment is
    /// dropped and the error comes back unchanged.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Error {
        let key = key.into();
        let Some(site) = self.resolver.call_site(0) else {
            tracing::trace!("call site unresolved, dropping annotation '{}'", key);
            return self;
        };
        self.params.entry(site.id()).or_default().push(Param {
            key,
            value: value.into(),
        });
        self
    }

    /// The underlying error's description, without stack information.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Call sites captured when the error was first wrapped, closest
    /// caller first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Parameters attached from call site `id`, in attachment order.
    pub fn params(&self, id: &FrameId) -> &[Param] {
        self.params.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Attach `key:value` to the call site invoking this function, wrapping
/// `err` first if it is still plain.
///
/// The wrap applies [`Error::wrap`] semantics, so annotating repeatedly
/// along a propagation chain never captures the stack twice.
pub fn annotate(
    err: impl Into<DynError>,
    key: impl Into<String>,
    value: impl Into<Value>,
) -> Error {
    Error::wrap(err).with(key, value)
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;

        if !self.frames.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Frames:")?;
            for frame in &self.frames {
                writeln!(f, "        {}", frame)?;
                for param in self.params(&frame.id()) {
                    writeln!(f, "            {}: {}", param.key(), param.value())?;
                }
            }
        }

        Ok(())
    }
}

impl std::error::Error for Error {}
