//! Call-site frames and the resolvers that capture them.

use std::fmt;

use backtrace::Backtrace;

/// One recorded call-site location on a captured stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    file: String,
    function: String,
    line: u32,
}

impl Frame {
    /// Create a frame from an already-resolved location.
    pub fn new(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            function: function.into(),
            line,
        }
    }

    /// Source file path at capture time.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Fully-qualified enclosing function name.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Line number at capture time. Informational only, not part of the
    /// frame's identity.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Identity used to bucket parameters attached at this call site.
    ///
    /// Two calls from the same function on different lines share one
    /// identity.
    pub fn id(&self) -> FrameId {
        FrameId(format!("{}-{}", self.file, self.function))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file:{}:{}, func:{}", self.file, self.line, self.function)
    }
}

/// Bucket key for parameters: the `(file, function)` pair of a call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameId(String);

impl FrameId {
    /// The identity as a string, `<file>-<function>`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves call-site frames from the current execution context.
///
/// [`Error`](crate::Error) depends on this trait rather than a concrete
/// unwinder, so a scripted implementation can stand in during tests.
pub trait FrameResolver {
    /// Ordered frames for the current execution context, closest caller
    /// first, after skipping `skip` application frames.
    ///
    /// A partial or empty result is valid: walking stops silently once no
    /// further frame resolves.
    fn capture(&self, skip: usize) -> Vec<Frame>;

    /// The single application frame `skip` levels above the invocation,
    /// if one resolves.
    fn call_site(&self, skip: usize) -> Option<Frame> {
        self.capture(skip).into_iter().next()
    }
}

/// [`FrameResolver`] backed by the live call stack.
///
/// Symbol names are demangled with the hash suffix stripped, so a frame's
/// `(file, function)` identity is stable across rebuilds. Frames that
/// cannot be symbolicated are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallStackResolver;

impl FrameResolver for CallStackResolver {
    fn capture(&self, skip: usize) -> Vec<Frame> {
        let trace = Backtrace::new();
        let mut frames = Vec::new();
        for frame in trace.frames() {
            for symbol in frame.symbols() {
                let (Some(name), Some(file)) = (symbol.name(), symbol.filename()) else {
                    continue;
                };
                let function = format!("{name:#}");
                if is_internal(&function) {
                    continue;
                }
                frames.push(Frame::new(
                    file.to_string_lossy(),
                    function,
                    symbol.lineno().unwrap_or(0),
                ));
            }
        }
        frames.drain(..skip.min(frames.len()));
        tracing::trace!("captured {} application frames", frames.len());
        frames
    }
}

/// Frames the recorded trail must not include: the unwinder itself, this
/// crate's wrap/annotate plumbing, and everything below the program's own
/// `main`.
fn is_internal(function: &str) -> bool {
    const PREFIXES: &[&str] = &[
        "backtrace::",
        "errtrail::error::",
        "errtrail::frame::",
        "errtrail::render::",
        "std::",
        "core::",
        "alloc::",
        "test::",
        "__libc_start_main",
        "__rust_",
        "_start",
        "rust_begin_unwind",
        "start_thread",
    ];
    // The C entry shim; the application's qualified `main` is kept.
    if function == "main" {
        return true;
    }
    PREFIXES.iter().any(|prefix| function.starts_with(prefix))
}
