//! Request progress port
//!
//! Backend calls can take a while (video processing runs for minutes), so
//! use cases announce when a slow request starts and finishes. The
//! presentation layer decides how to show that — spinner, plain line, or
//! nothing.

/// Callback for long-running request lifecycles
pub trait RequestProgress: Send + Sync {
    /// A slow request is starting; `label` is user-facing text.
    fn on_start(&self, label: &str);

    /// The request finished, successfully or not.
    fn on_finish(&self);
}

/// No-op progress for tests and quiet mode
pub struct NoRequestProgress;

impl RequestProgress for NoRequestProgress {
    fn on_start(&self, _label: &str) {}
    fn on_finish(&self) {}
}
