//! Console output: transcript rendering and one-line notices.

pub mod console;
