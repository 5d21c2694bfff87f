//! Shell-facing helpers for the md2x binary.

pub mod output;
