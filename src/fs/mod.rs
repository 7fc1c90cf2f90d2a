//! Filesystem utilities for docfx-version-sync.
//!
//! Both output files (the rewritten config document and the generated
//! stylesheet) are replaced atomically so a crashed build never leaves a
//! half-written file behind.

pub mod atomic;

pub use atomic::atomic_write;
