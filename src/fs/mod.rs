//! Filesystem utilities for promptcast.

pub mod atomic;

pub use atomic::atomic_write;
