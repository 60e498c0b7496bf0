//! Rift Rewind CLI library.
//!
//! Output formatting for the `rift-rewind-cli` binary, kept in a library so it
//! can be unit tested.

pub mod output;
