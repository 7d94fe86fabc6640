//! Testing helpers: plain-text rendering of element descriptors.
//!
//! Use [`descriptor_to_string`] to capture a descriptor as text for
//! snapshot-style assertions.

pub mod snapshot;

pub use snapshot::descriptor_to_string;
