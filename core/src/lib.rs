//! # Invmap Core
//!
//! Everything that touches the disk: loading host facts, materializing the
//! distro/release tree, writing the consolidated inventory, and the single-pass
//! [`Pipeline`] tying those together.

pub mod convert;
pub mod facts;
pub mod materialize;
pub mod pipeline;
pub mod stanza;
pub mod writer;

pub use pipeline::{Pipeline, RunReport};
