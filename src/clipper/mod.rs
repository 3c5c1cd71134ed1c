//! Random clip extraction.
//!
//! Samples fixed-length intervals uniformly at random from a source video
//! and exports each one as an independent file.

pub mod command;
mod naming;
mod sampler;

pub use command::{ClipReport, ExportedClip, create_random_clips};
pub use naming::clip_filename;
pub use sampler::{ClipRequest, sample_clip_requests};
