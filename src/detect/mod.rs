//! Sequence detection
//!
//! The detection pipeline runs in three stages:
//!
//! 1. [`group::GroupMap`] buckets decomposed filenames by their string runs,
//!    so `a.0001.exr` and `a.0002.exr` land in the same group.
//! 2. [`split::candidates`] decides, per group, which numeric slot is the
//!    frame index and splits the group when more than one slot varies.
//! 3. [`builder::build`] turns each candidate into a [`crate::Sequence`]
//!    with its pattern, range, step and padding.

pub mod builder;
pub mod group;
pub mod split;

pub use builder::build;
pub use group::{FrameTuple, GroupMap, PatternKey};
pub use split::{Candidate, candidates};
