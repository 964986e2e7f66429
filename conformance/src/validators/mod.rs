//! Conformance validators, one module per artifact concern.

pub mod catalogue;
pub mod determinism;
pub mod documents;
pub mod manifest;
