//! Core building blocks: scene file discovery and validation, output path
//! derivation, and the conversion/quicklook pipelines. These are internal
//! primitives consumed by the high-level `api` module.
pub mod discover;
pub mod outputs;
pub mod params;
pub mod processing;
