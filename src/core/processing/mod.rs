//! Processing primitives: per-raster conversion, best-effort batch
//! conversion, complex decomposition, and quicklook persistence. Internal
//! building blocks consumed by the high-level `api` module.
pub mod convert;
pub mod decompose;
pub mod save;
