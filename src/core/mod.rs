//! Core building blocks: rename parameters, name derivation, plan building
//! and plan application. These are internal primitives consumed by the
//! high-level `api` module.
pub mod apply;
pub mod naming;
pub mod params;
pub mod plan;
