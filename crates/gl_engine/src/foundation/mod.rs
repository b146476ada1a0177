//! Foundational utilities shared by the library and the tutorial binaries

pub mod logging;
