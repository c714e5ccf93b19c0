//! Platform-agnostic building blocks shared by every screen.

pub mod format;
pub mod platform;
pub mod routes;
pub mod session;
pub mod speech;
pub mod storage;
pub mod theme;
