//! Route paths shared by every platform's `Routable` enum.

pub const LOGIN: &str = "/";
pub const REGISTER: &str = "/registro";
pub const WORKSPACE: &str = "/traductor";
