//! Shared UI crate for DigitalForge: views, session, theme sync, speech and i18n.

pub mod auth;
pub mod components;
pub mod core;
pub mod i18n;
pub mod translator;
pub mod views;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
