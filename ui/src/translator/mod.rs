pub mod engine;
pub mod history;
mod view;

pub use engine::{ImageRef, TranslatorState};
pub use history::HistoryRow;
pub use view::TranslatorView;
