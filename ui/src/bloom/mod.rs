//! Remote bloom processing: response model, report view model and the page panel.

pub mod payload;
pub mod status;
pub mod view_model;

mod view;
pub use view::BloomPanel;

pub use payload::{NdviStats, ProcessResult};
pub use status::{StatusKind, StatusMessage};
pub use view_model::{ResultView, Section, SectionBody};
