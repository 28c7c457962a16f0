//! Navigation engine.
//!
//! - `history`    : breadcrumb stack
//! - `controller` : fade / load state machine driving the history
//! - `pipeline`   : prompt → backend → entry text, with fallback on failure

pub mod controller;
pub mod history;
pub mod pipeline;

pub use controller::{Navigator, Phase};
pub use history::{History, HistoryError};
pub use pipeline::{Backend, EntryRequest, GenerateError, WikiEngine};
