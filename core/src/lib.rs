//! End-of-round summary screen for breaklock.
//!
//! The view is built once against a [`Dom`] backend and refreshed for every
//! round through [`SummaryView::set_content`].

pub use config::*;
pub use dom::*;
pub use error::*;
pub use feedback::*;
pub use i18n::*;
pub use share::*;
pub use summary::*;

pub mod dom;

mod config;
mod error;
mod feedback;
mod i18n;
mod share;
mod summary;
