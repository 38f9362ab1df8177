//! The feed view and its state machine.
//!
//! # Submodules
//!
//! - [`state`]: [`ViewState`], the tagged union of `Loading`, `Error`, and `Ready`
//! - [`feed_view`]: [`FeedView`], which owns the state and runs one load per activation
//!
//! # Lifecycle
//!
//! ```text
//! activate ──> Loading ──(load ok)──> Ready
//!                 │
//!                 └──(load failed)──> Error
//! ```
//!
//! `Ready` and `Error` are terminal until the view is activated again.

pub mod feed_view;
pub mod state;

pub use feed_view::FeedView;
pub use state::{Feed, ViewState};
