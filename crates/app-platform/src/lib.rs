//! Platform integration for Love Quotes
//!
//! This crate handles the seams to the host platform: app lifecycle
//! phases and the advertising SDK that reacts to them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ads;

pub use ads::{
    AdEvent, AdPresentationTrigger, AdPresenter, NoopAdPresenter, RecordingAdPresenter, ScenePhase,
};
