//! Declick Session - state mediator for an interactive de-click tool
//!
//! Holds the currently loaded audio asset, exposes the detection threshold
//! and maximum correction length, and republishes detected click patches.
//!
//! # Architecture
//!
//! - `engine`: the capability the detection engine implements (`Audio`)
//! - `session`: the `Session` mediator, its config and change notifier
//! - `cli`: command-line front end over a single session
//!
//! Detection, correction and audio decoding live in the engine and are
//! not part of this crate.

pub mod cli;
pub mod engine;
pub mod error;
pub mod session;

pub use engine::{Audio, ChannelType, FixtureAudio, Patch, Settings};
pub use error::{DeclickError, Result};
pub use session::{AudioChanged, Session, SessionConfig, SubscriptionId};
