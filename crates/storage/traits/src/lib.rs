//! Core trait abstractions for the ember world state and event reporting.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/refcell/ember/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod account;
pub use account::{Account, AccountMut};

mod error;
pub use error::StateError;

mod events;
pub use events::{EventSink, NoopSink, ProcessorEvent, RecordingSink, TracingSink};

mod state;
pub use state::{ScopedUpdater, WorldState, WorldUpdater};
