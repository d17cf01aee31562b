//! In-memory world state and buffering overlays.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/refcell/ember/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod changes;
pub use changes::ChangeSet;

mod memory;
pub use memory::MemoryWorldState;

mod overlay;
pub use overlay::Updater;
pub(crate) use overlay::Layer;
