//! Block state transition for ember.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/refcell/ember/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::{BlockProcessingError, BlockProcessingResult, FailureReason};

mod output;
pub use output::BlockOutput;

mod processor;
pub use processor::BlockProcessor;

mod scheduled;
pub use scheduled::ScheduledProcessor;
