//! Transaction execution port and receipt building for ember.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/refcell/ember/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod context;
pub use context::BlockContext;

mod outcome;
pub use outcome::{InvalidReason, TransactionOutcome, TransactionStatus};

mod receipt;
pub use receipt::{TransactionReceipt, build_receipt};

mod traits;
pub use traits::{BlockTransaction, TransactionProcessor};

mod transfer;
pub use transfer::{TRANSFER_EVENT_TOPIC, TX_BASE_GAS, Transfer, TransferProcessor};
