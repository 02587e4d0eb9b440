//! Verdict computations over persisted judge results.
//!
//! Everything here is pure and synchronous: the functions take results that
//! were already loaded and return derived values for display or filtering.

pub mod arithmetic;
pub mod display;
pub mod masking;
pub mod samples;
pub mod subtasks;
pub mod testscript;
pub mod verdict;

pub use masking::{MaskingPolicy, mask, mask_optional, unmask};
pub use samples::sample_validity;
pub use subtasks::{SubtaskDetails, maybe_split_into_subtasks};
pub use testscript::{TaskLimits, subtask_info, task_limits};
pub use verdict::{effective_status, test_status};
