//! Status masking for ordinary users.
//!
//! Some deployments hide jail details (output, thread, syscall, exit code and
//! memory violations are all shown as RTE) or presentation errors (shown as
//! WA). Staff always see the real status.

use putka_common::RunStatus;
use putka_common::personality::Personality;
use serde::{Deserialize, Serialize};

/// Statuses shown as RTE when jail details are hidden.
pub const RTE_MASKED: [RunStatus; 5] = [
    RunStatus::Out,
    RunStatus::Thr,
    RunStatus::Sys,
    RunStatus::Ext,
    RunStatus::Mle,
];

/// What ordinary users are allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingPolicy {
    pub jailrun_details: bool,
    pub presentation_errors: bool,
}

impl MaskingPolicy {
    /// Show everything.
    pub const TRANSPARENT: MaskingPolicy = MaskingPolicy {
        jailrun_details: true,
        presentation_errors: true,
    };

    pub fn for_personality(personality: Personality) -> Self {
        MaskingPolicy {
            jailrun_details: personality.jailrun_details(),
            presentation_errors: personality.presentation_errors(),
        }
    }
}

impl Default for MaskingPolicy {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<Personality> for MaskingPolicy {
    fn from(personality: Personality) -> Self {
        Self::for_personality(personality)
    }
}

/// Status as shown to a viewer.
pub fn mask(status: RunStatus, is_staff: bool, policy: &MaskingPolicy) -> RunStatus {
    if is_staff {
        return status;
    }
    if !policy.jailrun_details && RTE_MASKED.contains(&status) {
        return RunStatus::Rte;
    }
    if !policy.presentation_errors && status == RunStatus::Pe {
        return RunStatus::Wa;
    }
    status
}

/// Like [`mask`]; a pending status stays pending.
pub fn mask_optional(
    status: Option<RunStatus>,
    is_staff: bool,
    policy: &MaskingPolicy,
) -> Option<RunStatus> {
    status.map(|s| mask(s, is_staff, policy))
}

/// All statuses that a viewer would see as `status`: the preimage of [`mask`].
///
/// Empty when nothing masks to `status`, e.g. MLE for a viewer who cannot see
/// jail details.
pub fn unmask(status: RunStatus, is_staff: bool, policy: &MaskingPolicy) -> Vec<RunStatus> {
    if is_staff {
        return vec![status];
    }
    if !policy.jailrun_details {
        if status == RunStatus::Rte {
            let mut all = vec![RunStatus::Rte];
            all.extend(RTE_MASKED);
            return all;
        }
        if RTE_MASKED.contains(&status) {
            return Vec::new();
        }
    }
    if !policy.presentation_errors {
        match status {
            RunStatus::Wa => return vec![RunStatus::Wa, RunStatus::Pe],
            RunStatus::Pe => return Vec::new(),
            _ => {}
        }
    }
    vec![status]
}
