//! Validity of public sample cases.
//!
//! A sample case is valid when the official solutions agree with its published
//! output. Disagreement usually means the sample output was edited by hand.

use std::collections::BTreeMap;

use putka_common::{RunStatus, SampleValidity, TestCaseResult};

use crate::verdict::test_status;

/// Classify a sample from the statuses official solutions got on it.
pub fn classify(statuses: &[Option<RunStatus>]) -> SampleValidity {
    if statuses.iter().any(Option::is_none) {
        SampleValidity::Undetermined
    } else if statuses.iter().all(|s| *s == Some(RunStatus::Ok)) {
        SampleValidity::Ok
    } else if statuses.iter().all(|s| *s != Some(RunStatus::Ok)) {
        SampleValidity::Fail
    } else {
        SampleValidity::Mixed
    }
}

/// Validity of each public sample, keyed by sample name.
///
/// `results` are test case results of official solutions; anything that is
/// not a public sample is ignored. Empty when there are no such results.
pub fn sample_validity<'a, I>(results: I) -> BTreeMap<String, SampleValidity>
where
    I: IntoIterator<Item = &'a TestCaseResult>,
{
    let mut statuses: BTreeMap<&str, Vec<Option<RunStatus>>> = BTreeMap::new();
    for result in results.into_iter().filter(|r| r.is_public_sample()) {
        statuses
            .entry(result.name.as_str())
            .or_default()
            .push(test_status(result));
    }
    statuses
        .into_iter()
        .map(|(name, statuses)| (name.to_string(), classify(&statuses)))
        .collect()
}
