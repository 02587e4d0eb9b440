//! Result summary request DTOs

use putka_common::{TestCaseResult, Upload};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_TEST_CASES_PER_REQUEST, MAX_TESTSCRIPT_LEN};

/// Who is looking at the results. Authentication happens in the front end.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Viewer {
    #[serde(default)]
    pub is_staff: bool,
}

/// Summarize one upload
#[derive(Debug, Deserialize, Validate)]
pub struct SummaryRequest {
    #[serde(default)]
    pub viewer: Viewer,

    /// Testscript of the upload's task
    #[serde(default)]
    #[validate(length(max = MAX_TESTSCRIPT_LEN))]
    pub testscript: String,

    pub upload: Upload,

    #[serde(default)]
    #[validate(length(max = MAX_TEST_CASES_PER_REQUEST))]
    pub test_cases: Vec<TestCaseResult>,
}

/// Classify public samples from official solution results
#[derive(Debug, Deserialize, Validate)]
pub struct SampleValidityRequest {
    #[validate(length(max = MAX_TEST_CASES_PER_REQUEST))]
    pub results: Vec<TestCaseResult>,
}
