//! Status vocabulary shared with the evaluation manager.
//!
//! The numeric ids are persisted and shared with the tester; they must not be
//! renumbered independently of it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PutkaError, PutkaResult};

/// Result of a single test case *or* of a whole upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunStatus {
    /// Correct output
    Ok,
    /// Exit/runtime error
    Rte,
    /// Time limit exceeded
    Tle,
    /// Memory limit exceeded
    Mle,
    /// Output size limit exceeded
    Out,
    /// Thread count limit exceeded
    Thr,
    /// Illegal system call
    Sys,
    /// Nonzero exit code
    Ext,
    /// Wrong answer
    Wa,
    /// Presentation error
    Pe,
}

impl RunStatus {
    /// Every status, in id order.
    pub const ALL: [RunStatus; 10] = [
        RunStatus::Ok,
        RunStatus::Rte,
        RunStatus::Tle,
        RunStatus::Mle,
        RunStatus::Out,
        RunStatus::Thr,
        RunStatus::Sys,
        RunStatus::Ext,
        RunStatus::Wa,
        RunStatus::Pe,
    ];

    /// Persisted id.
    pub fn id(self) -> i32 {
        match self {
            RunStatus::Ok => 1,
            RunStatus::Rte => 2,
            RunStatus::Tle => 3,
            RunStatus::Mle => 4,
            RunStatus::Out => 5,
            RunStatus::Thr => 6,
            RunStatus::Sys => 7,
            RunStatus::Ext => 8,
            RunStatus::Wa => 9,
            RunStatus::Pe => 10,
        }
    }

    /// Decode a persisted id.
    pub fn from_id(id: i32) -> PutkaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or(PutkaError::UnknownRunStatus(id))
    }

    /// Decode a nullable persisted id.
    pub fn from_optional_id(id: Option<i32>) -> PutkaResult<Option<Self>> {
        id.map(Self::from_id).transpose()
    }

    /// Short code shown in listings
    pub fn code(self) -> &'static str {
        match self {
            RunStatus::Ok => "OK",
            RunStatus::Rte => "RTE",
            RunStatus::Tle => "TLE",
            RunStatus::Mle => "MLE",
            RunStatus::Out => "OUT",
            RunStatus::Thr => "THR",
            RunStatus::Sys => "SYS",
            RunStatus::Ext => "EXT",
            RunStatus::Wa => "WA",
            RunStatus::Pe => "PE",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Ok => "OK",
            RunStatus::Rte => "Exit/RunTime Error",
            RunStatus::Tle => "Time Limit Exceeded",
            RunStatus::Mle => "Memory Limit Exceeded",
            RunStatus::Out => "Output Size Limit Exceeded",
            RunStatus::Thr => "Thread Count Limit Exceeded",
            RunStatus::Sys => "Illegal System Call",
            RunStatus::Ext => "Nonzero Exit Code",
            RunStatus::Wa => "Wrong Answer",
            RunStatus::Pe => "Presentation Error",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for RunStatus {
    type Err = PutkaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| PutkaError::UnknownStatusCode(s.to_string()))
    }
}

impl TryFrom<i32> for RunStatus {
    type Error = PutkaError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

/// Processing stage of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Waiting,
    Testing,
    Done,
    Error,
    Manual,
}

impl UploadStatus {
    pub const ALL: [UploadStatus; 5] = [
        UploadStatus::Waiting,
        UploadStatus::Testing,
        UploadStatus::Done,
        UploadStatus::Error,
        UploadStatus::Manual,
    ];

    pub fn id(self) -> i32 {
        match self {
            UploadStatus::Waiting => 1,
            UploadStatus::Testing => 2,
            UploadStatus::Done => 3,
            UploadStatus::Error => 4,
            UploadStatus::Manual => 5,
        }
    }

    pub fn from_id(id: i32) -> PutkaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or(PutkaError::UnknownUploadStatus(id))
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadStatus::Waiting => "Waiting",
            UploadStatus::Testing => "Testing",
            UploadStatus::Done => "Done",
            UploadStatus::Error => "Internal error",
            UploadStatus::Manual => "Manual Inspection",
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Agreement of official solutions with one public sample case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleValidity {
    Ok,
    Fail,
    Mixed,
    Undetermined,
}

impl SampleValidity {
    pub fn id(self) -> i32 {
        match self {
            SampleValidity::Ok => 1,
            SampleValidity::Fail => 2,
            SampleValidity::Mixed => 3,
            SampleValidity::Undetermined => 4,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SampleValidity::Ok => "All official solutions agree with this sample case.",
            SampleValidity::Fail => "No official solution agrees with this sample case.",
            SampleValidity::Mixed => {
                "Some official solutions agree and some disagree with this sample case."
            }
            SampleValidity::Undetermined => {
                "Some official solutions were not evaluated on this sample case."
            }
        }
    }
}
