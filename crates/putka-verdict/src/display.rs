//! Icons, explanations and labels of results as shown to users.

use std::fmt;
use std::sync::LazyLock;

use putka_common::{RunStatus, TestCaseResult, Upload, UploadStatus};
use regex::Regex;
use serde::Serialize;

use crate::masking::{MaskingPolicy, mask_optional};

pub const COMPILE_ERROR_ICON: &str = "fa-exclamation-circle";
pub const COMPILE_ERROR_TEXT: &str = "Compile error";
pub const COMPILE_ERROR_MEANING: &str = "This error means that the program could not even be \
    compiled. A compile error can be e.g. a syntax error in Python, a compile or link error in \
    C++, a compile error in Java, etc. It can also mean that the compiler ran out of memory, took \
    too long to compile, or crashed during compilation. Currently the compile time limit is 30s \
    and there is no additional memory limit.";

pub const PARTIAL_POINTS_ICON: &str = "fa-exclamation-triangle";
pub const PARTIAL_POINTS_MEANING: &str = "If the contest type allows it, partial points may be \
    awarded. This is the icon you will see if you get non-zero amount of points, but not all the \
    points. The status can be any of the statuses of the not OK individual test cases.";

static INPUT_FILENAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*\.(?:pub)?)in").expect("Invalid input filename regex"));

pub fn run_status_icon(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Ok => "fa-check",
        RunStatus::Pe => "fa-presentation-error",
        RunStatus::Rte
        | RunStatus::Tle
        | RunStatus::Mle
        | RunStatus::Out
        | RunStatus::Thr
        | RunStatus::Sys
        | RunStatus::Ext
        | RunStatus::Wa => "fa-times",
    }
}

pub fn run_status_meaning(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Ok => {
            "The solution is correct. Full points are awarded for this task. Depending on the \
             contest type, deductions for multiple submissions are possible. The judge system is \
             usually relatively lenient with whitespace: an extra space or tab just before the \
             newline is allowed. Also, the number of newlines at end of file does not matter. \
             Note that this may be different for specific tasks."
        }
        RunStatus::Rte => {
            "The program crashed during evaluation. This includes e.g. segmentation faults in \
             C++, exceptions in Java and Python, and many other possible reasons."
        }
        RunStatus::Tle => {
            "The program did not finish in the allotted time and was terminated. The reported \
             execution time may be slightly above the limit; it only means that the program was \
             terminated after it exceeded the time limit, not that it almost finished."
        }
        RunStatus::Mle => {
            "The program tried to allocate more memory than allowed and was terminated as soon \
             as the limit was reached. Hitting the memory limit often manifests as a program \
             crash, which will be reported as RTE."
        }
        RunStatus::Out => {
            "The program produced too much output (stdout or stderr), and was terminated. The \
             usual limit is 100 MB."
        }
        RunStatus::Thr => {
            "The program spawned too many threads or processes, and was terminated. The usual \
             limit is 1 thread."
        }
        RunStatus::Sys => {
            "The program attempted a disallowed system call and was terminated, e.g. it tried to \
             open a file or connect to the network. Some illegal calls may also happen while a \
             crashing program's runtime does its crash handling. If you did not do anything \
             forbidden, you can safely treat this as an RTE."
        }
        RunStatus::Ext => {
            "The program finished with a non-zero exit code. Make sure you have `return 0` in \
             your C / C++ code."
        }
        RunStatus::Wa => {
            "The program finished successfully, but the output produced was not entirely correct."
        }
        RunStatus::Pe => {
            "This is a special version of the WA result. The output of your program and the \
             official output differ only in whitespace. The task is not considered solved, and \
             the solution must be fixed and resubmitted."
        }
    }
}

/// Icon of a lifecycle stage. `Done` has none; the aggregate result decides it.
pub fn upload_status_icon(status: UploadStatus) -> Option<&'static str> {
    match status {
        UploadStatus::Waiting => Some("fa-clock"),
        UploadStatus::Testing => Some("fa-stopwatch"),
        UploadStatus::Done => None,
        UploadStatus::Error => Some("fa-skull-crossbones"),
        UploadStatus::Manual => Some("fa-hand-paper"),
    }
}

pub fn upload_status_meaning(status: UploadStatus) -> &'static str {
    match status {
        UploadStatus::Waiting => {
            "The submission is waiting in the evaluation queue for a free tester."
        }
        UploadStatus::Testing => "The submission is being evaluated on the official test cases.",
        UploadStatus::Done => {
            "The submission has been evaluated successfully. The result of the evaluation (e.g. \
             WA, TLE, OK) with the corresponding icon is reported to the user."
        }
        UploadStatus::Error => {
            "There was an internal error during the evaluation, and the submission could not be \
             evaluated. Please alert the judge team so that they can fix the problem and \
             reevaluate the submission."
        }
        UploadStatus::Manual => {
            "The submission has been evaluated, but is waiting for manual inspection from the \
             judges. The judges will manually judge the solution, and the status of your \
             submission should change to e.g. RTE. If the manual status persists, please alert \
             the judges."
        }
    }
}

/// Icon summarizing an upload for a viewer.
pub fn upload_icon(upload: &Upload, is_staff: bool, policy: &MaskingPolicy) -> Option<&'static str> {
    if let Some(icon) = upload_status_icon(upload.status) {
        return Some(icon);
    }
    if upload.is_compile_error() {
        return Some(COMPILE_ERROR_ICON);
    }
    if let (Some(points), Some(max_points)) = (upload.points, upload.max_points) {
        if 0 < points && points < max_points {
            return Some(PARTIAL_POINTS_ICON);
        }
    }
    mask_optional(upload.agg_status, is_staff, policy).map(run_status_icon)
}

/// Short description of an upload, e.g. `Upload #12 (WA, 40/100)`.
pub struct Headline<'a> {
    upload: &'a Upload,
    is_staff: bool,
    policy: &'a MaskingPolicy,
}

pub fn headline<'a>(upload: &'a Upload, is_staff: bool, policy: &'a MaskingPolicy) -> Headline<'a> {
    Headline {
        upload,
        is_staff,
        policy,
    }
}

impl fmt::Display for Headline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let upload = self.upload;
        write!(f, "Upload #{} (", upload.id)?;
        if upload.status != UploadStatus::Done {
            write!(f, "{}", upload.status.label())?;
        } else if upload.preparation_status != Some(RunStatus::Ok) {
            write!(f, "{COMPILE_ERROR_TEXT}")?;
        } else {
            match mask_optional(upload.agg_status, self.is_staff, self.policy) {
                Some(status) => write!(f, "{}", status.code())?,
                None => write!(f, "{}", upload.status.label())?,
            }
        }
        if let Some(points) = upload.points {
            match upload.max_points {
                Some(max_points) => write!(f, ", {points}/{max_points}")?,
                None => write!(f, ", {points}/-")?,
            }
        }
        write!(f, ")")
    }
}

/// CSS class of a test case score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreClass {
    Fail,
    Partial,
    Ok,
}

impl ScoreClass {
    pub fn of(points: i32, max_points: i32) -> Self {
        if points == 0 && max_points > 0 {
            ScoreClass::Fail
        } else if points < max_points {
            ScoreClass::Partial
        } else {
            ScoreClass::Ok
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreClass::Fail => "fail",
            ScoreClass::Partial => "partial",
            ScoreClass::Ok => "ok",
        }
    }
}

/// Score of a test case as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub class: ScoreClass,
    pub points: i32,
    pub max_points: i32,
}

/// Public samples do not count towards the score and always display `0/0`.
pub fn test_score(test: &TestCaseResult) -> Score {
    let class = ScoreClass::of(test.points, test.max_points);
    if test.is_public_sample() {
        Score {
            class,
            points: 0,
            max_points: 0,
        }
    } else {
        Score {
            class,
            points: test.points,
            max_points: test.max_points,
        }
    }
}

/// Name of the official output file for a test input, e.g. `1.05.in` gives
/// `1.05.out` and `sample.pubin` gives `sample.pubout`.
pub fn output_filename(input: &str) -> String {
    INPUT_FILENAME_REGEX.replace(input, "${1}out").into_owned()
}
