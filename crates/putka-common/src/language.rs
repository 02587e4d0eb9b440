//! Programming languages accepted for uploads.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PutkaError, PutkaResult};

/// Language of an upload. `Auto` is resolved from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Auto,
    Txt,
    C,
    Cpp,
    Pas,
    Java,
    /// Python 2, obsolete and unsupported
    PyNoauto,
    Py3,
    Perl,
    Cs,
    Prolog,
    Rb,
    Rust,
    Kotlin,
    Go,
}

impl Language {
    pub const ALL: [Language; 15] = [
        Language::Auto,
        Language::Txt,
        Language::C,
        Language::Cpp,
        Language::Pas,
        Language::Java,
        Language::PyNoauto,
        Language::Py3,
        Language::Perl,
        Language::Cs,
        Language::Prolog,
        Language::Rb,
        Language::Rust,
        Language::Kotlin,
        Language::Go,
    ];

    /// Persisted id.
    pub fn id(self) -> i32 {
        match self {
            Language::Auto => 100,
            Language::Txt => 0,
            Language::C => 1,
            Language::Cpp => 2,
            Language::Pas => 3,
            Language::Java => 4,
            Language::PyNoauto => 5,
            Language::Perl => 6,
            Language::Cs => 7,
            Language::Py3 => 8,
            Language::Prolog => 9,
            Language::Rb => 10,
            Language::Rust => 11,
            Language::Kotlin => 12,
            Language::Go => 13,
        }
    }

    pub fn from_id(id: i32) -> PutkaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.id() == id)
            .ok_or(PutkaError::UnknownLanguage(id))
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Auto => "(Auto)",
            Language::Txt => "text",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Pas => "Pascal",
            Language::Java => "Java",
            Language::PyNoauto => "Python 2",
            Language::Py3 => "Py 3",
            Language::Perl => "Perl",
            Language::Cs => "C#",
            Language::Prolog => "Prolog (SWI)",
            Language::Rb => "Ruby",
            Language::Rust => "Rust",
            Language::Kotlin => "Kotlin",
            Language::Go => "Go",
        }
    }

    /// Language support on a standard deployment.
    pub fn is_supported_by_default(self) -> bool {
        match self {
            Language::Auto
            | Language::Txt
            | Language::C
            | Language::Cpp
            | Language::Pas
            | Language::Java
            | Language::Py3
            | Language::Cs
            | Language::Rust
            | Language::Kotlin
            | Language::Go => true,
            Language::PyNoauto | Language::Perl | Language::Prolog | Language::Rb => false,
        }
    }

    /// Map a file extension (including the leading dot) to a language.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".txt" => Some(Language::Txt),
            ".c" => Some(Language::C),
            ".cpp" => Some(Language::Cpp),
            ".pas" => Some(Language::Pas),
            ".java" => Some(Language::Java),
            ".py" => Some(Language::Py3),
            ".perl" => Some(Language::Perl),
            ".cs" => Some(Language::Cs),
            ".prolog" => Some(Language::Prolog),
            ".rb" => Some(Language::Rb),
            ".rs" => Some(Language::Rust),
            ".kt" => Some(Language::Kotlin),
            ".go" => Some(Language::Go),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resolve `Auto` from the filename extension; other languages pass through.
pub fn lang_from_extension(lang: Language, filename: &str) -> Option<Language> {
    if lang != Language::Auto {
        return Some(lang);
    }
    let ext = Path::new(filename).extension()?.to_str()?;
    Language::from_extension(&format!(".{ext}"))
}
