//! Deployment personalities.
//!
//! Each Putka deployment runs with a personality that selects how much
//! diagnostic detail ordinary users see and which languages are accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PutkaError;
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    /// Plain defaults, used for testing
    #[default]
    Default,
    Classic,
    Upm,
    Cerc,
    Tomo,
    Rtk,
    Ceoi,
}

impl Personality {
    pub fn name(self) -> &'static str {
        match self {
            Personality::Default => "_",
            Personality::Classic => "classic",
            Personality::Upm => "upm",
            Personality::Cerc => "cerc",
            Personality::Tomo => "tomo",
            Personality::Rtk => "rtk",
            Personality::Ceoi => "ceoi",
        }
    }

    /// Show detailed jail statuses (OUT, THR, SYS, EXT, MLE) to ordinary users.
    /// When false they are shown as RTE, ACM-style.
    pub fn jailrun_details(self) -> bool {
        !matches!(self, Personality::Upm | Personality::Cerc)
    }

    /// Show presentation errors to ordinary users. When false they are shown as WA.
    pub fn presentation_errors(self) -> bool {
        !matches!(self, Personality::Upm | Personality::Cerc | Personality::Tomo)
    }

    /// Whether the deployment actually accepts uploads in `lang`.
    pub fn is_language_supported(self, lang: Language) -> bool {
        match self {
            Personality::Cerc => matches!(
                lang,
                Language::Auto
                    | Language::C
                    | Language::Cpp
                    | Language::Java
                    | Language::Py3
                    | Language::Kotlin
            ),
            Personality::Rtk => {
                !matches!(lang, Language::Kotlin | Language::Go) && lang.is_supported_by_default()
            }
            _ => lang.is_supported_by_default(),
        }
    }

    /// Languages accepted by this deployment, in declaration order.
    pub fn supported_languages(self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.is_language_supported(*lang))
            .collect()
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Personality {
    type Err = PutkaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "_" | "" | "default" => Ok(Personality::Default),
            "classic" => Ok(Personality::Classic),
            "upm" => Ok(Personality::Upm),
            "cerc" => Ok(Personality::Cerc),
            "tomo" => Ok(Personality::Tomo),
            "rtk" => Ok(Personality::Rtk),
            "ceoi" => Ok(Personality::Ceoi),
            other => Err(PutkaError::UnknownPersonality(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masking_flags() {
        assert!(Personality::Default.jailrun_details());
        assert!(Personality::Default.presentation_errors());
        assert!(!Personality::Upm.jailrun_details());
        assert!(!Personality::Cerc.presentation_errors());
        assert!(Personality::Tomo.jailrun_details());
        assert!(!Personality::Tomo.presentation_errors());
    }

    #[test]
    fn test_language_tables() {
        assert!(!Personality::Cerc.is_language_supported(Language::Rust));
        assert!(Personality::Cerc.is_language_supported(Language::Kotlin));
        assert!(!Personality::Rtk.is_language_supported(Language::Go));
        assert!(Personality::Rtk.is_language_supported(Language::Pas));
        assert!(Personality::Classic.is_language_supported(Language::Go));
        assert_eq!(Personality::Cerc.supported_languages().len(), 6);
    }

    #[test]
    fn test_parse() {
        assert_eq!("UPM".parse::<Personality>(), Ok(Personality::Upm));
        assert_eq!("_".parse::<Personality>(), Ok(Personality::Default));
        assert!("putka".parse::<Personality>().is_err());
    }
}
