use std::path::PathBuf;
use std::time::Duration;

use crate::format::PunctuationPolicy;
use crate::utils::wiki::DEFAULT_WIKI_BASE;

#[derive(Debug, Clone)]
pub struct LookupOptions {
    pub wiki_base: String,
    pub out_dir: PathBuf,
    pub punctuation: PunctuationPolicy,
    pub timeout: Option<Duration>,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            wiki_base: DEFAULT_WIKI_BASE.to_string(),
            out_dir: PathBuf::from("."),
            punctuation: PunctuationPolicy::default(),
            timeout: None,
        }
    }
}

/// Result of a successful lookup.
#[derive(Debug)]
pub struct Lookup {
    pub url: String,
    pub learners: Vec<String>,
    pub csv_path: PathBuf,
}
