use clap::Parser;
use std::path::PathBuf;

use crate::utils::wiki::DEFAULT_WIKI_BASE;

#[derive(Parser, Debug)]
#[command(
    name = "move_learners",
    version,
    about = "List the Pokémon that can learn a move (from Bulbapedia) and save them as a CSV row"
)]
pub struct Cli {
    /// Move name, e.g. `light of ruin` (prompted for when omitted)
    #[arg(value_name = "MOVE")]
    pub words: Vec<String>,

    /// Wiki base URL the move page is looked up under
    #[arg(long, default_value = DEFAULT_WIKI_BASE)]
    pub wiki: String,

    /// Directory the CSV file is written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Keep spaces and punctuation in CSV names (only upper-case them)
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Request timeout in seconds (HTTP client default when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Move name given on the command line, words joined by single spaces.
    pub fn move_name(&self) -> Option<String> {
        if self.words.is_empty() {
            None
        } else {
            Some(self.words.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_words_form_the_move_name() {
        let cli = Cli::parse_from(["move_learners", "light", "of", "ruin"]);
        assert_eq!(cli.move_name().as_deref(), Some("light of ruin"));
        assert_eq!(cli.wiki, DEFAULT_WIKI_BASE);
        assert!(!cli.keep_punctuation);
    }

    #[test]
    fn no_words_means_prompt() {
        let cli = Cli::parse_from(["move_learners", "--keep-punctuation", "--timeout", "5"]);
        assert_eq!(cli.move_name(), None);
        assert!(cli.keep_punctuation);
        assert_eq!(cli.timeout, Some(5));
    }
}
