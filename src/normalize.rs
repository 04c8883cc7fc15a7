/// Move names whose wiki title does not follow the regular capitalization.
/// Keys are lowercase.
const MOVE_TITLE_EXCEPTIONS: &[(&str, &str)] = &[
    ("u-turn", "U-turn"),
    ("v-create", "V-create"),
    ("x-scissor", "X-Scissor"),
    ("g-max", "G-Max"),
];

/// Words kept lowercase in a title unless they open it.
const TITLE_STOP_WORDS: &[&str] = &["of", "the", "in", "at", "to", "for", "with", "on", "by"];

/// Convert a free-form move name into its wiki page title, e.g.
/// `"light of ruin"` -> `"Light_of_Ruin"`.
pub fn move_title(move_name: &str) -> String {
    let lower = move_name.to_lowercase();
    if let Some((_, title)) = MOVE_TITLE_EXCEPTIONS.iter().find(|(k, _)| *k == lower) {
        return (*title).to_string();
    }

    move_name
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let word_lower = word.to_lowercase();
            if i > 0 && TITLE_STOP_WORDS.contains(&word_lower.as_str()) {
                word_lower
            } else {
                capitalize_word(word)
            }
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Capitalize every hyphen-separated segment ("will-o-wisp" -> "Will-O-Wisp").
fn capitalize_word(word: &str) -> String {
    word.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(f) => f.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// CSV file name for a move: `"Light of Ruin"` -> `"light_of_ruin_learners.csv"`.
pub fn output_file_name(move_name: &str) -> String {
    format!("{}_learners.csv", move_name.to_lowercase().replace(' ', "_"))
}
