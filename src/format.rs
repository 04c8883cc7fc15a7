/// Names whose symbols have no sensible upper-case form.
const OUTPUT_NAME_EXCEPTIONS: &[(&str, &str)] =
    &[("Nidoran♂", "NIDORANmA"), ("Nidoran♀", "NIDORANfE")];

/// Characters dropped from names under [`PunctuationPolicy::Strip`].
const STRIPPED_CHARS: &[char] = &[' ', '\'', '.', '-', ':'];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PunctuationPolicy {
    /// `"Mr. Mime"` -> `"MRMIME"`
    #[default]
    Strip,
    /// `"Mr. Mime"` -> `"MR. MIME"`
    Preserve,
}

/// Renders Pokémon names into the upper-case form written to the CSV.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputFormatter {
    pub punctuation: PunctuationPolicy,
}

impl OutputFormatter {
    pub fn new(punctuation: PunctuationPolicy) -> Self {
        Self { punctuation }
    }

    pub fn format_name(&self, name: &str) -> String {
        if let Some((_, fixed)) = OUTPUT_NAME_EXCEPTIONS.iter().find(|(k, _)| *k == name) {
            return (*fixed).to_string();
        }

        match self.punctuation {
            PunctuationPolicy::Strip => name
                .chars()
                .filter(|c| !STRIPPED_CHARS.contains(c))
                .collect::<String>()
                .to_uppercase(),
            PunctuationPolicy::Preserve => name.to_uppercase(),
        }
    }

    /// Format a sorted learner list, keeping its order.
    pub fn format_row(&self, names: &[String]) -> Vec<String> {
        names.iter().map(|n| self.format_name(n)).collect()
    }
}
