//! Learnset extraction from a rendered Bulbapedia move page.
//!
//! The page layout is not under our control, so every structural rule lives
//! here behind [`PageExtractor`]. Callers only ever see a sorted list of
//! names.

use anyhow::Result;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::BTreeSet;
use std::sync::LazyLock;

// Selector and regex sources are literals; a failure here is a programming error.
static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2, h3, h4").expect("valid heading selector"));

static TITLED_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[title]").expect("valid link selector"));

static POKEMON_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+?\s\(Pokémon\)").expect("valid title regex"));

static REGIONAL_FORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Alolan|Galarian|Hisuian|Paldean)\s*Form").expect("valid form regex")
});

const POKEMON_TITLE_SUFFIX: &str = " (Pokémon)";
const SECTION_MARKER: &str = "learnset";

/// Turns a fetched page into the list of Pokémon it names.
pub trait PageExtractor {
    /// Returns names sorted and without duplicates.
    fn extract(&self, html: &str) -> Result<Vec<String>>;
}

/// Reads the "Learnset" section of a Bulbapedia move page.
///
/// Every table between the learnset heading and the next `h2` is scanned for
/// links to Pokémon pages. Regional forms ("Alolan Form", ...) printed after a
/// link add a second, qualified entry next to the base name.
#[derive(Debug, Default, Clone, Copy)]
pub struct LearnsetExtractor;

impl PageExtractor for LearnsetExtractor {
    fn extract(&self, html: &str) -> Result<Vec<String>> {
        let document = Html::parse_document(html);
        let mut learners = BTreeSet::new();

        let Some(heading) = document.select(&HEADING_SELECTOR).find(is_learnset_heading) else {
            return Ok(Vec::new());
        };

        let section = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .skip_while(|el| el.id() != heading.id())
            .take_while(|el| el.id() == heading.id() || el.value().name() != "h2");

        for table in section.filter(|el| el.value().name() == "table") {
            collect_table_learners(table, &mut learners);
        }

        Ok(learners.into_iter().collect())
    }
}

fn is_learnset_heading(heading: &ElementRef<'_>) -> bool {
    let text: String = heading.text().map(str::trim).collect();
    text.to_lowercase().starts_with(SECTION_MARKER)
}

fn collect_table_learners(table: ElementRef<'_>, learners: &mut BTreeSet<String>) {
    for link in table.select(&TITLED_LINK_SELECTOR) {
        let Some(base) = link.value().attr("title").and_then(pokemon_name) else {
            continue;
        };

        for form in regional_forms_after(link) {
            learners.insert(format!("{form} {base}"));
        }
        learners.insert(base);
    }
}

/// Pokémon name from a link title such as `"Pikachu (Pokémon)"`.
pub fn pokemon_name(title: &str) -> Option<String> {
    if !POKEMON_TITLE_RE.is_match(title) {
        return None;
    }
    let name = title.replace(POKEMON_TITLE_SUFFIX, "").trim().to_string();
    (!name.is_empty()).then_some(name)
}

/// Regional qualifier mentioned in `text`, e.g. `"Alolan"` for `"Alolan Form"`.
pub fn regional_form(text: &str) -> Option<&str> {
    REGIONAL_FORM_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Collect every regional form marker in the content that follows a Pokémon
/// link, up to the next link. The scan starts at the next element in
/// document order and then moves across that element's following siblings.
fn regional_forms_after(link: ElementRef<'_>) -> Vec<String> {
    let mut forms = Vec::new();
    let Some(start) = next_element(link) else {
        return forms;
    };

    for node in std::iter::once(*start).chain(start.next_siblings()) {
        let text = match node.value() {
            Node::Element(el) if el.name() == "a" => break,
            Node::Element(_) => ElementRef::wrap(node)
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default(),
            Node::Text(t) => (**t).to_string(),
            _ => continue,
        };

        if let Some(form) = regional_form(text.trim()) {
            forms.push(form.to_string());
        }
    }

    forms
}

/// Next element after `el` in document order: its first child element,
/// otherwise the first element found after it walking up the tree. The walk
/// never leaves the enclosing table row, so a form note belonging to the
/// next row is not picked up.
fn next_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if let Some(child) = el.descendants().skip(1).find_map(ElementRef::wrap) {
        return Some(child);
    }

    let mut cur = *el;
    loop {
        for sib in cur.next_siblings() {
            if let Some(found) = sib.descendants().find_map(ElementRef::wrap) {
                return Some(found);
            }
        }
        cur = cur.parent()?;
        if cur.value().as_element().is_some_and(|e| e.name() == "tr") {
            return None;
        }
    }
}
