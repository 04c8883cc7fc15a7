use crate::normalize::move_title;

pub const DEFAULT_WIKI_BASE: &str = "https://bulbapedia.bulbagarden.net/wiki";

/// Page URL for a move. The `_(move)` suffix disambiguates from items,
/// abilities or Pokémon sharing the same name.
pub fn move_page_url(base: &str, move_name: &str) -> String {
    format!("{}/{}_(move)", base.trim_end_matches('/'), move_title(move_name))
}
