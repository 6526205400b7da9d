use super::card::card_vars;
use super::templates::expand;
use super::Templates;
use crate::sheets::Sheet;
use html_escape::encode_text;

/// Render a sheet, expanding the sheet card fragment once per card.
pub fn render(sheet: &Sheet<'_>, templates: &Templates) -> String {
    let cards = sheet
        .cards
        .iter()
        .map(|card| {
            let vars = card_vars(card);
            let vars: Vec<(&str, &str)> = vars.iter().map(|(k, v)| (*k, v.as_str())).collect();
            expand(&templates.sheet_card, &vars)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let sheet_title = encode_text(&sheet.title);
    expand(
        &templates.sheet,
        &[("sheet_title", &*sheet_title), ("cards", cards.as_str())],
    )
}
