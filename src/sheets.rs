//! Grouping cards onto printable sheets.

use crate::deck::Card;

#[derive(Debug)]
pub struct Sheet<'a> {
    /// 1-based position in the run's sheets
    pub number: usize,
    pub title: String,
    pub cards: &'a [Card],
}

/// Split cards into consecutive groups of `group_size`, keeping their order.
///
/// The final sheet holds whatever is left over. A `group_size` of zero is
/// treated as one.
pub fn assemble<'a>(cards: &'a [Card], title: &str, group_size: usize) -> Vec<Sheet<'a>> {
    cards
        .chunks(group_size.max(1))
        .enumerate()
        .map(|(i, cards)| Sheet {
            number: i + 1,
            title: sheet_title(title, i + 1),
            cards,
        })
        .collect()
}

pub fn sheet_title(title: &str, number: usize) -> String {
    format!("{title} — Sheet {number}")
}
