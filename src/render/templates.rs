use anyhow::{Context, Result};
use std::path::Path;

pub const CARD_TEMPLATE: &str = "card.html";
pub const SHEET_TEMPLATE: &str = "sheet.html";
pub const SHEET_CARD_TEMPLATE: &str = "sheet_card.html";

/// The document templates for a run.
#[derive(Debug, Clone)]
pub struct Templates {
    /// A standalone document for one card
    pub card: String,
    /// A printable page holding a group of cards
    pub sheet: String,
    /// One card's markup inside a sheet
    pub sheet_card: String,
}

impl Default for Templates {
    fn default() -> Self {
        Templates {
            card: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/card.html"))
                .to_string(),
            sheet: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/sheet.html"))
                .to_string(),
            sheet_card: include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/templates/sheet_card.html"
            ))
            .to_string(),
        }
    }
}

impl Templates {
    /// Load templates, letting any file present in `dir` replace the built-in one.
    pub fn load(dir: Option<&Path>) -> Result<Templates> {
        let mut templates = Templates::default();
        let Some(dir) = dir else {
            return Ok(templates);
        };

        for (name, slot) in [
            (CARD_TEMPLATE, &mut templates.card),
            (SHEET_TEMPLATE, &mut templates.sheet),
            (SHEET_CARD_TEMPLATE, &mut templates.sheet_card),
        ] {
            let path = dir.join(name);
            if path.is_file() {
                *slot = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read template {}", path.display()))?;
                log::info!("Using template {}", path.display());
            } else {
                log::debug!("No {} in {}, using the built-in one", name, dir.display());
            }
        }

        Ok(templates)
    }
}

/// Expand `{name}` placeholders in a single pass.
///
/// Braces that don't wrap a known name (CSS rules, for one) are copied as-is,
/// and substituted values are never expanded again.
pub fn expand(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn can_expand_placeholders() {
        let out = expand(
            "<h1>{title}</h1><p>#{card_number}</p>",
            &[("title", "BINGO"), ("card_number", "3")],
        );
        assert_eq!(out, "<h1>BINGO</h1><p>#3</p>");
    }

    #[test]
    fn leaves_css_and_unknown_names_alone() {
        let template = ".card { background: {background_color}; } {unknown} {";
        let out = expand(template, &[("background_color", "#FFEAB3")]);
        assert_eq!(out, ".card { background: #FFEAB3; } {unknown} {");
    }

    #[test]
    fn values_are_not_expanded_twice() {
        let out = expand("{a}{b}", &[("a", "{b}"), ("b", "x")]);
        assert_eq!(out, "{b}x");
    }

    #[test]
    fn repeated_placeholders_all_expand() {
        let out = expand("{t} and {t}", &[("t", "x")]);
        assert_eq!(out, "x and x");
    }

    #[test]
    fn directory_overrides_only_what_it_has() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        std::fs::write(dir.path().join(SHEET_TEMPLATE), "<p>{sheet_title}</p>")
            .expect("can write template");

        let templates = Templates::load(Some(dir.path())).expect("can load templates");
        let defaults = Templates::default();
        assert_eq!(templates.sheet, "<p>{sheet_title}</p>");
        assert_eq!(templates.card, defaults.card);
        assert_eq!(templates.sheet_card, defaults.sheet_card);
    }
}
