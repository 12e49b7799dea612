//! Generic structure parsing fallback.
//!
//! A fast-strategy partitioner over the text layer: blocks are separated by
//! blank lines and classified into coarse categories by shape alone. This
//! mirrors the "fast" mode of generic document partitioners, which likewise
//! work from the text layer without layout models.

use crate::model::{BlockCategory, PageText, StructuredBlock};

const MAX_TITLE_LEN: usize = 80;

/// Partition page texts into categorized blocks.
pub fn partition_pages(pages: &[PageText]) -> Vec<StructuredBlock> {
    let mut blocks = Vec::new();

    for page in pages {
        for raw in page.text.split("\n\n") {
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }
            blocks.push(StructuredBlock {
                page: Some(page.page),
                category: categorize(text),
                text: text.to_string(),
            });
        }
    }

    blocks
}

fn categorize(block: &str) -> BlockCategory {
    let mut lines = block.lines();
    let first = lines.next().unwrap_or_default().trim();
    let single_line = lines.next().is_none();

    if is_list_item(first) {
        return BlockCategory::ListItem;
    }

    if single_line && first.len() <= MAX_TITLE_LEN && !first.ends_with(['.', ':', ';', ',']) {
        let words = first.split_whitespace().count();
        // Headings are short and either capitalized throughout or shouty.
        let shouty = first
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase());
        let capitalized = first
            .split_whitespace()
            .all(|w| w.chars().next().map(|c| !c.is_lowercase()).unwrap_or(true));
        if words <= 10 && (shouty || capitalized) {
            return BlockCategory::Title;
        }
    }

    BlockCategory::NarrativeText
}

fn is_list_item(line: &str) -> bool {
    if let Some(rest) = line.strip_prefix(['-', '*', '\u{2022}']) {
        return rest.starts_with(' ');
    }

    // "1. item" / "12) item"
    let digits: String = line.chars().take_while(|c| c.is_ascii_digit()).collect();
    if !digits.is_empty() {
        let rest = &line[digits.len()..];
        return rest.starts_with(". ") || rest.starts_with(") ");
    }

    false
}
