//! Markup loading: a TOML element list describes the page structure.
//!
//! The document file is an external collaborator; the program only assumes
//! that, once loaded, the elements it wires up actually exist (verified at
//! page initialization, not here).

use crate::page::document::{Button, Document, Element, Paragraph};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use super::{BUTTON_ID, PARAGRAPH_ID};

#[derive(Debug, Deserialize)]
struct MarkupFile {
    #[serde(default)]
    element: Vec<ElementDef>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ElementDef {
    Paragraph {
        id: String,
        #[serde(default)]
        text: String,
    },
    Button {
        id: String,
        #[serde(default = "default_button_label")]
        label: String,
    },
}

fn default_button_label() -> String {
    "button".to_string()
}

pub fn parse_document(contents: &str) -> Result<Document> {
    let markup: MarkupFile =
        toml::from_str(contents).with_context(|| "Failed to parse markup file")?;
    let mut doc = Document::new();
    for def in markup.element {
        match def {
            ElementDef::Paragraph { id, text } => {
                doc.push(Element::Paragraph(Paragraph::new(id, text)));
            }
            ElementDef::Button { id, label } => {
                doc.push(Element::Button(Button::new(id, label)));
            }
        }
    }
    Ok(doc)
}

pub fn load_document(path: &Path) -> Result<Document> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read markup from {}", path.display()))?;
    parse_document(&contents)
}

/// The page shipped with the app: one paragraph, one button.
pub fn default_document() -> Document {
    let mut doc = Document::new();
    doc.push(Element::Paragraph(Paragraph::new(
        PARAGRAPH_ID,
        "original content",
    )));
    doc.push(Element::Button(Button::new(BUTTON_ID, "change content")));
    doc
}
