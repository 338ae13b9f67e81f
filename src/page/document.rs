use thiserror::Error;

/// Element lookup failures surfaced by the typed accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("no element with id \"{0}\" in the document")]
    NotFound(String),
    #[error("element \"{id}\" is a {found}, expected a {expected}")]
    WrongKind {
        id: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// A text-bearing element. Its content is the only mutable page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub id: String,
    text: String,
}

impl Paragraph {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// A clickable element. Activation is delivered by the page, not the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub id: String,
    pub label: String,
}

impl Button {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Paragraph(Paragraph),
    Button(Button),
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Element::Paragraph(p) => &p.id,
            Element::Button(b) => &b.id,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Element::Paragraph(_) => "paragraph",
            Element::Button(_) => "button",
        }
    }
}

/// A flat, ordered collection of identified elements.
///
/// Lookup is by string id; when two elements share an id, the first match
/// wins. Accessors are typed and return an error instead of panicking on a
/// missing or mismatched element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(|e| match e {
            Element::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.elements.iter().filter_map(|e| match e {
            Element::Button(b) => Some(b),
            _ => None,
        })
    }

    fn get(&self, id: &str) -> Result<&Element, DocumentError> {
        self.elements
            .iter()
            .find(|e| e.id() == id)
            .ok_or_else(|| DocumentError::NotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Element, DocumentError> {
        self.elements
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| DocumentError::NotFound(id.to_string()))
    }

    pub fn paragraph(&self, id: &str) -> Result<&Paragraph, DocumentError> {
        match self.get(id)? {
            Element::Paragraph(p) => Ok(p),
            other => Err(DocumentError::WrongKind {
                id: id.to_string(),
                expected: "paragraph",
                found: other.kind_name(),
            }),
        }
    }

    pub fn paragraph_mut(&mut self, id: &str) -> Result<&mut Paragraph, DocumentError> {
        match self.get_mut(id)? {
            Element::Paragraph(p) => Ok(p),
            other => Err(DocumentError::WrongKind {
                id: id.to_string(),
                expected: "paragraph",
                found: other.kind_name(),
            }),
        }
    }

    pub fn button(&self, id: &str) -> Result<&Button, DocumentError> {
        match self.get(id)? {
            Element::Button(b) => Ok(b),
            other => Err(DocumentError::WrongKind {
                id: id.to_string(),
                expected: "button",
                found: other.kind_name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.push(Element::Paragraph(Paragraph::new("p1", "hello")));
        doc.push(Element::Button(Button::new("b1", "press")));
        doc
    }

    #[test]
    fn test_typed_lookup() {
        let doc = sample();
        assert_eq!(doc.paragraph("p1").unwrap().text(), "hello");
        assert_eq!(doc.button("b1").unwrap().label, "press");
    }

    #[test]
    fn test_missing_element() {
        let doc = sample();
        assert_eq!(
            doc.paragraph("nope"),
            Err(DocumentError::NotFound("nope".into()))
        );
        assert_eq!(doc.button("nope"), Err(DocumentError::NotFound("nope".into())));
    }

    #[test]
    fn test_wrong_kind() {
        let doc = sample();
        assert_eq!(
            doc.button("p1"),
            Err(DocumentError::WrongKind {
                id: "p1".into(),
                expected: "button",
                found: "paragraph",
            })
        );
        assert!(doc.paragraph("b1").is_err());
    }

    #[test]
    fn test_set_text() {
        let mut doc = sample();
        doc.paragraph_mut("p1").unwrap().set_text("bye");
        assert_eq!(doc.paragraph("p1").unwrap().text(), "bye");
    }

    #[test]
    fn test_duplicate_id_first_wins() {
        let mut doc = sample();
        doc.push(Element::Paragraph(Paragraph::new("p1", "shadowed")));
        assert_eq!(doc.paragraph("p1").unwrap().text(), "hello");
    }
}
