//! The page core: document model, diagnostic console, and click dispatch.
//!
//! `Page::initialize` is the one-time entry point the host calls after the
//! document is constructed. It resolves the two wired elements up front and
//! registers the click observer on the button, so a handler is never bound
//! to an element that does not exist.

pub mod console;
pub mod document;
pub mod markup;

pub use console::Console;
pub use document::{Document, DocumentError, Element};

use std::collections::HashMap;

pub const PARAGRAPH_ID: &str = "paragraph0";
pub const BUTTON_ID: &str = "button0";
pub const CHANGED_CONTENT: &str = "changed content";
pub const CLICK_DIAGNOSTIC: &str = "did handle click on button0";

/// A click observer. Handlers run to completion, one at a time, in
/// registration order; there is no overlapping delivery.
pub type ClickHandler =
    Box<dyn FnMut(&mut Document, &mut Console) -> Result<(), DocumentError> + Send>;

pub struct Page {
    document: Document,
    console: Console,
    handlers: HashMap<String, Vec<ClickHandler>>,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("document", &self.document)
            .field("console", &self.console)
            .field("handlers", &self.handlers.keys())
            .finish()
    }
}

impl Page {
    /// Wires up the shipped page: looks up `paragraph0` and `button0` and
    /// registers the click handler that rewrites the paragraph and emits
    /// the diagnostic line.
    ///
    /// Fails fast when either element is missing or of the wrong kind;
    /// nothing is registered in that case.
    pub fn initialize(document: Document, console: Console) -> Result<Self, DocumentError> {
        document.paragraph(PARAGRAPH_ID)?;
        let mut page = Self {
            document,
            console,
            handlers: HashMap::new(),
        };
        page.on_click(
            BUTTON_ID,
            Box::new(|doc, console| {
                doc.paragraph_mut(PARAGRAPH_ID)?.set_text(CHANGED_CONTENT);
                console.log(CLICK_DIAGNOSTIC);
                Ok(())
            }),
        )?;
        Ok(page)
    }

    /// Register a click observer on a button. The id must resolve to an
    /// existing button element.
    pub fn on_click(&mut self, id: &str, handler: ClickHandler) -> Result<(), DocumentError> {
        self.document.button(id)?;
        self.handlers.entry(id.to_string()).or_default().push(handler);
        Ok(())
    }

    /// Deliver one activation of the given element. Every handler registered
    /// for it runs once; elements without handlers are a no-op.
    pub fn dispatch_click(&mut self, id: &str) -> Result<(), DocumentError> {
        let Some(handlers) = self.handlers.get_mut(id) else {
            return Ok(());
        };
        for handler in handlers.iter_mut() {
            handler(&mut self.document, &mut self.console)?;
        }
        Ok(())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn console(&self) -> &Console {
        &self.console
    }
}
