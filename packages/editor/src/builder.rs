use crate::Document;
use folio_common::Settings;
use serde::{Deserialize, Serialize};

const DEFAULT_MARGIN: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: DEFAULT_MARGIN,
            bottom: DEFAULT_MARGIN,
            left: DEFAULT_MARGIN,
            right: DEFAULT_MARGIN,
        }
    }
}

/// Default typeface for a document's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub name: String,
    pub size: u32,
}

impl Font {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            name: settings.font_name.clone(),
            size: settings.font_size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Page-level properties of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSetup {
    pub page_size: String,

    #[serde(default)]
    pub margins: Margins,

    #[serde(default)]
    pub font: Font,

    #[serde(default)]
    pub header: String,

    #[serde(default)]
    pub footer: String,
}

impl PageSetup {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            page_size: settings.page_size.clone(),
            margins: Margins::default(),
            font: Font::from_settings(settings),
            header: String::new(),
            footer: String::new(),
        }
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Step-by-step construction of a [`Document`] with custom page properties
///
/// ```rust,ignore
/// let doc = DocumentBuilder::new(&settings)
///     .page_size("A4")
///     .margins(20, 20, 20, 20)
///     .header("My Document")
///     .footer("Page 1")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    page: PageSetup,
}

impl DocumentBuilder {
    pub fn new(settings: &Settings) -> Self {
        Self {
            page: PageSetup::from_settings(settings),
        }
    }

    pub fn page_size(mut self, size: impl Into<String>) -> Self {
        self.page.page_size = size.into();
        self
    }

    pub fn margins(mut self, top: u32, bottom: u32, left: u32, right: u32) -> Self {
        self.page.margins = Margins {
            top,
            bottom,
            left,
            right,
        };
        self
    }

    pub fn font(mut self, name: impl Into<String>, size: u32) -> Self {
        self.page.font = Font {
            name: name.into(),
            size,
        };
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.page.header = header.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.page.footer = footer.into();
        self
    }

    pub fn build(self) -> Document {
        Document::with_page(self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LifecycleState;

    #[test]
    fn test_builder_defaults_follow_settings() {
        let settings = Settings {
            page_size: "Letter".to_string(),
            font_name: "Georgia".to_string(),
            font_size: 11,
            ..Settings::default()
        };

        let doc = DocumentBuilder::new(&settings).build();
        assert_eq!(doc.page().page_size, "Letter");
        assert_eq!(
            doc.page().font,
            Font {
                name: "Georgia".to_string(),
                size: 11
            }
        );
        assert_eq!(doc.page().margins, Margins::default());
        assert!(doc.page().header.is_empty());
        assert_eq!(doc.state(), LifecycleState::Draft);
        assert_eq!(doc.element_count(), 0);
    }

    #[test]
    fn test_builder_overrides() {
        let doc = DocumentBuilder::new(&Settings::default())
            .page_size("A5")
            .margins(10, 12, 14, 16)
            .font("Courier", 9)
            .header("My Document")
            .footer("Page 1")
            .build();

        let page = doc.page();
        assert_eq!(page.page_size, "A5");
        assert_eq!(
            page.margins,
            Margins {
                top: 10,
                bottom: 12,
                left: 14,
                right: 16
            }
        );
        assert_eq!(page.font.name, "Courier");
        assert_eq!(page.font.size, 9);
        assert_eq!(page.header, "My Document");
        assert_eq!(page.footer, "Page 1");
    }
}
