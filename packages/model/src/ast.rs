use crate::error::{TreeError, TreeResult};
use crate::path::NodePath;
use serde::{Deserialize, Serialize};

/// Bold/italic emphasis carried by a text block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decoration {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl Decoration {
    pub const PLAIN: Decoration = Decoration {
        bold: false,
        italic: false,
    };

    pub fn bold() -> Self {
        Self {
            bold: true,
            italic: false,
        }
    }

    pub fn italic() -> Self {
        Self {
            bold: false,
            italic: true,
        }
    }

    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic
    }
}

/// Document tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    /// Run of text with optional emphasis
    TextBlock {
        content: String,
        #[serde(default, skip_serializing_if = "Decoration::is_plain")]
        decoration: Decoration,
    },

    /// Reference to an image by path
    Image { path: String },

    /// Table placeholder with fixed dimensions
    Table { rows: usize, cols: usize },

    /// Named section owning its children
    Container {
        name: String,
        #[serde(default)]
        children: Vec<Element>,
    },
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Element::TextBlock {
            content: content.into(),
            decoration: Decoration::PLAIN,
        }
    }

    pub fn styled_text(content: impl Into<String>, decoration: Decoration) -> Self {
        Element::TextBlock {
            content: content.into(),
            decoration,
        }
    }

    pub fn image(path: impl Into<String>) -> Self {
        Element::Image { path: path.into() }
    }

    pub fn table(rows: usize, cols: usize) -> Self {
        Element::Table { rows, cols }
    }

    pub fn container(name: impl Into<String>) -> Self {
        Element::Container {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn container_with(name: impl Into<String>, children: Vec<Element>) -> Self {
        Element::Container {
            name: name.into(),
            children,
        }
    }

    /// Replace the emphasis of a text block. Other variants are returned as-is.
    pub fn with_decoration(self, decoration: Decoration) -> Self {
        match self {
            Element::TextBlock { content, .. } => Element::TextBlock {
                content,
                decoration,
            },
            other => other,
        }
    }

    /// Stable discriminator of the variant
    pub fn type_tag(&self) -> &'static str {
        match self {
            Element::TextBlock { .. } => "TextBlock",
            Element::Image { .. } => "Image",
            Element::Table { .. } => "Table",
            Element::Container { .. } => "Container",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Element::Container { .. })
    }

    /// Children of a container; leaves have none
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Container { children, .. } => children,
            _ => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Element>> {
        match self {
            Element::Container { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Look up the node at `path`, relative to this element
    pub fn get(&self, path: &NodePath) -> Option<&Element> {
        let mut current = self;
        for &index in path.indices() {
            current = current.children().get(index)?;
        }
        Some(current)
    }

    fn get_mut(&mut self, path: &NodePath) -> Option<&mut Element> {
        let mut current = self;
        for &index in path.indices() {
            current = current.children_mut()?.get_mut(index)?;
        }
        Some(current)
    }

    /// Insert `element` as the `index`-th child of the container at `parent`.
    ///
    /// `index` equal to the child count appends. Returns the path of the
    /// inserted node.
    pub fn insert(
        &mut self,
        parent: &NodePath,
        index: usize,
        element: Element,
    ) -> TreeResult<NodePath> {
        let target = self
            .get_mut(parent)
            .ok_or_else(|| TreeError::NotFound(parent.clone()))?;
        let children = target
            .children_mut()
            .ok_or_else(|| TreeError::NotAContainer(parent.clone()))?;

        if index > children.len() {
            return Err(TreeError::IndexOutOfBounds {
                parent: parent.clone(),
                index,
                len: children.len(),
            });
        }

        children.insert(index, element);
        Ok(parent.child(index))
    }

    /// Append `element` to the container at `parent`
    pub fn push(&mut self, parent: &NodePath, element: Element) -> TreeResult<NodePath> {
        let len = self
            .get(parent)
            .ok_or_else(|| TreeError::NotFound(parent.clone()))?
            .children()
            .len();
        self.insert(parent, len, element)
    }

    /// Detach and return the subtree at `path`
    pub fn remove(&mut self, path: &NodePath) -> TreeResult<Element> {
        let (parent, index) = path.split_last().ok_or(TreeError::RootRemoval)?;

        let children = self
            .get_mut(&parent)
            .and_then(Element::children_mut)
            .ok_or_else(|| TreeError::NotFound(path.clone()))?;

        if index >= children.len() {
            return Err(TreeError::NotFound(path.clone()));
        }

        Ok(children.remove(index))
    }
}
