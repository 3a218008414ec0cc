/// A child of an [`Element`]: a nested element or a run of character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An attribute, keyed by its local name (the prefix is dropped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An element with its resolved namespace URI.
///
/// `namespace` is the empty string for elements outside any namespace, which
/// is how plain RSS 2.0 elements appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) namespace: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) children: Vec<Node>,
    pub(crate) trim_text: bool,
}

impl Element {
    pub(crate) fn new(
        name: String,
        namespace: String,
        attributes: Vec<Attribute>,
        trim_text: bool,
    ) -> Self {
        Self {
            name,
            namespace,
            attributes,
            children: Vec::new(),
            trim_text,
        }
    }

    pub fn local_name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Looks up an attribute by local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct child elements in document order, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First direct child element with the given name outside any namespace.
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.child_elements()
            .find(|child| child.namespace.is_empty() && child.name == name)
    }

    /// Concatenated character data of this element and all its descendants.
    ///
    /// When the document was parsed with `trim_text`, only the ends of the
    /// concatenated result are trimmed; whitespace between inline children
    /// is kept.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut pending: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = pending.pop() {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => pending.extend(element.children.iter().rev()),
            }
        }
        if self.trim_text {
            out.truncate(out.trim_end().len());
            let leading = out.len() - out.trim_start().len();
            out.drain(..leading);
        }
        out
    }

    pub(crate) fn push_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        // CDATA and escaped text arrive as separate events; keep them as one run
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(&text);
        } else {
            self.children.push(Node::Text(text));
        }
    }

    pub(crate) fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }
}

/// A parsed XML document.
///
/// Owns the whole tree; dropping it releases every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) root: Element,
}

impl Document {
    pub fn root(&self) -> &Element {
        &self.root
    }
}
