//! Qualified names for ODF elements and attributes.
//!
//! Names are resolved against the fixed set of OpenDocument namespaces once,
//! when a node is created, so classification never compares namespace URIs.

use std::fmt;

pub const TEXT_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";
pub const DRAW_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:drawing:1.0";
pub const OFFICE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";
pub const STYLE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:style:1.0";
pub const FO_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0";
pub const TABLE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:table:1.0";
pub const SVG_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Namespace of an element or attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Namespace {
    /// No namespace (unprefixed attributes, elements outside any default namespace).
    #[default]
    None,
    Text,
    Draw,
    Office,
    Style,
    Fo,
    Table,
    Svg,
    XLink,
    /// Any namespace outside the ODF set.
    Other(String),
}

impl Namespace {
    /// Resolve a namespace URI.
    pub fn from_uri(uri: &str) -> Self {
        match uri {
            "" => Namespace::None,
            TEXT_NS => Namespace::Text,
            DRAW_NS => Namespace::Draw,
            OFFICE_NS => Namespace::Office,
            STYLE_NS => Namespace::Style,
            FO_NS => Namespace::Fo,
            TABLE_NS => Namespace::Table,
            SVG_NS => Namespace::Svg,
            XLINK_NS => Namespace::XLink,
            other => Namespace::Other(other.to_string()),
        }
    }

    /// The namespace URI.
    pub fn uri(&self) -> &str {
        match self {
            Namespace::None => "",
            Namespace::Text => TEXT_NS,
            Namespace::Draw => DRAW_NS,
            Namespace::Office => OFFICE_NS,
            Namespace::Style => STYLE_NS,
            Namespace::Fo => FO_NS,
            Namespace::Table => TABLE_NS,
            Namespace::Svg => SVG_NS,
            Namespace::XLink => XLINK_NS,
            Namespace::Other(uri) => uri,
        }
    }

    /// Conventional prefix, used when printing names.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Namespace::Text => Some("text"),
            Namespace::Draw => Some("draw"),
            Namespace::Office => Some("office"),
            Namespace::Style => Some("style"),
            Namespace::Fo => Some("fo"),
            Namespace::Table => Some("table"),
            Namespace::Svg => Some("svg"),
            Namespace::XLink => Some("xlink"),
            Namespace::None | Namespace::Other(_) => None,
        }
    }
}

/// Namespace-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub ns: Namespace,
    pub local: String,
}

impl QName {
    pub fn new(ns: Namespace, local: impl Into<String>) -> Self {
        Self {
            ns,
            local: local.into(),
        }
    }

    /// Shorthand for a name in the `text:` namespace.
    pub fn text(local: impl Into<String>) -> Self {
        Self::new(Namespace::Text, local)
    }

    /// Shorthand for a name in the `draw:` namespace.
    pub fn draw(local: impl Into<String>) -> Self {
        Self::new(Namespace::Draw, local)
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.ns, self.ns.prefix()) {
            (_, Some(prefix)) => write!(f, "{prefix}:{}", self.local),
            (Namespace::Other(uri), None) => write!(f, "{{{uri}}}{}", self.local),
            _ => f.write_str(&self.local),
        }
    }
}

/// Element identity relevant to text layout.
///
/// Everything that does not influence paragraph traversal or character
/// scanning is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementKind {
    /// `text:p`
    Paragraph,
    /// `text:h`
    Heading,
    /// `text:span`
    Span,
    /// `text:list-item`
    ListItem,
    /// `text:tab`
    Tab,
    /// `text:line-break`
    LineBreak,
    /// `text:s`
    Space,
    /// `draw:frame`
    Frame,
    #[default]
    Other,
}

impl ElementKind {
    pub fn classify(name: &QName) -> Self {
        match (&name.ns, name.local.as_str()) {
            (Namespace::Text, "p") => ElementKind::Paragraph,
            (Namespace::Text, "h") => ElementKind::Heading,
            (Namespace::Text, "span") => ElementKind::Span,
            (Namespace::Text, "list-item") => ElementKind::ListItem,
            (Namespace::Text, "tab") => ElementKind::Tab,
            (Namespace::Text, "line-break") => ElementKind::LineBreak,
            (Namespace::Text, "s") => ElementKind::Space,
            (Namespace::Draw, "frame") => ElementKind::Frame,
            _ => ElementKind::Other,
        }
    }
}

/// Attribute key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrKey {
    /// `text:anchor-type`
    AnchorType,
    Other(QName),
}

impl AttrKey {
    pub fn classify(name: QName) -> Self {
        match (&name.ns, name.local.as_str()) {
            (Namespace::Text, "anchor-type") => AttrKey::AnchorType,
            _ => AttrKey::Other(name),
        }
    }
}

/// Element attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub key: AttrKey,
    pub value: String,
}

impl Attribute {
    pub fn new(name: QName, value: impl Into<String>) -> Self {
        Self {
            key: AttrKey::classify(name),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_round_trip() {
        for ns in [
            Namespace::Text,
            Namespace::Draw,
            Namespace::Office,
            Namespace::Fo,
            Namespace::XLink,
        ] {
            assert_eq!(Namespace::from_uri(ns.uri()), ns);
        }
        assert_eq!(
            Namespace::from_uri("urn:example"),
            Namespace::Other("urn:example".to_string())
        );
    }

    #[test]
    fn test_element_kind_requires_namespace() {
        assert_eq!(
            ElementKind::classify(&QName::text("p")),
            ElementKind::Paragraph
        );
        assert_eq!(
            ElementKind::classify(&QName::new(Namespace::None, "p")),
            ElementKind::Other
        );
        assert_eq!(
            ElementKind::classify(&QName::text("frame")),
            ElementKind::Other
        );
        assert_eq!(
            ElementKind::classify(&QName::draw("frame")),
            ElementKind::Frame
        );
    }

    #[test]
    fn test_anchor_type_key() {
        assert_eq!(
            AttrKey::classify(QName::text("anchor-type")),
            AttrKey::AnchorType
        );
        assert!(matches!(
            AttrKey::classify(QName::draw("anchor-type")),
            AttrKey::Other(_)
        ));
    }

    #[test]
    fn test_qname_display() {
        assert_eq!(QName::text("line-break").to_string(), "text:line-break");
        assert_eq!(
            QName::new(Namespace::Other("urn:x".into()), "y").to_string(),
            "{urn:x}y"
        );
        assert_eq!(QName::new(Namespace::None, "id").to_string(), "id");
    }
}
