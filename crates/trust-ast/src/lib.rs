pub mod span {
    use serde::{Deserialize, Serialize};

    /// Byte range `[start, end)` into the source text.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Span {
        pub start: u32,
        pub end: u32,
    }

    impl Span {
        /// Offsets past `u32::MAX` saturate; sources are expected to stay under 4 GiB.
        pub fn new(start: usize, end: usize) -> Self {
            Self {
                start: u32::try_from(start).unwrap_or(u32::MAX),
                end: u32::try_from(end).unwrap_or(u32::MAX),
            }
        }
    }

}

pub mod tree {
    use serde::{Deserialize, Serialize};

    /// Tag of a `let` declaration node; the declared name sits at `LET_NAME_CHILD`.
    pub const LET_DECLARATION: &str = "let_declaration";
    /// Tag of a use site; the referenced name sits at `IDENT_NAME_CHILD`.
    pub const IDENTIFIER: &str = "identifier";

    pub const LET_NAME_CHILD: usize = 1;
    pub const IDENT_NAME_CHILD: usize = 0;

    /// A syntax tree node produced by an external parser.
    ///
    /// `name` is either a node-kind tag (`"let_declaration"`, `"identifier"`,
    /// ...) or the literal text of a leaf. Children are owned; the tree has
    /// no sharing and no cycles.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Node {
        pub name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub children: Vec<Node>,
    }

    impl Node {
        pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
            Self {
                name: name.into(),
                children,
            }
        }

        pub fn leaf(name: impl Into<String>) -> Self {
            Self::new(name, Vec::new())
        }

        /// `let <name> = <value>;` as `let_declaration(let, <name>, <value>)`.
        pub fn let_decl(name: &str, value: Node) -> Self {
            Self::new(
                LET_DECLARATION,
                vec![Node::leaf("let"), Node::leaf(name), value],
            )
        }

        /// A use of `name`, as `identifier(<name>)`.
        pub fn ident(name: &str) -> Self {
            Self::new(IDENTIFIER, vec![Node::leaf(name)])
        }

        /// A node with no tag and no children, e.g. the placeholder root a
        /// driver hands over before a parser exists.
        pub fn is_empty(&self) -> bool {
            self.name.is_empty() && self.children.is_empty()
        }

        pub fn child(&self, index: usize) -> Option<&Node> {
            self.children.get(index)
        }
    }

}
