//! In-memory syntax tree for exercising the pipeline without a parser

use crate::language::{NodeKind, SourceLocation, SyntaxNode};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FakeNode {
    kind: NodeKind,
    definition: bool,
    parent: Option<String>,
    spelling: String,
    is_const: bool,
    args: Vec<String>,
    file: Option<PathBuf>,
    line: usize,
    children: Vec<FakeNode>,
}

impl FakeNode {
    fn new(kind: NodeKind, spelling: &str, line: usize) -> Self {
        FakeNode {
            kind,
            definition: kind.is_function(),
            parent: None,
            spelling: spelling.to_string(),
            is_const: false,
            args: Vec::new(),
            file: None,
            line,
            children: Vec::new(),
        }
    }

    /// Translation unit for `file`; descendants without a file inherit it
    pub fn root(file: &str, children: Vec<FakeNode>) -> Self {
        let mut root = FakeNode::new(NodeKind::Other, "", 1).with_children(children);
        root.assign_file(Path::new(file));
        root
    }

    /// Free function definition
    pub fn function(name: &str, line: usize) -> Self {
        FakeNode::new(NodeKind::FreeFunction, name, line)
    }

    /// Method definition inside `scope`
    pub fn method(scope: &str, name: &str, line: usize) -> Self {
        FakeNode::new(NodeKind::Method, name, line).with_parent(scope)
    }

    /// Non-function node (class, statement, ...)
    pub fn other(name: &str, line: usize, children: Vec<FakeNode>) -> Self {
        FakeNode::new(NodeKind::Other, name, line).with_children(children)
    }

    pub fn of_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn prototype(mut self) -> Self {
        self.definition = false;
        self
    }

    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn with_parent(mut self, scope: &str) -> Self {
        self.parent = Some(scope.to_string());
        self
    }

    pub fn with_args(mut self, args: &[&str]) -> Self {
        self.args = args.iter().map(|arg| arg.to_string()).collect();
        self
    }

    pub fn with_children(mut self, children: Vec<FakeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn in_file(mut self, file: &str) -> Self {
        self.file = Some(PathBuf::from(file));
        self
    }

    fn assign_file(&mut self, file: &Path) {
        if self.file.is_none() {
            self.file = Some(file.to_path_buf());
        }
        for child in &mut self.children {
            child.assign_file(file);
        }
    }
}

impl SyntaxNode for FakeNode {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn is_definition(&self) -> bool {
        self.definition
    }

    fn semantic_parent_name(&self) -> Option<String> {
        self.parent.clone()
    }

    fn spelling(&self) -> String {
        self.spelling.clone()
    }

    fn is_const_qualified(&self) -> bool {
        self.is_const
    }

    fn arguments(&self) -> Vec<String> {
        self.args.clone()
    }

    fn location(&self) -> SourceLocation {
        SourceLocation::new(self.file.clone().unwrap_or_default(), self.line)
    }

    fn children(&self) -> Vec<Self> {
        self.children.clone()
    }
}
