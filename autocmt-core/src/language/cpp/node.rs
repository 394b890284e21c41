//! [`SyntaxNode`] adapter over tree-sitter-cpp nodes
//!
//! tree-sitter gives a purely syntactic tree, so the semantic queries are
//! answered from the shape of the declarator and the lexical nesting:
//! - A node is function-like if it is a `function_definition`, `declaration`
//!   or `field_declaration` whose declarator bottoms out in a function
//!   declarator with a real name (function pointer variables do not count)
//! - Only `function_definition` nodes are definitions
//! - The semantic parent of `A::B::f` is `B`; an unqualified name takes the
//!   nearest enclosing class or named namespace, skipping the class that
//!   befriends an inline `friend` definition
//! - Function templates are not annotated; members of class templates are
//!   annotated like any other method

use crate::language::tree_sitter_utils::{
    declarator_identifier, find_function_declarator, inner_declarator, node_text, qualified_leaf,
    scope_segment, strip_template_args, template_scope_count,
};
use crate::language::{NodeKind, SourceLocation, SyntaxNode};
use std::path::Path;
use tree_sitter::Node;

/// Node kinds that may carry a function declarator
const FUNCTION_CARRIERS: &[&str] = &["function_definition", "declaration", "field_declaration"];

/// Node kinds that open a class scope
const CLASS_SCOPES: &[&str] = &["class_specifier", "struct_specifier", "union_specifier"];

/// Declarator kinds that name a function (as opposed to a pointer variable)
const FUNCTION_NAMES: &[&str] = &[
    "identifier",
    "field_identifier",
    "destructor_name",
    "operator_name",
    "qualified_identifier",
    "template_function",
];

const PARAMETER_KINDS: &[&str] = &[
    "parameter_declaration",
    "optional_parameter_declaration",
    "variadic_parameter_declaration",
];

/// A tree-sitter node together with the source text and file it came from
#[derive(Debug, Clone, Copy)]
pub struct CppNode<'a> {
    node: Node<'a>,
    source: &'a str,
    path: &'a Path,
}

/// Pieces of a function-like node
struct FunctionShape<'a> {
    /// Unqualified name node
    leaf: Node<'a>,
    /// Whether the name was written with a `::` qualifier
    qualified: bool,
    /// Last scope of a qualified name
    qualifier: Option<Node<'a>>,
    /// Declarator holding `parameters` and trailing qualifiers
    signature: Option<Node<'a>>,
    /// Number of `Name<...>::` scopes in the written name
    template_scopes: usize,
}

/// Lexically enclosing scope of a node
enum Enclosing<'a> {
    Class(Node<'a>),
    Namespace(Node<'a>),
    File,
}

impl<'a> CppNode<'a> {
    pub(crate) fn new(node: Node<'a>, source: &'a str, path: &'a Path) -> Self {
        CppNode { node, source, path }
    }

    fn text(&self, node: Node<'a>) -> &'a str {
        node_text(node, self.source)
    }

    fn shape(&self) -> Option<FunctionShape<'a>> {
        if !FUNCTION_CARRIERS.contains(&self.node.kind()) {
            return None;
        }
        let declarator = self.node.child_by_field_name("declarator")?;
        let mut func = find_function_declarator(declarator)?;

        // `int (*handler())(int)`: the outer declarator belongs to the
        // returned pointer type, the function itself is further in
        let (name, signature) = loop {
            if func.kind() != "function_declarator" {
                // Conversion operator, bare or qualified
                let (cast, _) = qualified_leaf(func);
                break (func, cast_signature(cast));
            }
            let name = func.child_by_field_name("declarator")?;
            if FUNCTION_NAMES.contains(&name.kind()) {
                break (name, Some(func));
            }
            func = find_function_declarator(inner_declarator(name)?)?;
        };

        let (leaf, qualifier) = qualified_leaf(name);
        Some(FunctionShape {
            leaf,
            qualified: name.kind() == "qualified_identifier",
            qualifier,
            signature,
            template_scopes: template_scope_count(name),
        })
    }

    /// True if a `template <...>` header declares the function's own parameters
    ///
    /// An out-of-line member of a class template carries one header per
    /// `Name<...>::` scope; any header beyond those belongs to the function.
    /// `template <>` introduces no parameters and is not counted.
    fn is_function_template(&self, shape: &FunctionShape<'a>) -> bool {
        let mut headers = 0;
        let mut current = self.node.parent();
        while let Some(header) = current.filter(|node| node.kind() == "template_declaration") {
            let declares = header
                .child_by_field_name("parameters")
                .is_some_and(|params| params.named_child_count() > 0);
            if declares {
                headers += 1;
            }
            current = header.parent();
        }
        headers > shape.template_scopes
    }

    fn enclosing(&self) -> Enclosing<'a> {
        let mut befriended = false;
        let mut current = self.node.parent();
        while let Some(parent) = current {
            match parent.kind() {
                "friend_declaration" => befriended = true,
                "namespace_definition" => return Enclosing::Namespace(parent),
                kind if CLASS_SCOPES.contains(&kind) && !befriended => {
                    return Enclosing::Class(parent)
                }
                _ => {}
            }
            current = parent.parent();
        }
        Enclosing::File
    }

    fn scope_name(&self, scope: Node<'a>) -> Option<String> {
        scope
            .child_by_field_name("name")
            .and_then(|name| scope_segment(self.text(name)))
    }

    fn enclosing_class_name(&self) -> Option<String> {
        match self.enclosing() {
            Enclosing::Class(class) => self.scope_name(class),
            _ => None,
        }
    }

    fn leaf_spelling(&self, leaf: Node<'a>) -> String {
        match leaf.kind() {
            "template_function" => leaf
                .child_by_field_name("name")
                .map(|name| self.text(name).to_string())
                .unwrap_or_else(|| strip_template_args(self.text(leaf))),
            "destructor_name" => self.text(leaf).split_whitespace().collect(),
            "operator_name" => operator_spelling(self.text(leaf)),
            "operator_cast" => {
                let type_end = leaf
                    .child_by_field_name("declarator")
                    .map_or(leaf.end_byte(), |d| d.start_byte());
                let written = self.source.get(leaf.start_byte()..type_end).unwrap_or("");
                conversion_spelling(written)
            }
            _ => self.text(leaf).to_string(),
        }
    }

    fn parameter_name(&self, param: Node<'a>) -> String {
        param
            .child_by_field_name("declarator")
            .and_then(declarator_identifier)
            .map(|ident| self.text(ident).to_string())
            .unwrap_or_default()
    }
}

impl<'a> SyntaxNode for CppNode<'a> {
    fn kind(&self) -> NodeKind {
        let Some(shape) = self.shape() else {
            return NodeKind::Other;
        };
        if self.is_function_template(&shape) {
            return NodeKind::Other;
        }
        if shape.leaf.kind() == "destructor_name" {
            return NodeKind::Destructor;
        }

        // A namespace-qualified free function reads the same as an
        // out-of-line method; both are annotated, so it is tagged a method.
        let own = strip_template_args(&self.leaf_spelling(shape.leaf));
        if let Some(qualifier) = shape.qualifier {
            return if scope_segment(self.text(qualifier)).as_deref() == Some(own.as_str()) {
                NodeKind::Constructor
            } else {
                NodeKind::Method
            };
        }
        if shape.qualified {
            return NodeKind::FreeFunction;
        }

        match self.enclosing_class_name() {
            Some(class) if class == own => NodeKind::Constructor,
            Some(_) => NodeKind::Method,
            None if matches!(self.enclosing(), Enclosing::Class(_)) => NodeKind::Method,
            None => NodeKind::FreeFunction,
        }
    }

    fn is_definition(&self) -> bool {
        self.node.kind() == "function_definition"
    }

    fn semantic_parent_name(&self) -> Option<String> {
        if let Some(shape) = self.shape() {
            if shape.qualified {
                return shape
                    .qualifier
                    .and_then(|qualifier| scope_segment(self.text(qualifier)));
            }
        }
        match self.enclosing() {
            Enclosing::Class(scope) | Enclosing::Namespace(scope) => self.scope_name(scope),
            Enclosing::File => None,
        }
    }

    fn spelling(&self) -> String {
        match self.shape() {
            Some(shape) => self.leaf_spelling(shape.leaf),
            None => self
                .node
                .child_by_field_name("name")
                .map(|name| self.text(name).to_string())
                .unwrap_or_default(),
        }
    }

    fn is_const_qualified(&self) -> bool {
        let Some(signature) = self.shape().and_then(|shape| shape.signature) else {
            return false;
        };
        let mut cursor = signature.walk();
        let result = signature
            .children(&mut cursor)
            .any(|child| child.kind() == "type_qualifier" && self.text(child) == "const");
        result
    }

    fn arguments(&self) -> Vec<String> {
        let Some(params) = self
            .shape()
            .and_then(|shape| shape.signature)
            .and_then(|signature| signature.child_by_field_name("parameters"))
        else {
            return Vec::new();
        };

        let mut cursor = params.walk();
        let declared: Vec<Node<'a>> = params
            .named_children(&mut cursor)
            .filter(|child| PARAMETER_KINDS.contains(&child.kind()))
            .collect();

        // `f(void)` declares no parameters
        if let [only] = declared.as_slice() {
            let unnamed = only.child_by_field_name("declarator").is_none();
            let void = only
                .child_by_field_name("type")
                .is_some_and(|ty| self.text(ty) == "void");
            if unnamed && void {
                return Vec::new();
            }
        }

        declared
            .into_iter()
            .map(|param| self.parameter_name(param))
            .collect()
    }

    fn location(&self) -> SourceLocation {
        let anchor = self.shape().map_or(self.node, |shape| shape.leaf);
        SourceLocation::new(self.path, anchor.start_position().row + 1)
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        let children = self
            .node
            .named_children(&mut cursor)
            .map(|child| CppNode::new(child, self.source, self.path))
            .collect();
        children
    }
}

/// The declarator carrying the parameter list of a conversion operator
fn cast_signature(cast: Node<'_>) -> Option<Node<'_>> {
    let mut current = cast.child_by_field_name("declarator")?;
    while current.kind() != "abstract_function_declarator" {
        current = current.child_by_field_name("declarator")?;
    }
    Some(current)
}

/// `operator +` -> `operator+`, `operator  new` -> `operator new`
fn operator_spelling(written: &str) -> String {
    let symbol = written.trim().trim_start_matches("operator").trim();
    if symbol.starts_with(|c: char| c.is_alphabetic() || c == '_') {
        format!("operator {}", symbol.split_whitespace().collect::<Vec<_>>().join(" "))
    } else {
        format!("operator{}", symbol.split_whitespace().collect::<String>())
    }
}

/// `operator  unsigned   int` -> `operator unsigned int`
fn conversion_spelling(written: &str) -> String {
    let target = written.trim().trim_start_matches("operator");
    format!("operator {}", target.split_whitespace().collect::<Vec<_>>().join(" "))
}
