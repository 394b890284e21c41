use tree_sitter::Node;

pub fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let result = node.named_children(&mut cursor).next();
    result
}

pub fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Step one level into a declarator
///
/// Most declarators expose their inner declarator through the `declarator`
/// field; reference, parenthesized and variadic declarators only have an
/// unnamed child.
pub fn inner_declarator(node: Node<'_>) -> Option<Node<'_>> {
    if let Some(inner) = node.child_by_field_name("declarator") {
        return Some(inner);
    }
    match node.kind() {
        "reference_declarator" | "parenthesized_declarator" | "variadic_declarator" => {
            first_named_child(node)
        }
        _ => None,
    }
}

/// Descend through pointer/reference wrappers to the `function_declarator`
///
/// Conversion operators (`operator int() const`) have an `operator_cast`
/// node, possibly qualified, in place of a function declarator; that node is
/// returned as is.
pub fn find_function_declarator(declarator: Node<'_>) -> Option<Node<'_>> {
    let mut current = declarator;
    loop {
        match current.kind() {
            "function_declarator" | "operator_cast" => return Some(current),
            "qualified_identifier" => {
                let (leaf, _) = qualified_leaf(current);
                return (leaf.kind() == "operator_cast").then_some(current);
            }
            _ => current = inner_declarator(current)?,
        }
    }
}

/// Innermost `name` of a (possibly nested) `qualified_identifier`
///
/// `A::B::f` nests as `A :: (B :: f)`; returns the `f` node and the last
/// scope seen (`B`). A global qualifier (`::f`) has no scope.
pub fn qualified_leaf(node: Node<'_>) -> (Node<'_>, Option<Node<'_>>) {
    let mut current = node;
    let mut scope = None;
    while current.kind() == "qualified_identifier" {
        scope = current.child_by_field_name("scope");
        match current.child_by_field_name("name") {
            Some(name) => current = name,
            None => break,
        }
    }
    (current, scope)
}

/// Number of `Name<...>` scopes along a (possibly nested) qualified name
///
/// `Outer<T>::Inner<U>::f` has two; `ns::Stack<T>::push` and `A::f` have one
/// and none respectively.
pub fn template_scope_count(node: Node<'_>) -> usize {
    let mut current = node;
    let mut count = 0;
    while current.kind() == "qualified_identifier" {
        if current
            .child_by_field_name("scope")
            .is_some_and(|scope| scope.kind() == "template_type")
        {
            count += 1;
        }
        match current.child_by_field_name("name") {
            Some(name) => current = name,
            None => break,
        }
    }
    count
}

/// Descend through a parameter declarator to its identifier
pub fn declarator_identifier(declarator: Node<'_>) -> Option<Node<'_>> {
    let mut current = declarator;
    loop {
        match current.kind() {
            "identifier" | "field_identifier" => return Some(current),
            _ => current = inner_declarator(current)?,
        }
    }
}

/// Strip template argument lists from a scope or type name
///
/// `Stack<T>` becomes `Stack`, `Outer<int>::Inner` becomes `Outer::Inner`.
pub fn strip_template_args(name: &str) -> String {
    let mut depth = 0usize;
    let mut stripped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => stripped.push(c),
            _ => {}
        }
    }
    stripped.trim().to_string()
}

/// Last `::` segment of a scope name, without template arguments
pub fn scope_segment(name: &str) -> Option<String> {
    let stripped = strip_template_args(name);
    let segment = stripped.rsplit("::").next().unwrap_or("").trim();
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}
