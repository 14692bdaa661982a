//! # Visitor-based traversal
//!
//! Every generated model type implements [`Visitable`]. Calling
//! [`Visitable::accept`] walks the value depth-first and reports each node to a
//! [`Visitor`]:
//!
//! 1. `pre_visit(node)` - returning `false` skips the node entirely
//! 2. `visit_start(name, index, node)`
//! 3. `visit(name, index, node)` - returning `false` skips the children
//! 4. `visit_value(name, value)` for primitive nodes, then the children in
//!    declaration order; repeating children are bracketed by
//!    `visit_list_start` / `visit_list_end`
//! 5. `visit_end(name, index, node)`
//! 6. `post_visit(node)`
//!
//! Choice elements are reported under their base name (`value`, not `valueQuantity`).

use std::any::Any;

use crate::primitive::PrimitiveValue;
use crate::validate::Invariant;

pub trait Visitable {
    /// FHIR type name of this node (`EpisodeOfCare`, `CodeableConcept`, `string`).
    fn type_name(&self) -> &'static str;

    /// Walks this node and its children.
    fn accept(&self, element_name: &str, element_index: Option<usize>, visitor: &mut dyn Visitor);

    fn as_any(&self) -> &dyn Any;

    /// FHIRPath invariants declared on this node's type.
    fn invariants(&self) -> &'static [Invariant] {
        &[]
    }
}

#[allow(unused_variables)]
pub trait Visitor {
    fn pre_visit(&mut self, node: &dyn Visitable) -> bool {
        true
    }

    fn visit_start(&mut self, element_name: &str, element_index: Option<usize>, node: &dyn Visitable) {}

    /// Returns whether the children of `node` should be visited.
    fn visit(&mut self, element_name: &str, element_index: Option<usize>, node: &dyn Visitable) -> bool {
        true
    }

    fn visit_list_start(&mut self, element_name: &str, len: usize) {}

    fn visit_list_end(&mut self, element_name: &str, len: usize) {}

    /// Reports the value of the primitive node most recently started.
    fn visit_value(&mut self, element_name: &str, value: PrimitiveValue<'_>) {}

    fn visit_end(&mut self, element_name: &str, element_index: Option<usize>, node: &dyn Visitable) {}

    fn post_visit(&mut self, node: &dyn Visitable) {}
}

/// Walks `root` using its type name as the element name.
pub fn walk(root: &dyn Visitable, visitor: &mut dyn Visitor) {
    root.accept(root.type_name(), None, visitor);
}

/// Visits each item of a repeating element, bracketed by the list callbacks.
pub fn accept_list<T: Visitable>(items: &[T], element_name: &str, visitor: &mut dyn Visitor) {
    if items.is_empty() {
        return;
    }
    visitor.visit_list_start(element_name, items.len());
    for (index, item) in items.iter().enumerate() {
        item.accept(element_name, Some(index), visitor);
    }
    visitor.visit_list_end(element_name, items.len());
}

impl<T: Visitable> Visitable for Box<T> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn accept(&self, element_name: &str, element_index: Option<usize>, visitor: &mut dyn Visitor) {
        (**self).accept(element_name, element_index, visitor)
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn invariants(&self) -> &'static [Invariant] {
        (**self).invariants()
    }
}

// Plain strings back element ids and are visited as leaf values.
impl Visitable for String {
    fn type_name(&self) -> &'static str {
        "string"
    }

    fn accept(&self, element_name: &str, element_index: Option<usize>, visitor: &mut dyn Visitor) {
        if !visitor.pre_visit(self) {
            return;
        }
        visitor.visit_start(element_name, element_index, self);
        if visitor.visit(element_name, element_index, self) {
            visitor.visit_value(element_name, PrimitiveValue::String(self));
        }
        visitor.visit_end(element_name, element_index, self);
        visitor.post_visit(self);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Callbacks for [`PathAwareVisitor`], receiving FHIRPath-like instance paths
/// such as `MedicationDispense.performer[0].actor`.
#[allow(unused_variables)]
pub trait PathVisit {
    fn visit_node(&mut self, path: &str, node: &dyn Visitable) {}

    fn visit_value(&mut self, path: &str, value: PrimitiveValue<'_>) {}
}

/// A [`Visitor`] that keeps track of the instance path of the current node.
pub struct PathAwareVisitor<T> {
    inner: T,
    segments: Vec<String>,
    path: String,
}

impl<T: PathVisit> PathAwareVisitor<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            segments: Vec::new(),
            path: String::new(),
        }
    }

    /// Path of the node currently being visited.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    fn rebuild_path(&mut self) {
        self.path = self.segments.join(".");
    }
}

impl<T: PathVisit> Visitor for PathAwareVisitor<T> {
    fn visit_start(&mut self, element_name: &str, element_index: Option<usize>, _node: &dyn Visitable) {
        let segment = match element_index {
            Some(index) => format!("{}[{}]", element_name, index),
            None => element_name.to_string(),
        };
        self.segments.push(segment);
        self.rebuild_path();
    }

    fn visit(&mut self, _element_name: &str, _element_index: Option<usize>, node: &dyn Visitable) -> bool {
        self.inner.visit_node(&self.path, node);
        true
    }

    fn visit_value(&mut self, _element_name: &str, value: PrimitiveValue<'_>) {
        self.inner.visit_value(&self.path, value);
    }

    fn visit_end(&mut self, _element_name: &str, _element_index: Option<usize>, _node: &dyn Visitable) {
        self.segments.pop();
        self.rebuild_path();
    }
}

/// Collects a clone of every node of type `T` found in a tree.
///
/// ```rust,ignore
/// let mut collector = CollectingVisitor::<Reference>::new();
/// walk(&dispense, &mut collector);
/// let references = collector.into_items();
/// ```
pub struct CollectingVisitor<T> {
    items: Vec<T>,
}

impl<T: Clone + 'static> CollectingVisitor<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone + 'static> Default for CollectingVisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Visitor for CollectingVisitor<T> {
    fn visit(&mut self, _element_name: &str, _element_index: Option<usize>, node: &dyn Visitable) -> bool {
        if let Some(item) = node.as_any().downcast_ref::<T>() {
            self.items.push(item.clone());
        }
        true
    }
}
