//! Validation issue collection shared by builders and on-demand validation.

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::ModelConfig;
use crate::validation_support::{self, ReferenceTarget};
use crate::visitor::{PathAwareVisitor, PathVisit, Visitable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// What kind of rule produced a [`ValidationIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// A 1..1 element is missing.
    Required,
    /// A repeating element has fewer items than its minimum cardinality.
    Cardinality,
    /// An element has neither a value nor children (ele-1).
    EmptyElement,
    /// A primitive value violates its lexical rules.
    InvalidValue,
    /// A reference points at a resource type the element does not allow.
    ReferenceType,
    /// A structural rule of a specific type (ext-1, per-1).
    Rule(&'static str),
    /// A declared FHIRPath invariant evaluated to false.
    Constraint(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: ValidationSeverity,
    pub kind: IssueKind,
    /// Instance path of the offending element, e.g. `EpisodeOfCare.statusHistory[0].status`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Returned when a value fails validation. Carries every issue that was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Returns `true` if some issue is reported at exactly `path`.
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|i| i.path == path)
    }

    pub fn has_kind(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|i| i.kind == kind)
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    match issues {
        [] => "validation failed".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more issue(s))", first, rest.len()),
    }
}

/// A FHIRPath invariant declared on a type through `#[fhir_invariant(...)]`.
#[derive(Debug, Clone)]
pub struct Invariant {
    pub key: &'static str,
    pub severity: ValidationSeverity,
    pub human: &'static str,
    pub expr: &'static str,
    pub path: &'static str,
}

/// Something that can evaluate a boolean FHIRPath expression over a focus node.
pub trait ConstraintEvaluator {
    fn evaluate(&self, focus: &dyn Visitable, expr: &str) -> Result<bool, String>;
}

/// Accumulates issues while a value tree is validated.
///
/// Builders and [`Validate::validate`] both walk the whole tree, so values assembled
/// without a builder (`Reference::to`, `From` conversions) are still checked.
pub struct ValidationContext<'a> {
    config: &'a ModelConfig,
    issues: Vec<ValidationIssue>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(config: &'a ModelConfig) -> Self {
        Self {
            config,
            issues: Vec::new(),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        self.config
    }

    pub fn report(&mut self, kind: IssueKind, path: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity: ValidationSeverity::Error,
            kind,
            path: path.to_string(),
            message: message.into(),
        });
    }

    pub fn warn(&mut self, kind: IssueKind, path: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity: ValidationSeverity::Warning,
            kind,
            path: path.to_string(),
            message: message.into(),
        });
    }

    pub fn required(&mut self, path: &str) {
        self.report(IssueKind::Required, path, "missing required element");
    }

    /// Checks the minimum cardinality of a repeating element.
    pub fn check_min<T>(&mut self, path: &str, items: &[T], min: usize) {
        if items.len() < min {
            self.report(
                IssueKind::Cardinality,
                path,
                format!(
                    "element requires at least {} item(s), found {}",
                    min,
                    items.len()
                ),
            );
        }
    }

    /// Reports an ele-1 violation when `has_children` is false.
    pub fn check_has_children(&mut self, path: &str, has_children: bool) {
        if !has_children && self.config.check_empty_elements {
            self.report(
                IssueKind::EmptyElement,
                path,
                "element must have a value or children",
            );
        }
    }

    /// Records the outcome of a lexical check. Only the first lexical problem per path
    /// is kept.
    pub fn lexical(&mut self, path: &str, result: Result<(), String>) {
        if !self.config.check_primitive_lexical {
            return;
        }
        if let Err(message) = result {
            let already = self
                .issues
                .iter()
                .any(|i| i.kind == IssueKind::InvalidValue && i.path == path);
            if !already {
                self.report(IssueKind::InvalidValue, path, message);
            }
        }
    }

    pub fn check_reference<R: ReferenceTarget + ?Sized>(
        &mut self,
        path: &str,
        reference: &R,
        allowed: &[&str],
    ) {
        if !self.config.check_reference_types {
            return;
        }
        if let Err(message) = validation_support::check_reference_type(
            reference.literal_reference(),
            reference.declared_type(),
            allowed,
        ) {
            self.report(IssueKind::ReferenceType, path, message);
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == ValidationSeverity::Error)
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    /// Converts the collected issues into the error returned by a failed build.
    pub fn into_error(self) -> ValidationError {
        ValidationError {
            issues: self.issues,
        }
    }

    /// Finishes validation of `root`, failing if any error-severity issue was found.
    pub fn finish(self, root: &str) -> Result<(), ValidationError> {
        if self.has_errors() {
            debug!(
                "{} failed validation with {} issue(s)",
                root,
                self.issues.len()
            );
            return Err(self.into_error());
        }
        trace!("{} validated", root);
        Ok(())
    }
}

/// Types that can validate themselves against their structure definition.
///
/// Implementations are generated by `#[derive(FhirValidate)]`.
pub trait Validate: Visitable {
    /// Validates this value, reporting issues relative to `path`.
    fn validate_into(&self, path: &str, ctx: &mut ValidationContext<'_>);

    /// FHIRPath invariants declared on this type.
    fn invariants() -> &'static [Invariant]
    where
        Self: Sized,
    {
        &[]
    }

    /// Validates the whole tree with the process-wide configuration.
    fn validate(&self) -> Result<(), ValidationError>
    where
        Self: Sized,
    {
        let config = ModelConfig::current();
        self.validate_with(&config)
    }

    fn validate_with(&self, config: &ModelConfig) -> Result<(), ValidationError>
    where
        Self: Sized,
    {
        let root = self.type_name();
        let mut ctx = ValidationContext::new(config);
        self.validate_into(root, &mut ctx);
        ctx.finish(root)
    }
}

impl<T: Validate> Validate for Box<T> {
    fn validate_into(&self, path: &str, ctx: &mut ValidationContext<'_>) {
        (**self).validate_into(path, ctx)
    }
}

impl Validate for String {
    fn validate_into(&self, path: &str, ctx: &mut ValidationContext<'_>) {
        ctx.lexical(path, validation_support::check_string(self));
    }
}

struct ConstraintWalker<'e> {
    evaluator: &'e dyn ConstraintEvaluator,
    issues: Vec<ValidationIssue>,
}

impl PathVisit for ConstraintWalker<'_> {
    fn visit_node(&mut self, path: &str, node: &dyn Visitable) {
        for inv in node.invariants() {
            let message = match self.evaluator.evaluate(node, inv.expr) {
                Ok(true) => continue,
                Ok(false) => inv.human.to_string(),
                Err(e) => format!("{} (evaluation failed: {})", inv.human, e),
            };
            self.issues.push(ValidationIssue {
                severity: inv.severity,
                kind: IssueKind::Constraint(inv.key),
                path: path.to_string(),
                message,
            });
        }
    }
}

/// Evaluates every declared invariant in the tree rooted at `root`.
pub fn check_constraints(
    root: &dyn Visitable,
    evaluator: &dyn ConstraintEvaluator,
) -> Vec<ValidationIssue> {
    let mut visitor = PathAwareVisitor::new(ConstraintWalker {
        evaluator,
        issues: Vec::new(),
    });
    root.accept(root.type_name(), None, &mut visitor);
    visitor.into_inner().issues
}
