use atrius_fhir_support::validation_support::ReferenceTarget;
use atrius_fhir_support::{
    check_constraints, ConstraintEvaluator, IssueKind, ModelConfig, Validate, ValidationSeverity,
    Visitable,
};
use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

#[derive(Debug, Clone, PartialEq, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "Link")]
pub struct Link {
    id: Option<String>,
    reference: Option<String>,
    r#type: Option<String>,
}

impl ReferenceTarget for Link {
    fn literal_reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    fn declared_type(&self) -> Option<&str> {
        self.r#type.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir_invariant(
    key = "task-1",
    severity = "error",
    human = "A task title must not be a placeholder",
    expr = "title != 'tbd'",
    path = "Task"
)]
pub struct Task {
    id: Option<String>,
    title: String,
    #[fhir(min = 1)]
    step: Vec<String>,
    #[fhir(reference = "Patient|Group")]
    subject: Link,
    #[fhir(reference = "Practitioner")]
    owner: Vec<Link>,
    parent: Option<Box<Task>>,
}

fn link(reference: &str) -> Link {
    Link::builder().reference(reference).build().unwrap()
}

fn task(title: &str) -> Task {
    Task::builder()
        .title(title)
        .step("first")
        .subject(link("Patient/p1"))
        .build()
        .unwrap()
}

#[test]
fn test_builder_reports_every_missing_required_element() {
    let err = Task::builder().step("a").build().unwrap_err();
    assert_eq!(err.issues().len(), 2);
    assert!(err.has_issue_at("Task.title"));
    assert!(err.has_issue_at("Task.subject"));
    assert!(err.issues().iter().all(|i| i.kind == IssueKind::Required));
}

#[test]
fn test_minimum_cardinality() {
    let err = Task::builder()
        .title("t")
        .subject(link("Patient/p1"))
        .build()
        .unwrap_err();
    assert!(err.has_kind(IssueKind::Cardinality));
    assert!(err.has_issue_at("Task.step"));
}

#[test]
fn test_reference_target_types() {
    let err = Task::builder()
        .title("t")
        .step("s")
        .subject(link("Device/d1"))
        .owner(link("Practitioner/pr1"))
        .owner(link("Organization/o1"))
        .build()
        .unwrap_err();
    let paths: Vec<_> = err
        .issues()
        .iter()
        .filter(|i| i.kind == IssueKind::ReferenceType)
        .map(|i| i.path.as_str())
        .collect();
    assert_eq!(paths, vec!["Task.subject", "Task.owner[1]"]);
}

#[test]
fn test_contained_reference_is_exempt() {
    let built = Task::builder()
        .title("t")
        .step("s")
        .subject(link("#p1"))
        .build();
    assert!(built.is_ok());
}

#[test]
fn test_reference_checks_can_be_disabled() {
    let config = ModelConfig {
        check_reference_types: false,
        ..ModelConfig::default()
    };
    let built = Task::builder()
        .title("t")
        .step("s")
        .subject(link("Device/d1"))
        .build_with(&config);
    assert!(built.is_ok());
}

#[test]
fn test_empty_element_fails_ele_1() {
    let err = Link::builder().build().unwrap_err();
    assert!(err.has_kind(IssueKind::EmptyElement));
    assert!(err.has_issue_at("Link"));

    // the element id alone does not count as content
    let err = Link::builder().id("l1").build().unwrap_err();
    assert!(err.has_kind(IssueKind::EmptyElement));

    assert!(Link::builder().build_with(&ModelConfig::lenient()).is_ok());
}

#[test]
fn test_builder_checks_nested_values() {
    let bad_parent = Task {
        id: None,
        title: "   ".to_string(),
        step: Vec::new(),
        subject: link("Patient/p1"),
        owner: Vec::new(),
        parent: None,
    };

    let err = Task::builder()
        .title("child")
        .step("s")
        .subject(link("Group/g1"))
        .parent(bad_parent.clone())
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("Task.parent.title"));
    assert!(err.has_issue_at("Task.parent.step"));
    assert!(!err.has_issue_at("Task.title"));

    // built leniently, then checked again under the default configuration
    let child = Task::builder()
        .title("child")
        .step("s")
        .subject(link("Group/g1"))
        .parent(bad_parent)
        .build_with(&ModelConfig::lenient());
    let err = child.unwrap_err();
    assert!(err.has_issue_at("Task.parent.step"));
    assert!(!err.has_issue_at("Task.parent.title"));
}

#[test]
fn test_validate_rechecks_lenient_values() {
    let parent = Task::builder()
        .title("   ")
        .step("s")
        .subject(link("Patient/p1"))
        .build_with(&ModelConfig::lenient())
        .unwrap();
    let child = task("child")
        .to_builder()
        .parent(parent)
        .build_with(&ModelConfig::lenient())
        .unwrap();

    let err = child.validate().unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert_eq!(err.issues()[0].path, "Task.parent.title");
    assert_eq!(err.issues()[0].kind, IssueKind::InvalidValue);
}

#[test]
fn test_to_builder_round_trip() {
    let original = task("write docs");
    let copy = original.to_builder().step("second").build().unwrap();
    assert_eq!(copy.step(), &["first".to_string(), "second".to_string()]);
    assert_eq!(copy.title(), original.title());

    let replaced = copy.to_builder().set_step(["only"]).build().unwrap();
    assert_eq!(replaced.step().len(), 1);
}

#[test]
fn test_declared_invariants() {
    let invariants = <Task as Validate>::invariants();
    assert_eq!(invariants.len(), 1);
    assert_eq!(invariants[0].key, "task-1");
    assert_eq!(invariants[0].severity, ValidationSeverity::Error);
    assert!(<Link as Validate>::invariants().is_empty());
}

struct TitleEvaluator;

impl ConstraintEvaluator for TitleEvaluator {
    fn evaluate(&self, focus: &dyn Visitable, expr: &str) -> Result<bool, String> {
        let task = focus
            .as_any()
            .downcast_ref::<Task>()
            .ok_or_else(|| format!("unsupported focus {}", focus.type_name()))?;
        match expr {
            "title != 'tbd'" => Ok(task.title != "tbd"),
            other => Err(format!("unsupported expression {}", other)),
        }
    }
}

#[test]
fn test_check_constraints_walks_the_tree() {
    let root = task("tbd")
        .to_builder()
        .parent(task("real"))
        .build()
        .unwrap();
    let issues = check_constraints(&root, &TitleEvaluator);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "Task");
    assert_eq!(issues[0].kind, IssueKind::Constraint("task-1"));

    let nested = task("ok").to_builder().parent(task("tbd")).build().unwrap();
    let issues = check_constraints(&nested, &TitleEvaluator);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "Task.parent");
}

#[test]
fn test_error_display_summarises_issues() {
    let err = Task::builder().build().unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Task.title: missing required element"));
    assert!(message.contains("more issue(s)"));
}
