use atrius_fhir_support::visitor::walk;
use atrius_fhir_support::{
    CollectingVisitor, PathAwareVisitor, PathVisit, PrimitiveValue, TypeInfo, Visitable, Visitor,
};
use atrius_macros::{FhirValidate, FhirVisit, TypeInfo};

#[derive(Debug, Clone, PartialEq, FhirVisit, FhirValidate, TypeInfo)]
struct Note {
    id: Option<String>,
    text: String,
    tags: Vec<String>,
    author: Option<Box<Note>>,
}

fn note(text: &str, tags: &[&str]) -> Note {
    Note {
        id: None,
        text: text.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author: None,
    }
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Visitor for Recorder {
    fn visit_start(&mut self, name: &str, index: Option<usize>, _node: &dyn Visitable) {
        match index {
            Some(i) => self.events.push(format!("start {}[{}]", name, i)),
            None => self.events.push(format!("start {}", name)),
        }
    }

    fn visit_list_start(&mut self, name: &str, len: usize) {
        self.events.push(format!("list {} {}", name, len));
    }

    fn visit_list_end(&mut self, name: &str, _len: usize) {
        self.events.push(format!("end list {}", name));
    }

    fn visit_value(&mut self, name: &str, value: PrimitiveValue<'_>) {
        self.events.push(format!("value {}={}", name, value));
    }

    fn visit_end(&mut self, name: &str, index: Option<usize>, _node: &dyn Visitable) {
        match index {
            Some(i) => self.events.push(format!("end {}[{}]", name, i)),
            None => self.events.push(format!("end {}", name)),
        }
    }
}

#[test]
fn test_traversal_order() {
    let mut recorder = Recorder::default();
    walk(&note("hello", &["a", "b"]), &mut recorder);

    assert_eq!(
        recorder.events,
        vec![
            "start Note",
            "start text",
            "value text=hello",
            "end text",
            "list tags 2",
            "start tags[0]",
            "value tags=a",
            "end tags[0]",
            "start tags[1]",
            "value tags=b",
            "end tags[1]",
            "end list tags",
            "end Note",
        ]
    );
}

#[test]
fn test_empty_list_is_not_reported() {
    let mut recorder = Recorder::default();
    walk(&note("x", &[]), &mut recorder);
    assert!(!recorder.events.iter().any(|e| e.starts_with("list")));
}

#[derive(Default)]
struct Paths {
    nodes: Vec<String>,
    values: Vec<(String, String)>,
}

impl PathVisit for Paths {
    fn visit_node(&mut self, path: &str, node: &dyn Visitable) {
        self.nodes.push(format!("{}:{}", path, node.type_name()));
    }

    fn visit_value(&mut self, path: &str, value: PrimitiveValue<'_>) {
        self.values.push((path.to_string(), value.to_string()));
    }
}

#[test]
fn test_path_aware_visitor_tracks_instance_paths() {
    let mut root = note("outer", &["t"]);
    root.author = Some(Box::new(note("inner", &[])));

    let mut visitor = PathAwareVisitor::new(Paths::default());
    walk(&root, &mut visitor);
    let paths = visitor.into_inner();

    assert_eq!(
        paths.nodes,
        vec![
            "Note:Note",
            "Note.text:string",
            "Note.tags[0]:string",
            "Note.author:Note",
            "Note.author.text:string",
        ]
    );
    assert!(paths
        .values
        .contains(&("Note.author.text".to_string(), "inner".to_string())));
}

#[test]
fn test_collecting_visitor_finds_nested_nodes() {
    let mut root = note("outer", &[]);
    root.author = Some(Box::new(note("inner", &["x"])));

    let mut notes = CollectingVisitor::<Note>::new();
    walk(&root, &mut notes);
    assert_eq!(notes.items().len(), 2);
    assert_eq!(notes.items()[1].text, "inner");

    let mut strings = CollectingVisitor::<String>::new();
    walk(&root, &mut strings);
    assert_eq!(strings.into_items(), vec!["outer", "inner", "x"]);
}

struct SkipChildren;

impl Visitor for SkipChildren {
    fn visit(&mut self, _name: &str, _index: Option<usize>, node: &dyn Visitable) -> bool {
        node.type_name() != "Note"
    }

    fn visit_value(&mut self, name: &str, _value: PrimitiveValue<'_>) {
        panic!("children of a skipped node were visited: {}", name);
    }
}

#[test]
fn test_visit_false_skips_children() {
    walk(&note("hidden", &["a"]), &mut SkipChildren);
}

struct PreVisitFilter {
    started: usize,
}

impl Visitor for PreVisitFilter {
    fn pre_visit(&mut self, node: &dyn Visitable) -> bool {
        node.type_name() == "Note"
    }

    fn visit_start(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Visitable) {
        self.started += 1;
    }
}

#[test]
fn test_pre_visit_false_skips_node() {
    let mut filter = PreVisitFilter { started: 0 };
    walk(&note("a", &["b", "c"]), &mut filter);
    assert_eq!(filter.started, 1);
}

#[test]
fn test_type_info_element_names() {
    assert_eq!(<Note as TypeInfo>::type_name(), "Note");
    assert_eq!(Note::element_names(), &["id", "text", "tags", "author"]);
    assert!(Note::summary_elements().is_empty());
}
