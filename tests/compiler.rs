use route_model::{compile, CompileError, RouteDescriptor, TemplatePart};

fn labels_edit() -> RouteDescriptor {
    RouteDescriptor::new("GET")
        .literal("/labels/")
        .param("id")
        .literal("/edit")
        .to("labels", "edit")
}

#[test]
fn compiler_template() {
    let route = compile(&labels_edit()).unwrap();

    assert_eq!(route.path(), "/labels/:id/edit");
    assert_eq!(route.parameters().collect::<Vec<_>>(), ["id"]);
    assert_eq!(route.verb(), "GET");
    assert_eq!(route.controller(), Some("labels"));
    assert_eq!(route.action(), Some("edit"));
    assert_eq!(route.request_line(), "GET /labels/:id/edit");

    assert!(route.matches("/labels/12/edit"));
    assert!(route.matches("/labels/abc/edit"));
    assert!(!route.matches("/labels/12"));
    assert!(!route.matches("/labels//edit"));
    assert!(!route.matches("/labels/1/2/edit"));
    assert!(!route.matches("/labels/12/edit/more"));
    assert!(!route.matches("x/labels/12/edit"));
}

#[test]
fn compiler_constraint() {
    let route = compile(&labels_edit().constraint("id", "[0-9]+")).unwrap();

    assert!(route.matches("/labels/12/edit"));
    assert!(!route.matches("/labels/abc/edit"));
    assert!(!route.matches("/labels/12a/edit"));
}

#[test]
fn compiler_constraint_alternation_stays_in_slot() {
    let route = compile(&labels_edit().constraint("id", "new|[0-9]+")).unwrap();

    assert!(route.matches("/labels/new/edit"));
    assert!(route.matches("/labels/7/edit"));
    assert!(!route.matches("/labels/new"));
    assert!(!route.matches("7/edit"));
}

#[test]
fn compiler_format() {
    let desc = RouteDescriptor::new("GET")
        .literal("/labels/")
        .param("id")
        .format()
        .to("labels", "show");
    let route = compile(&desc).unwrap();

    assert_eq!(route.path(), "/labels/:id");
    assert!(route.matches("/labels/12"));
    assert!(route.matches("/labels/12.json"));
    assert!(!route.matches("/labels/12.json/x"));
}

#[test]
fn compiler_multiple_parameters() {
    let desc = RouteDescriptor::new("PATCH")
        .literal("/projects/")
        .param("project_id")
        .literal("/labels/")
        .param("id")
        .constraint("project_id", "[0-9]+");
    let route = compile(&desc).unwrap();

    assert_eq!(route.path(), "/projects/:project_id/labels/:id");
    assert_eq!(
        route.parameters().collect::<Vec<_>>(),
        ["project_id", "id"]
    );
    assert!(route.matches("/projects/3/labels/bug"));
    assert!(!route.matches("/projects/x/labels/bug"));
}

#[test]
fn compiler_literal_is_not_escaped() {
    let desc = RouteDescriptor::new("GET").literal("/v1.0/status");
    let route = compile(&desc).unwrap();

    assert!(route.matches("/v1.0/status"));
    assert!(route.matches("/v1x0/status"));
}

#[test]
fn compiler_root() {
    let route = compile(&RouteDescriptor::new("GET").literal("/")).unwrap();
    assert!(route.matches("/"));
    assert!(!route.matches(""));
    assert_eq!(route.parameters().len(), 0);
}

#[test]
fn compiler_part_builder() {
    let desc = RouteDescriptor::new("GET")
        .part(TemplatePart::Literal("/files/".into()))
        .part(TemplatePart::Parameter("name".into()))
        .part(TemplatePart::Format);
    assert_eq!(desc.parts().len(), 3);
    assert_eq!(compile(&desc).unwrap().path(), "/files/:name");
}

#[test]
fn compiler_bad_constraint() {
    let desc = labels_edit().constraint("id", "[0-9");
    let err = compile(&desc).unwrap_err();

    assert_eq!(err.parameter(), Some("id"));
    match err {
        CompileError::Constraint { name, pattern, .. } => {
            assert_eq!(&*name, "id");
            assert_eq!(&*pattern, "[0-9");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn compiler_bad_template() {
    let desc = RouteDescriptor::new("GET").literal("/broken(/").param("id");
    let err = compile(&desc).unwrap_err();

    assert_eq!(err.parameter(), None);
    assert!(matches!(err, CompileError::Template { ref path, .. } if &**path == "/broken(/:id"));
}

#[test]
fn compiler_anchored_constraint_never_matches() {
    let route = compile(&labels_edit().constraint("id", "^[0-9]+$")).unwrap();

    assert_eq!(route.matcher_source(), "^/labels/(?:^[0-9]+$)/edit$");
    assert!(!route.matches("/labels/12/edit"));
    assert!(!route.matches("/labels/12"));
}

#[test]
fn compiler_clashing_constraints() {
    let desc = RouteDescriptor::new("GET")
        .literal("/a/")
        .param("x")
        .literal("/")
        .param("y")
        .constraint("x", "(?P<n>[0-9]+)")
        .constraint("y", "(?P<n>[0-9]+)");

    let err = compile(&desc).unwrap_err();
    assert_eq!(err.parameter(), Some("y"));

    // each constraint alone is fine
    let desc = RouteDescriptor::new("GET")
        .literal("/a/")
        .param("x")
        .literal("/")
        .param("y")
        .constraint("x", "(?P<n>[0-9]+)");
    assert!(compile(&desc).unwrap().matches("/a/1/b"));
}

#[test]
fn compiler_is_deterministic() {
    let desc = labels_edit().constraint("id", "[0-9]+").format();
    assert_eq!(compile(&desc).unwrap(), compile(&desc).unwrap());
}
