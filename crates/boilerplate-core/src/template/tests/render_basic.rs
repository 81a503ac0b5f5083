//! Basic rendering tests for template engine

use super::helpers::project_params;
use super::*;

#[test]
fn test_render_simple_placeholder() {
    let params = project_params();
    let result = render("name: {{ProjectName}}", &params).unwrap();
    assert_eq!(result, "name: demo-svc");
}

#[test]
fn test_render_placeholder_with_spaces() {
    let params = project_params();
    let result = render("name: {{  ProjectName }}", &params).unwrap();
    assert_eq!(result, "name: demo-svc");
}

#[test]
fn test_render_scalar_values() {
    let params = project_params();
    let result = render(
        "port={{DefaultServerPort}} metrics={{Metrics}} ratio={{Ratio}}",
        &params,
    )
    .unwrap();
    assert_eq!(result, "port=8080 metrics=true ratio=0.5");
}

#[test]
fn test_render_every_occurrence_replaced() {
    let params = project_params();
    let result = render(
        "package {{ProjectPackageName}}\n// {{ProjectPackageName}} again",
        &params,
    )
    .unwrap();
    assert_eq!(result, "package demosvc\n// demosvc again");
}

#[test]
fn test_render_path_like_template() {
    let params = project_params();
    let result = render(
        "{{ProjectName}}/pkg/{{ProjectPackageName}}/{{ProjectPackageName}}.go",
        &params,
    )
    .unwrap();
    assert_eq!(result, "demo-svc/pkg/demosvc/demosvc.go");
}

#[test]
fn test_render_no_placeholders_is_identity() {
    let params = project_params();
    for template in ["", "plain", "a } b { c", "}} stray", "multi\nline\ntext\n"] {
        assert_eq!(render(template, &params).unwrap(), template);
    }
}

#[test]
fn test_render_with_empty_dictionary_and_no_placeholders() {
    let params = ParameterDictionary::new();
    assert_eq!(render("static", &params).unwrap(), "static");
}

#[test]
fn test_render_is_deterministic() {
    let params = project_params();
    let template = "{{ProjectName}}-{{ProjectPackage}}-{{DefaultServerPort}}";
    let first = render(template, &params).unwrap();
    let second = render(template, &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_value_containing_braces_is_not_reinterpreted() {
    let params = ParameterDictionary::new().with("Name", "{{Other}}");
    assert_eq!(render("{{Name}}", &params).unwrap(), "{{Other}}");
}

#[test]
fn test_engine_struct_matches_free_function() {
    let params = project_params();
    let engine = TemplateEngine::new();
    assert_eq!(
        engine.render("{{ProjectName}}", &params).unwrap(),
        render("{{ProjectName}}", &params).unwrap()
    );
}
