//! Integration tests for the tfgen pipeline.

use std::fs;
use std::path::Path;

use tempfile::{tempdir, TempDir};
use tfgen_core::{CoreError, Pipeline, RenderMode, RunOptions, Step};
use tfgen_spec::SpecError;
use tfgen_templates::TemplateError;

const TFVARS: &str = "app_version = \"{{version}}\"\nstate_key   = \"{{backend.key}}\"\n";
const BACKEND: &str = "bucket = \"{{ backend.bucket }}\"\nkey    = \"{{ backend.key }}.tfstate\"\n";

/// Lay out a working directory with both templates, a spec and a descriptor.
fn workspace(descriptor: &str, spec: &str) -> TempDir {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("terraform.tfvars.j2"), TFVARS).unwrap();
    fs::write(temp.path().join("terraform.conf.j2"), BACKEND).unwrap();
    fs::write(temp.path().join("pyproject.toml"), descriptor).unwrap();
    fs::write(temp.path().join("deploy.yaml"), spec).unwrap();
    temp
}

fn options(dir: &Path, identifier: &str) -> RunOptions {
    RunOptions::new(identifier, dir.join("deploy.yaml"), dir.join("pyproject.toml"))
        .with_working_dir(dir)
}

fn read_spec(dir: &Path) -> serde_yaml::Value {
    serde_yaml::from_str(&fs::read_to_string(dir.join("deploy.yaml")).unwrap()).unwrap()
}

#[test]
fn test_full_run() {
    let temp = workspace(
        "[project]\nversion = \"1.2.3\"\n",
        "backend: {key: \"old\", bucket: \"tf-state\"}\n",
    );
    let dir = temp.path();

    let mut steps = Vec::new();
    let report = Pipeline::new(options(dir, "prod"))
        .run(|step| steps.push(step.clone()))
        .unwrap();

    let spec = read_spec(dir);
    assert_eq!(spec["version"].as_str(), Some("1.2.3"));
    assert_eq!(spec["backend"]["key"].as_str(), Some("prod"));

    assert_eq!(
        fs::read_to_string(dir.join("terraform.prod.tfvars")).unwrap(),
        "app_version = \"1.2.3\"\nstate_key   = \"prod\"\n"
    );
    assert_eq!(
        fs::read_to_string(dir.join("terraform.prod.conf")).unwrap(),
        "bucket = \"tf-state\"\nkey    = \"prod.tfstate\"\n"
    );

    assert_eq!(report.version, "1.2.3");
    assert_eq!(report.identifier, "prod");
    assert_eq!(
        steps,
        vec![
            Step::SpecUpdated(dir.join("deploy.yaml")),
            Step::Rendered(dir.join("terraform.prod.tfvars")),
            Step::Rendered(dir.join("terraform.prod.conf")),
        ]
    );
    assert_eq!(report.rendered.len(), 2);
}

#[test]
fn test_run_is_idempotent() {
    let temp = workspace(
        "[project]\nversion = \"3.0\"\n",
        "region: eu-west-1\nbackend:\n  bucket: tf-state\n  key: old\n",
    );
    let dir = temp.path();
    let snapshot = |dir: &Path| {
        ["deploy.yaml", "terraform.qa.tfvars", "terraform.qa.conf"]
            .map(|name| fs::read_to_string(dir.join(name)).unwrap())
    };

    Pipeline::new(options(dir, "qa")).run(|_| {}).unwrap();
    let first = snapshot(dir);

    Pipeline::new(options(dir, "qa")).run(|_| {}).unwrap();
    assert_eq!(snapshot(dir), first);

    // The number-like version survives the rewrite as text.
    assert_eq!(read_spec(dir)["version"].as_str(), Some("3.0"));
    assert!(first[1].contains("app_version = \"3.0\""));
}

#[test]
fn test_missing_descriptor() {
    let temp = workspace("", "backend:\n  key: old\n");
    let dir = temp.path();
    fs::remove_file(dir.join("pyproject.toml")).unwrap();
    let before = fs::read_to_string(dir.join("deploy.yaml")).unwrap();

    let err = Pipeline::new(options(dir, "prod")).run(|_| {}).unwrap_err();

    assert!(matches!(err, CoreError::Spec(SpecError::NotFound(_))));
    assert_eq!(fs::read_to_string(dir.join("deploy.yaml")).unwrap(), before);
    assert!(!dir.join("terraform.prod.tfvars").exists());
    assert!(!dir.join("terraform.prod.conf").exists());
}

#[test]
fn test_missing_version_never_writes() {
    let temp = workspace("[project]\nname = \"api\"\n", "backend:\n  key: old\n");
    let dir = temp.path();
    let before = fs::read_to_string(dir.join("deploy.yaml")).unwrap();

    let mut steps = 0;
    let err = Pipeline::new(options(dir, "prod"))
        .run(|_| steps += 1)
        .unwrap_err();

    assert!(matches!(err, CoreError::MissingVersion(_)));
    assert_eq!(steps, 0);
    assert_eq!(fs::read_to_string(dir.join("deploy.yaml")).unwrap(), before);
    assert!(!dir.join("terraform.prod.tfvars").exists());
}

#[test]
fn test_missing_spec() {
    let temp = workspace("[project]\nversion = \"1.0.0\"\n", "");
    let dir = temp.path();
    fs::remove_file(dir.join("deploy.yaml")).unwrap();

    let err = Pipeline::new(options(dir, "prod")).run(|_| {}).unwrap_err();

    assert!(matches!(err, CoreError::Spec(SpecError::NotFound(_))));
    assert!(!dir.join("deploy.yaml").exists());
    assert!(!dir.join("terraform.prod.tfvars").exists());
    assert!(!dir.join("terraform.prod.conf").exists());
}

#[test]
fn test_missing_backend_section() {
    let temp = workspace("[project]\nversion = \"1.0.0\"\n", "region: eu-west-1\n");
    let dir = temp.path();

    let err = Pipeline::new(options(dir, "prod")).run(|_| {}).unwrap_err();

    assert!(matches!(err, CoreError::Spec(SpecError::MissingField(ref f)) if f == "backend"));
    assert_eq!(
        fs::read_to_string(dir.join("deploy.yaml")).unwrap(),
        "region: eu-west-1\n"
    );
}

#[test]
fn test_missing_template_keeps_rewritten_spec() {
    let temp = workspace("[project]\nversion = \"1.0.0\"\n", "backend:\n  key: old\n");
    let dir = temp.path();
    fs::remove_file(dir.join("terraform.conf.j2")).unwrap();

    let err = Pipeline::new(options(dir, "prod")).run(|_| {}).unwrap_err();

    assert!(matches!(err, CoreError::Template(TemplateError::NotFound(_))));
    assert_eq!(read_spec(dir)["backend"]["key"].as_str(), Some("prod"));
    assert!(dir.join("terraform.prod.tfvars").exists());
    assert!(!dir.join("terraform.prod.conf").exists());
}

#[test]
fn test_strict_mode_rejects_unknown_placeholder() {
    let temp = workspace("[project]\nversion = \"1.0.0\"\n", "backend:\n  key: old\n");
    let dir = temp.path();

    // No backend.bucket in the spec.
    let lenient = Pipeline::new(options(dir, "prod")).run(|_| {});
    assert!(lenient.is_ok());
    assert_eq!(
        fs::read_to_string(dir.join("terraform.prod.conf")).unwrap(),
        "bucket = \"\"\nkey    = \"prod.tfstate\"\n"
    );

    let strict = Pipeline::new(options(dir, "prod").with_mode(RenderMode::Strict)).run(|_| {});
    assert!(matches!(
        strict,
        Err(CoreError::Template(TemplateError::MissingVariable(ref p))) if p == "backend.bucket"
    ));
}
