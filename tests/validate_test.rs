use baker_hooks::context::TemplateVars;
use baker_hooks::error::{Error, SlugViolation, ValidationError};
use baker_hooks::logger::Logger;
use baker_hooks::validate::{
    check_app_slug, check_author_name, check_project_slug, validate, GROUP_TITLE, WORKFLOW_NAME,
};

fn vars(project_slug: &str, app_slug: &str, author_name: &str) -> TemplateVars {
    TemplateVars {
        project_slug: project_slug.to_string(),
        app_slug: app_slug.to_string(),
        author_name: author_name.to_string(),
        ..TemplateVars::default()
    }
}

fn run(vars: &TemplateVars) -> (Result<(), Error>, String) {
    let mut logger = Logger::new(Vec::new(), false);
    let result = validate(&mut logger, vars);
    (result, String::from_utf8(logger.into_inner()).unwrap())
}

#[test]
fn test_project_slug_lowercase_identity() {
    for slug in ["my-app", "my_app", "", "app-2", "über"] {
        assert!(check_project_slug(slug).is_ok(), "{slug} should pass");
    }
    for slug in ["My-App", "MYAPP", "myApp", "Über"] {
        assert!(check_project_slug(slug).is_err(), "{slug} should fail");
    }
}

#[test]
fn test_app_slug_rules() {
    assert!(check_app_slug("my_app").is_ok());
    assert!(check_app_slug("_app2").is_ok());

    for (slug, violation) in [
        ("my-app", SlugViolation::NotIdentifier),
        ("2app", SlugViolation::NotIdentifier),
        ("", SlugViolation::NotIdentifier),
        ("My_App", SlugViolation::NotLowercase),
    ] {
        assert_eq!(
            check_app_slug(slug),
            Err(ValidationError::AppSlug { slug: slug.to_string(), violation })
        );
    }
}

#[test]
fn test_author_name_backslash() {
    assert!(check_author_name("Jane Doe").is_ok());
    assert!(check_author_name("").is_ok());
    assert!(check_author_name("Jane/Doe").is_ok());
    assert!(check_author_name("Jane\\Doe").is_err());
    assert!(check_author_name("\\").is_err());
}

#[test_log::test]
fn test_all_checks_pass() {
    let (result, output) = run(&vars("my-app", "my_app", "Jane Doe"));

    assert!(result.is_ok());
    let expected = format!(
        "\n🚀 Starting workflow: {WORKFLOW_NAME}\n\
         ▶ {GROUP_TITLE}\n\
         💡 Validating project slug: my-app\n\
         🎉 Project slug validation passed\n\
         💡 Validating app slug: my_app\n\
         🎉 App slug validation passed\n\
         💡 Validating author name: Jane Doe\n\
         🎉 Author name validation passed\n\
         ◀ End: {GROUP_TITLE}\n\
         ✅ Workflow completed: {WORKFLOW_NAME}\n"
    );
    assert_eq!(output, expected);
}

#[test_log::test]
fn test_bad_project_slug_stops_validation() {
    let (result, output) = run(&vars("My-App", "my_app", "Jane\\Doe"));

    match result {
        Err(Error::ValidationError(ValidationError::ProjectSlug { slug })) => {
            assert_eq!(slug, "My-App")
        }
        other => panic!("Expected project slug failure, got {other:?}"),
    }
    assert!(output.contains("💥 Project slug 'My-App' should be all lowercase"));
    assert!(!output.contains("app slug"));
    assert!(!output.contains("author name"));
}

#[test_log::test]
fn test_bad_author_name() {
    let (result, output) = run(&vars("my-app", "my_app", "Jane\\Doe"));

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::AuthorName { .. }))
    ));
    assert!(output.contains("🎉 App slug validation passed"));
    assert!(output.contains("💥 Don't include backslashes in author name"));
    assert!(!output.contains("Author name validation passed"));
}

#[test_log::test]
fn test_failure_closes_group_without_workflow_failure() {
    let (result, output) = run(&vars("my-app", "my-app", "Jane Doe"));

    assert!(result.is_err());
    assert!(output.ends_with(&format!(
        "💥 App slug 'my-app' is not a valid identifier\n\
         ◀ End: {GROUP_TITLE}\n"
    )));
    assert!(!output.contains("Workflow failed"));
    assert!(!output.contains("Workflow completed"));
}

#[test]
fn test_unexpected_error_announces_workflow_failure() {
    let mut logger = Logger::new(Vec::new(), false);
    let result: Result<(), Error> = logger.workflow(WORKFLOW_NAME, |logger| {
        let _group = logger.group(GROUP_TITLE)?;
        Err(std::io::Error::other("stderr closed").into())
    });
    let output = String::from_utf8(logger.into_inner()).unwrap();

    assert!(matches!(result, Err(Error::IoError(_))));
    assert!(output.ends_with(&format!(
        "◀ End: {GROUP_TITLE}\n❌ Workflow failed: {WORKFLOW_NAME}\n"
    )));
}
