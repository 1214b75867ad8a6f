//! Django project introspection tests against a generated project layout.

mod fixtures;

use std::fs;

use djdeploy::error::ProjectError;
use djdeploy::skeleton::{guess_settings_path, project_name};
use fixtures::{write_tree, DjangoProject};
use pretty_assertions::assert_eq;

#[test]
fn test_get_project_name() {
    let project = DjangoProject::start("mysite");
    assert_eq!(project_name(project.root()).unwrap(), "mysite");
}

#[test]
fn test_get_project_name_no_manage_py() {
    let temp_dir = write_tree(&[]);
    let err = project_name(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ProjectError::ManagePyMissing { .. }));
}

#[test]
fn test_get_project_name_invalid_manage_py() {
    let project = DjangoProject::start("mysite");
    fs::write(project.manage_py(), "12345").unwrap();
    let err = project_name(project.root()).unwrap_err();
    assert!(matches!(err, ProjectError::SettingsModuleNotFound { .. }));
}

#[test]
fn test_guess_default_settings_file() {
    let project = DjangoProject::start("mysite");
    assert_eq!(
        guess_settings_path(project.root()),
        Some(project.package().join("settings.py"))
    );
}

#[test]
fn test_guess_prod_settings_file() {
    let project = DjangoProject::start("mysite");
    let prod = project.package().join("settings_prod.py");
    fs::copy(project.package().join("settings.py"), &prod).unwrap();
    assert_eq!(guess_settings_path(project.root()), Some(prod));
}

#[test]
fn test_manage_py_not_found() {
    let project = DjangoProject::start("mysite");
    fs::remove_file(project.manage_py()).unwrap();
    assert_eq!(guess_settings_path(project.root()), None);
}

#[test]
fn test_settings_module_in_manage_py_but_not_found() {
    let project = DjangoProject::start("mysite");
    fs::remove_file(project.package().join("settings.py")).unwrap();
    assert_eq!(guess_settings_path(project.root()), None);
}

#[test]
fn test_multiline_settings_module() {
    let project = DjangoProject::start("mysite");
    project.edit_manage_py("'mysite.settings'", " \n      'mysite.settings'");
    assert_eq!(
        guess_settings_path(project.root()),
        Some(project.package().join("settings.py"))
    );
}

#[test]
fn test_double_quotation_mark_for_module_name() {
    let project = DjangoProject::start("mysite");
    project.edit_manage_py("'mysite.settings'", "\"mysite.settings\"");
    assert_eq!(
        guess_settings_path(project.root()),
        Some(project.package().join("settings.py"))
    );
}

#[test]
fn test_settings_in_subdirectory() {
    let project = DjangoProject::start("mysite");
    let settings_dir = project.package().join("settings");
    fs::create_dir(&settings_dir).unwrap();
    fs::rename(
        project.package().join("settings.py"),
        settings_dir.join("dev.py"),
    )
    .unwrap();
    let prod = settings_dir.join("prod.py");
    fs::copy(settings_dir.join("dev.py"), &prod).unwrap();
    project.edit_manage_py("mysite.settings'", "mysite.settings.dev\"'");

    assert_eq!(guess_settings_path(project.root()), Some(prod));
}

#[test]
fn test_settings_in_subdirectory_without_prod() {
    let project = DjangoProject::start("mysite");
    let settings_dir = project.package().join("settings");
    fs::create_dir(&settings_dir).unwrap();
    fs::rename(
        project.package().join("settings.py"),
        settings_dir.join("dev.py"),
    )
    .unwrap();
    project.edit_manage_py("mysite.settings", "mysite.settings.dev");

    assert_eq!(
        guess_settings_path(project.root()),
        Some(settings_dir.join("dev.py"))
    );
}
