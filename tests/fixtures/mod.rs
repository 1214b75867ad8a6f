#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub fn get_test_fixture_path(kind: &str, fixture_name: Option<&str>) -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(kind);
    match fixture_name {
        Some(fixture_name) => root.join(fixture_name),
        None => root,
    }
}

fn render_fixture(name: &str, project_name: &str) -> String {
    let template = fs::read_to_string(get_test_fixture_path("django", Some(name)))
        .expect("Failed to read Django fixture template");
    template.replace("{{project_name}}", project_name)
}

/// A project laid out like `django-admin startproject <name> <dir>` output.
pub struct DjangoProject {
    pub dir: TempDir,
    pub name: String,
}

impl DjangoProject {
    pub fn start(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let package = dir.path().join(name);
        fs::create_dir_all(&package).unwrap();

        fs::write(dir.path().join("manage.py"), render_fixture("manage.py.tmpl", name)).unwrap();
        fs::write(package.join("__init__.py"), "").unwrap();
        fs::write(package.join("settings.py"), render_fixture("settings.py.tmpl", name)).unwrap();
        fs::write(package.join("urls.py"), "urlpatterns = []\n").unwrap();
        fs::write(package.join("wsgi.py"), "application = None\n").unwrap();

        Self {
            dir,
            name: name.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn package(&self) -> PathBuf {
        self.root().join(&self.name)
    }

    pub fn manage_py(&self) -> PathBuf {
        self.root().join("manage.py")
    }

    /// Rewrites manage.py, replacing `from` with `to`.
    pub fn edit_manage_py(&self, from: &str, to: &str) {
        let content = fs::read_to_string(self.manage_py()).unwrap();
        assert!(content.contains(from), "manage.py does not contain {from:?}");
        fs::write(self.manage_py(), content.replace(from, to)).unwrap();
    }
}

/// Writes `files` (relative path, content) under a fresh temp dir.
pub fn write_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (path, content) in files {
        let path = dir.path().join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}
