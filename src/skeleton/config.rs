pub const MANAGE_PY: &str = "manage.py";

pub const SETTINGS_ENV_VAR: &str = "DJANGO_SETTINGS_MODULE";

/// Directory name of a settings package, e.g. `mysite/settings/dev.py`.
pub const SETTINGS_PACKAGE: &str = "settings";

pub const PROD_SUFFIX: &str = "_prod";

pub const PROD_MODULE: &str = "prod";

pub const PYTHON_EXTENSION: &str = "py";
