pub const INCLUDE_MARKER: &str = "-r";

pub const COMMENT_PREFIX: &str = "#";

pub const DOCSTRING_PREFIX: &str = "\"\"\"";

/// Characters that end the package name in a specifier line:
/// environment marker, extras, then the comparison operators.
pub const SPECIFIER_DELIMITERS: &[char] = &[';', '[', '~', '>', '=', '<'];

pub const DEFAULT_FILE_NAME: &str = "requirements.txt";
