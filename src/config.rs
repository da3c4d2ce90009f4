use std::path::PathBuf;

/// File suffixes eligible for output, compared against the lowercased file name.
pub const FILE_EXTENSIONS: &[&str] = &[
    ".cs", ".csproj", ".vue", ".js", ".json", ".iss", ".ini", ".ps1", ".psm1", ".psd1",
];

/// Directory names that are never descended into.
pub const IGNORED_DIR_MASKS: &[&str] = &[
    ".*",
    "bin",
    "obj",
    "dist",
    "node_modules",
    "dist-server",
    "Output",
    "TwoMachines",
];

/// File names that are skipped regardless of extension.
pub const IGNORED_FILE_MASKS: &[&str] = &[".*", "*.tmp", "*.bak", "*.swp", "*.user", "*.suo"];

pub struct Config<'a> {
    pub input_dirs: Vec<PathBuf>,
    pub output_base: PathBuf,
    pub extensions: &'a [&'a str],
    pub ignored_dir_masks: &'a [&'a str],
    pub ignored_file_masks: &'a [&'a str],
}

impl Config<'static> {
    pub fn new(input_dirs: Vec<PathBuf>, output_base: PathBuf) -> Self {
        Config {
            input_dirs,
            output_base,
            extensions: FILE_EXTENSIONS,
            ignored_dir_masks: IGNORED_DIR_MASKS,
            ignored_file_masks: IGNORED_FILE_MASKS,
        }
    }
}
