use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

use crate::exceptions::DumpError;
use crate::fs::FileSystem;

const SEPARATOR_WIDTH: usize = 80;

/// The label shown in a file's banner: the input directory's name followed by the
/// file's path inside it, always with forward slashes.
pub fn header_label(input_dir: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(input_dir).unwrap_or(file);
    let label = match dir_name(input_dir) {
        Some(name) => name.join(rel),
        None => rel.to_path_buf(),
    };
    label.to_string_lossy().replace('\\', "/")
}

// Paths like "." or "foo/.." have no final component, so fall back to the resolved name.
fn dir_name(dir: &Path) -> Option<PathBuf> {
    if let Some(name) = dir.file_name() {
        return Some(PathBuf::from(name));
    }
    dir.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(PathBuf::from))
}

pub fn write_banner<W: Write>(out: &mut W, label: &str) -> Result<(), DumpError> {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    write!(
        out,
        "\n//{sep}\n// File: {label}\n//{sep}\n\n",
        sep = separator,
        label = label
    )?;
    Ok(())
}

/// Writes the banner and the content of one source file, then flushes.
///
/// A file that can't be read gets an inline error comment instead of its content; only a
/// failure to write to `out` is returned as an error.
pub fn write_entry<W: Write, F: FileSystem>(
    out: &mut W,
    fs: &mut F,
    input_dir: &Path,
    file: &Path,
) -> Result<(), DumpError> {
    write_banner(out, &header_label(input_dir, file))?;

    match fs.read(file) {
        Ok(bytes) => {
            out.write_all(String::from_utf8_lossy(&bytes).as_bytes())?;
            out.write_all(b"\n")?;
        }
        Err(e) => {
            warn!("Unable to read {}: {}", file.display(), e);
            writeln!(out, "// Error reading file: {}", e)?;
        }
    }

    out.flush()?;
    Ok(())
}
