use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::Config;
use crate::exceptions::DumpError;
use crate::filter::FileFilter;
use crate::fs::FileSystem;
use crate::{io_utils, writer};

/// How a run that didn't fail ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Generated { path: PathBuf, files: usize },
    /// No file matched; the empty output at `path` was removed again.
    NothingFound { path: PathBuf },
}

/// Dumps every matching file under `config.input_dirs` into a fresh output file.
///
/// The output is removed again if no file was found for it, whether the run completed or
/// failed. A partially written output is left in place on failure.
pub fn generate<F: FileSystem>(config: &Config, fs: &mut F) -> Result<Outcome, DumpError> {
    let filter = FileFilter::new(config)?;

    let output_path = io_utils::unique_output_path(&config.output_base);
    info!("Output will be written to {}", output_path.display());

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&output_path)
        .map_err(|e| DumpError::CreateOutput(output_path.clone(), e))?;

    let mut found = 0;
    let result = {
        let mut out = BufWriter::new(file);
        write_inputs(config, &filter, fs, &mut out, &output_path, &mut found)
            .and_then(|()| out.flush().map_err(DumpError::from))
    };

    if let Err(e) = result {
        if found == 0 {
            remove_empty_output(&output_path);
        }
        return Err(e);
    }

    if found == 0 {
        remove_empty_output(&output_path);
        return Ok(Outcome::NothingFound { path: output_path });
    }

    Ok(Outcome::Generated {
        path: output_path,
        files: found,
    })
}

// `found` counts a file before its banner is written, so a failure part-way through the
// first file still leaves the partial output in place.
fn write_inputs<W: Write, F: FileSystem>(
    config: &Config,
    filter: &FileFilter,
    fs: &mut F,
    out: &mut W,
    output_path: &Path,
    found: &mut usize,
) -> Result<(), DumpError> {
    let own_path = output_path.canonicalize().ok();

    for input_dir in &config.input_dirs {
        if !input_dir.is_dir() {
            warn!(
                "'{}' is not a valid directory. Skipping.",
                input_dir.display()
            );
            continue;
        }

        info!("Processing directory: {}", input_dir.display());
        for path in io_utils::walk_dir(input_dir, filter) {
            if own_path.is_some() && path.canonicalize().ok() == own_path {
                debug!("Skipping the output file itself: {}", path.display());
                continue;
            }
            *found += 1;
            writer::write_entry(out, fs, input_dir, &path)?;
        }
    }

    Ok(())
}

fn remove_empty_output(path: &Path) {
    match fs::metadata(path) {
        Ok(meta) if meta.len() == 0 => {}
        Ok(_) => {
            warn!("Keeping non-empty output file: {}", path.display());
            return;
        }
        Err(_) => return,
    }
    match fs::remove_file(path) {
        Ok(()) => info!("Removed empty output file: {}", path.display()),
        Err(e) => warn!("Unable to remove empty output file {}: {}", path.display(), e),
    }
}
