use glob::{MatchOptions, Pattern};
use log::trace;

use crate::config::Config;
use crate::exceptions::DumpError;

const MASK_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A compiled list of shell-style glob masks tested against bare file or directory names.
#[derive(Debug, Clone)]
pub struct MaskSet {
    patterns: Vec<Pattern>,
}

impl MaskSet {
    pub fn new(masks: &[&str]) -> Result<MaskSet, DumpError> {
        let patterns = masks
            .iter()
            .map(|m| Pattern::new(m).map_err(|e| DumpError::Pattern(m.to_string(), e)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MaskSet { patterns })
    }

    pub fn matches_any(&self, name: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_with(name, MASK_OPTIONS))
    }
}

/// Decides which directories are descended into and which files are written out.
pub struct FileFilter {
    dir_masks: MaskSet,
    file_masks: MaskSet,
    extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(config: &Config) -> Result<FileFilter, DumpError> {
        Ok(FileFilter {
            dir_masks: MaskSet::new(config.ignored_dir_masks)?,
            file_masks: MaskSet::new(config.ignored_file_masks)?,
            extensions: config.extensions.iter().map(|e| e.to_lowercase()).collect(),
        })
    }

    pub fn prunes_dir(&self, name: &str) -> bool {
        let pruned = self.dir_masks.matches_any(name);
        if pruned {
            trace!("pruning ignored directory: {:?}", name);
        }
        pruned
    }

    pub fn accepts_file(&self, name: &str) -> bool {
        if self.file_masks.matches_any(name) {
            trace!("skipping ignored file: {:?}", name);
            return false;
        }
        let lower = name.to_lowercase();
        if !self.extensions.iter().any(|ext| lower.ends_with(ext.as_str())) {
            trace!("skipping file without an allowed extension: {:?}", name);
            return false;
        }
        true
    }
}
