use std::{fmt, io};
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug)]
pub enum DumpError {
    Io(io::Error),
    CreateOutput(PathBuf, io::Error),
    Pattern(String, glob::PatternError),
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::CreateOutput(x, err) => write!(f, "Unable to create output file {}: {}", x.display(), err),
            Self::Pattern(p, err) => write!(f, "Invalid ignore mask '{}': {}", p, err),
        }
    }
}

impl From<io::Error> for DumpError {
    fn from(err: io::Error) -> DumpError {
        DumpError::Io(err)
    }
}

impl Error for DumpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) | Self::CreateOutput(_, err) => Some(err),
            Self::Pattern(_, err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_output_path() {
        let err = DumpError::CreateOutput(
            PathBuf::from("missing/out.txt"),
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        assert_eq!(
            err.to_string(),
            "Unable to create output file missing/out.txt: no such directory"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let err: DumpError = io::Error::new(io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, DumpError::Io(_)));
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
