use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::model::Conflict;

#[derive(Debug)]
pub enum GenError {
    Io { path: PathBuf, source: io::Error },
    Pattern(glob::PatternError),
    Glob(glob::GlobError),
    DuplicateOpcodes(Vec<Conflict>),
    Stale(Vec<PathBuf>),
    Report(serde_json::Error),
}

impl GenError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path.display(), source)
            }
            GenError::Pattern(err) => write!(f, "Invalid source pattern: {}", err),
            GenError::Glob(err) => write!(f, "Failed to walk sources: {}", err),
            GenError::DuplicateOpcodes(conflicts) => {
                write!(f, "{} duplicate opcode definition(s)", conflicts.len())?;
                for conflict in conflicts {
                    write!(f, "\n  {}", conflict)?;
                }
                Ok(())
            }
            GenError::Stale(paths) => {
                write!(f, "Generated files are out of date:")?;
                for path in paths {
                    write!(f, "\n  {}", path.display())?;
                }
                Ok(())
            }
            GenError::Report(err) => write!(f, "Failed to serialize report: {}", err),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io { source, .. } => Some(source),
            GenError::Pattern(err) => Some(err),
            GenError::Glob(err) => Some(err),
            GenError::Report(err) => Some(err),
            GenError::DuplicateOpcodes(_) | GenError::Stale(_) => None,
        }
    }
}

impl From<glob::PatternError> for GenError {
    fn from(err: glob::PatternError) -> Self {
        GenError::Pattern(err)
    }
}

impl From<glob::GlobError> for GenError {
    fn from(err: glob::GlobError) -> Self {
        GenError::Glob(err)
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::Report(err)
    }
}
