use crate::*;
use glob::glob;
use std::io::{self, Read};
use std::path::PathBuf;

/// The text of one manifest, declaring some part of the types, interfaces,
/// classes and bindings of an analysis. Several sources are merged into one
/// analysis, so a manifest may refer to names another one declares.
pub struct Source {
    pub uri: URI,
    pub code: String,
}

impl Source {
    pub fn new(uri: URI, code: String) -> Arc<Source> {
        Arc::new(Source { uri, code })
    }

    pub fn file(path: PathBuf) -> io::Result<Arc<Source>> {
        let path = path.canonicalize()?;
        let code = std::fs::read_to_string(&path)?;
        Ok(Self::new(path.into(), code))
    }

    pub fn stdin() -> io::Result<Arc<Source>> {
        let mut code = String::new();
        io::stdin().read_to_string(&mut code)?;
        Ok(Self::new(URI::Stdin, code))
    }

    /// Reads every file matching the glob pattern. An invalid pattern
    /// yields no sources.
    pub fn files<S: AsRef<str>>(s: S) -> io::Result<Vec<Arc<Source>>> {
        let mut sources = vec![];
        match glob(s.as_ref()) {
            Ok(paths) => {
                for path in paths {
                    if let Ok(path) = path {
                        sources.push(Self::file(path)?);
                    }
                }
            }
            Err(error) => warn!("Ignoring pattern {:?}: {}", s.as_ref(), error),
        }
        Ok(sources)
    }

    #[cfg(test)]
    pub fn test(code: &str) -> Arc<Source> {
        Self::new(URI::Test, code.into())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Source({})", self.uri)
    }
}
