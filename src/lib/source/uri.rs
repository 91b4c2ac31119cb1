use std::fmt;
use std::path::{Path, PathBuf};

/// Where a manifest was read from. Every declared name keeps it, so a
/// diagnostic can point back at the document it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum URI {
    #[cfg(test)]
    Test,

    File(PathBuf),
    Stdin,
}

impl URI {
    pub fn path(&self) -> Option<&Path> {
        match self {
            URI::File(path) => Some(path),
            _ => None,
        }
    }
}

impl From<PathBuf> for URI {
    fn from(path: PathBuf) -> URI {
        URI::File(path)
    }
}

impl fmt::Display for URI {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            URI::File(path) => write!(f, "file://{}", path.display()),
            URI::Stdin => write!(f, "stdin:"),
            #[cfg(test)]
            URI::Test => write!(f, "test:"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifests_from_files_keep_their_path() {
        let uri = URI::from(PathBuf::from("/menus/food.variance.yml"));

        assert_eq!(uri.path(), Some(Path::new("/menus/food.variance.yml")));
        assert_eq!(uri.to_string(), "file:///menus/food.variance.yml");
        assert_eq!(URI::Stdin.path(), None);
        assert_eq!(URI::Stdin.to_string(), "stdin:");
        assert_eq!(URI::Test.to_string(), "test:");
    }
}
