use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    Memory,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "memory" => RepositoryStore::Memory,
            _ => RepositoryStore::JsonFile,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::JsonFile => write!(f, "file"),
            RepositoryStore::Memory => write!(f, "memory"),
        }
    }
}
