use std::env;
use std::path::PathBuf;
use crate::core::repository::RepositoryStore;

pub const DEFAULT_DATA_FILE: &str = "./data.json";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3001;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the book list service
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub host: String,
    pub port: u16,
    pub store: RepositoryStore,
}

impl Configuration {
    pub fn new(data_file: &str) -> Self {
        Configuration {
            data_file: PathBuf::from(data_file),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            store: RepositoryStore::JsonFile,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String> {
        let data_file = lookup("BOOKLIST_DATA_FILE").unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        let mut config = Configuration::new(data_file.as_str());
        if let Some(host) = lookup("BOOKLIST_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("BOOKLIST_PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(err) => tracing::warn!(port = port.as_str(), "ignoring invalid BOOKLIST_PORT {}", err),
            }
        }
        if let Some(store) = lookup("BOOKLIST_STORE") {
            config.store = RepositoryStore::from(store);
        }
        config
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn listening_message(&self) -> String {
        format!("Backend listening on {}", self.base_url())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
