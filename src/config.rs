use confique::Config as _;
use std::{path::PathBuf, sync::OnceLock};

#[derive(Debug, confique::Config)]
pub struct Config {
    /// Maximum number of distinct queries whose parse is kept.
    #[config(env = "SQLSENSE_CACHE_CAPACITY", default = 512)]
    pub cache_capacity: u64,
    /// Longer queries are not parsed at all.
    #[config(env = "SQLSENSE_MAX_QUERY_LEN", default = 65536)]
    pub max_query_len: usize,
    /// Shown in unknown-table diagnostics.
    #[config(env = "SQLSENSE_DATABASE_NAME")]
    pub database_name: Option<String>,
    /// JSON schema file loaded at startup.
    #[config(env = "SQLSENSE_SCHEMA_PATH")]
    pub schema_path: Option<PathBuf>,
}

impl Config {
    /// Environment first, then the optional TOML `file`, then defaults.
    pub fn load_from(file: Option<&std::path::Path>) -> crate::Result<Self> {
        let mut builder = Config::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_apply_without_sources() {
        let config = Config::builder().load().unwrap();
        assert_eq!(config.cache_capacity, 512);
        assert_eq!(config.max_query_len, 65536);
        assert!(config.database_name.is_none());
        assert!(config.schema_path.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "cache_capacity = 8\ndatabase_name = \"app\"").unwrap();
        let config = Config::builder().file(file.path()).load().unwrap();
        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.database_name.as_deref(), Some("app"));
        assert_eq!(config.max_query_len, 65536);
    }

    #[test]
    fn load_from_reads_the_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "max_query_len = 1024").unwrap();
        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.max_query_len, 1024);
        assert!(Config::load_from(None).is_ok());
    }
}
