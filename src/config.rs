use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Ledger files to summarize, in the order they are compared.
    pub ledger_paths: Vec<PathBuf>,
    /// Stock count for evaluation; inferred from the ledgers when unset.
    pub stock_count: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let ledger_paths = parse_ledger_paths_from_map(&env_map)?;
        if ledger_paths.is_empty() {
            return Err(ConfigError::MissingEnv("LEDGER_PATHS".to_string()));
        }

        let stock_count = env_map
            .get("STOCK_COUNT")
            .map(|s| {
                s.trim().parse::<usize>().map_err(|_| {
                    ConfigError::InvalidValue(
                        "STOCK_COUNT".to_string(),
                        "must be a valid usize".to_string(),
                    )
                })
            })
            .transpose()?;

        Ok(Config {
            ledger_paths,
            stock_count,
        })
    }
}

fn parse_ledger_paths_from_map(
    env_map: &HashMap<String, String>,
) -> Result<Vec<PathBuf>, ConfigError> {
    if let Some(paths_str) = env_map.get("LEDGER_PATHS") {
        Ok(paths_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect())
    } else if let Some(file_path) = env_map.get("LEDGER_PATHS_FILE") {
        let content = std::fs::read_to_string(file_path).map_err(|_| {
            ConfigError::InvalidValue(
                "LEDGER_PATHS_FILE".to_string(),
                "file not found or unreadable".to_string(),
            )
        })?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect())
    } else {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_ledger_paths_from_list() {
        let config = Config::from_env_map(env(&[(
            "LEDGER_PATHS",
            "ledger_random.txt, ledger_momentum.txt,,",
        )]))
        .unwrap();
        assert_eq!(
            config.ledger_paths,
            vec![
                PathBuf::from("ledger_random.txt"),
                PathBuf::from("ledger_momentum.txt")
            ]
        );
        assert_eq!(config.stock_count, None);
    }

    #[test]
    fn test_ledger_paths_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let list = dir.path().join("ledgers.txt");
        std::fs::write(&list, "a.txt\n\n  b.txt  \n").unwrap();

        let config =
            Config::from_env_map(env(&[("LEDGER_PATHS_FILE", list.to_str().unwrap())])).unwrap();
        assert_eq!(
            config.ledger_paths,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
    }

    #[test]
    fn test_missing_ledger_paths() {
        match Config::from_env_map(HashMap::new()) {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "LEDGER_PATHS"),
            _ => panic!("Expected MissingEnv error"),
        }
        match Config::from_env_map(env(&[("LEDGER_PATHS", " , ")])) {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "LEDGER_PATHS"),
            _ => panic!("Expected MissingEnv error"),
        }
    }

    #[test]
    fn test_unreadable_paths_file() {
        let result = Config::from_env_map(env(&[("LEDGER_PATHS_FILE", "/nonexistent/list.txt")]));
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "LEDGER_PATHS_FILE"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_stock_count() {
        let config =
            Config::from_env_map(env(&[("LEDGER_PATHS", "a.txt"), ("STOCK_COUNT", "5")])).unwrap();
        assert_eq!(config.stock_count, Some(5));

        let result = Config::from_env_map(env(&[("LEDGER_PATHS", "a.txt"), ("STOCK_COUNT", "x")]));
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "STOCK_COUNT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
