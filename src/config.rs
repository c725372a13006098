//! Runtime configuration
//!
//! Everything is read from the environment with sensible defaults, so a
//! bare `Config::default()` works out of the box:
//!
//! | Variable        | Default                                  |
//! |-----------------|------------------------------------------|
//! | `DATA_DIR`      | `.` (database file lands next to the cwd)|
//! | `STORE_NAME`    | `Indirapuram Quick Bites`                |
//! | `STORE_ADDRESS` | `273-FF, Shakti Khand IV, Indirapuram`   |
//! | `STORE_PHONE`   | `9599256330`                             |

use std::path::PathBuf;

use crate::models::StoreInfo;

const DB_FILE: &str = "quickbites.redb";

#[derive(Debug, Clone)]
pub struct Config {
    /// Full path of the redb database file
    pub db_path: PathBuf,
    /// Store identity printed on invoices
    pub store_info: StoreInfo,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults above.
    pub fn from_env() -> Self {
        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let defaults = StoreInfo::default();

        Self {
            db_path: data_dir.join(DB_FILE),
            store_info: StoreInfo {
                name: std::env::var("STORE_NAME").unwrap_or(defaults.name),
                address: std::env::var("STORE_ADDRESS").unwrap_or(defaults.address),
                phone: std::env::var("STORE_PHONE").unwrap_or(defaults.phone),
            },
        }
    }

    /// Environment-derived config with an explicit database path, for
    /// tests and embedders that manage their own data directory
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: path.into(),
            ..Self::from_env()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
