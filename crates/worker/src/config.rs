use crate::sources::{genderize, json_placeholder, random_user, ui_names};

/// Endpoints and batch sizes for the external APIs.
///
/// Defaults point at the public services; override via environment
/// variables to run against mirrors or local stubs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub random_user_url: String,
    /// Number of users requested from RandomUser per run.
    pub random_user_results: u32,
    pub ui_names_url: String,
    /// Number of names requested from UINames per run.
    pub ui_names_amount: u32,
    pub json_placeholder_url: String,
    pub genderize_url: String,
}

impl SourceConfig {
    /// Load source configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                                     |
    /// |-----------------------|---------------------------------------------|
    /// | `RANDOMUSER_URL`      | `https://randomuser.me/api/`                |
    /// | `RANDOMUSER_RESULTS`  | `5`                                         |
    /// | `UINAMES_URL`         | `https://uinames.com/api/`                  |
    /// | `UINAMES_AMOUNT`      | `10`                                        |
    /// | `JSONPLACEHOLDER_URL` | `http://jsonplaceholder.typicode.com/users` |
    /// | `GENDERIZE_URL`       | `https://api.genderize.io/`                 |
    ///
    /// # Panics
    ///
    /// Panics if a count variable is set but is not a valid `u32`.
    pub fn from_env() -> Self {
        let random_user_results: u32 = std::env::var("RANDOMUSER_RESULTS")
            .unwrap_or_else(|_| random_user::DEFAULT_RESULTS.to_string())
            .parse()
            .expect("RANDOMUSER_RESULTS must be a valid u32");

        let ui_names_amount: u32 = std::env::var("UINAMES_AMOUNT")
            .unwrap_or_else(|_| ui_names::DEFAULT_AMOUNT.to_string())
            .parse()
            .expect("UINAMES_AMOUNT must be a valid u32");

        Self {
            random_user_url: env_or("RANDOMUSER_URL", random_user::DEFAULT_URL),
            random_user_results,
            ui_names_url: env_or("UINAMES_URL", ui_names::DEFAULT_URL),
            ui_names_amount,
            json_placeholder_url: env_or("JSONPLACEHOLDER_URL", json_placeholder::DEFAULT_URL),
            genderize_url: env_or("GENDERIZE_URL", genderize::DEFAULT_URL),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            random_user_url: random_user::DEFAULT_URL.to_string(),
            random_user_results: random_user::DEFAULT_RESULTS,
            ui_names_url: ui_names::DEFAULT_URL.to_string(),
            ui_names_amount: ui_names::DEFAULT_AMOUNT,
            json_placeholder_url: json_placeholder::DEFAULT_URL.to_string(),
            genderize_url: genderize::DEFAULT_URL.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
