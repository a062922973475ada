use std::env;

pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5258".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::remove_var("API_BASE_URL");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, "http://localhost:5258");

        // Test custom value
        env::set_var("API_BASE_URL", "https://tasks.example.com");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, "https://tasks.example.com");

        env::remove_var("API_BASE_URL");
    }
}
