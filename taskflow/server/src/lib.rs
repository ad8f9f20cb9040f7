pub mod config {
    use serde::Deserialize;

    /// Process configuration, read once from environment variables.
    ///
    /// Empty variables count as unset, so every field falls back to its default.
    #[derive(Deserialize, Debug, Clone)]
    pub struct Config {
        #[serde(default = "default_db_host")]
        pub db_host: String,
        #[serde(default = "default_db_port")]
        pub db_port: u16,
        #[serde(default = "default_db_name")]
        pub db_name: String,
        #[serde(default = "default_db_user")]
        pub db_user: String,
        #[serde(default = "default_db_password")]
        pub db_password: String,
        #[serde(default = "default_port")]
        pub port: u16,
        /// Apply the schema migrations at startup instead of assuming a
        /// pre-provisioned `todo` table.
        #[serde(default)]
        pub db_migrate: bool,
    }

    impl Config {
        /// Loads configuration from environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_environment(config::Environment::default())
        }

        fn from_environment(environment: config::Environment) -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(environment.ignore_empty(true))
                .build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }

        /// Connection string for the MySQL store.
        pub fn db_url(&self) -> String {
            format!(
                "mysql://{}:{}@{}:{}/{}",
                self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
            )
        }
    }

    fn default_db_host() -> String {
        "localhost".to_string()
    }

    fn default_db_port() -> u16 {
        3306
    }

    fn default_db_name() -> String {
        "lampdb".to_string()
    }

    fn default_db_user() -> String {
        "root".to_string()
    }

    fn default_db_password() -> String {
        "rootpassword".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

}
pub mod entities;
pub mod task;
pub mod web;
