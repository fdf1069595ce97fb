use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct Settings {
    pub patterns: Vec<String>,
    pub log_level: log::LevelFilter,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        let Cli { patterns, log_level } = cli;
        Self { patterns, log_level }
    }
}

impl Settings {
    pub fn init_logger(&self) {
        env_logger::builder()
            .format_timestamp(None)
            .format_target(false)
            .filter_level(self.log_level)
            .init();
    }
}
