use cgol_core::config::SimConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub sim: SimConfig,
    pub log_level: log::Level,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            log_level: log::Level::Info,
        }
    }
}
