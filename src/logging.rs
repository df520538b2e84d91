use env_logger::Env;
use log::LevelFilter;

/// Environment variable whose filter directives replace the CLI level.
pub const LOG_ENV: &str = "INDIC_EVAL_LOG";

pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.format_timestamp_millis();
    builder.filter_level(level);
    builder.parse_env(Env::new().filter(LOG_ENV));
    let _ = builder.try_init();
}
