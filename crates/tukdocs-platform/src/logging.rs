/// Installs the logger for the current platform. Safe to call twice.
///
/// Desktop logs go to stderr through `env_logger` (`RUST_LOG` applies,
/// default `info`); Android logs go to logcat.
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Trace)
                .with_tag("tukdocs"),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        if env_logger::Builder::from_env(env).try_init().is_err() {
            log::debug!("logger already installed");
        }
    }
}
