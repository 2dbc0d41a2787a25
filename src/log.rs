use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_logging() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if cfg!(debug_assertions) {
        registry.with(fmt::layer()).init();
    } else {
        registry.with(fmt::layer().json()).init();
    }
}
