use hexdict::{cli, config};

fn init_tracing() {
    use tracing_subscriber::{
        filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt as _, Registry,
    };

    // Stdout carries warnings and the confirmation only.
    Registry::default()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_timer(fmt::time::ChronoLocal::rfc_3339())
                .with_file(false)
                .with_line_number(false)
                .with_target(true),
        )
        .with(EnvFilter::from_env(config::env::LOG_DIRECTIVE))
        .init();
}

fn main() {
    init_tracing();

    if let Err(err) = cli::parse().run() {
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }
}
