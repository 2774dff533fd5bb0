use gamecolor::errors::Result;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    #[cfg(feature = "cli")]
    {
        use clap::Parser;
        use gamecolor::cli;

        let cli = cli::Cli::parse();

        let subscriber = FmtSubscriber::builder()
            .with_max_level(cli.log_level)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let stdout = std::io::stdout();
        cli::run(cli, &mut stdout.lock())?;
    }

    #[cfg(not(feature = "cli"))]
    {
        use gamecolor::{config::Config, ColorResolver};

        let subscriber = FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        // Resolve the first argument, if any
        let label = std::env::args().nth(1);
        let resolver = ColorResolver::new(Config::load(None));
        println!("{}", resolver.resolve(label.as_deref()));
    }

    Ok(())
}
