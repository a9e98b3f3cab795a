use homedash::cli::Cli;
use homedash::config::{self, Settings};
use homedash::core::network::StatusRenderer;
use homedash::core::Dashboard;

#[cfg(feature = "network-probing")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    main_impl().await
}

#[cfg(not(feature = "network-probing"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    futures::executor::block_on(main_impl())
}

async fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    let mut settings = Settings::load(cli.config.clone()).unwrap_or_else(|err| {
        eprintln!("Warning: {}; using default settings", err);
        Settings::default()
    });

    if let Some(timeout_ms) = cli.timeout_ms {
        settings.timeout_ms = timeout_ms;
    }
    if let Some(retries) = cli.retries {
        settings.max_retries = retries;
    }

    let services_path = match cli.services {
        Some(path) => path,
        None => config::default_services_path()?,
    };
    let services = config::load_services_or_default(&services_path);

    let dashboard = Dashboard::new(settings, services)?;
    let renderer = StatusRenderer::new();

    if cli.list_networks {
        let available = dashboard.resolve_networks().await;
        println!("{}", renderer.render_networks(&available));
        return Ok(());
    }

    let view = dashboard.run(cli.network).await;
    println!("{}", renderer.render(&view));

    Ok(())
}
