use clap::Parser;
use dns_relay_application::use_cases::RelayQueryUseCase;
use dns_relay_domain::CliOverrides;
use dns_relay_infrastructure::dns::{RelayServer, UdpUpstreamClient};
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "dns-relay")]
#[command(version)]
#[command(about = "DNS relay that splits multi-question queries across an upstream resolver")]
struct Cli {
    /// Upstream resolver address (ip:port)
    #[arg(short = 'r', long, value_name = "ADDR")]
    resolver: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Listening port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        resolver: Some(cli.resolver),
        bind_address: cli.bind,
        port: cli.port,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting DNS relay v{}", env!("CARGO_PKG_VERSION"));

    let resolver = config.upstream.resolver_addr()?;
    let listen_addr = config.server.listen_addr()?;

    let upstream = UdpUpstreamClient::new(resolver)
        .with_timeout(config.upstream.timeout())
        .with_max_response_size(config.server.max_datagram_size);

    let use_case = RelayQueryUseCase::new(Arc::new(upstream))
        .with_fan_out(config.relay.fan_out)
        .with_answer_names(config.relay.answer_names);

    let server = RelayServer::bind(listen_addr, Arc::new(use_case))
        .await?
        .with_servfail_on_error(config.relay.servfail_on_error)
        .with_max_datagram_size(config.server.max_datagram_size);

    info!(
        resolver = %resolver,
        fan_out = config.relay.fan_out.as_str(),
        answer_names = config.relay.answer_names.as_str(),
        timeout_ms = config.upstream.timeout_ms,
        "Relay configured"
    );

    tokio::select! {
        result = server.run() => {
            if let Err(e) = &result {
                error!(error = %e, "DNS relay stopped");
            }
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Relay shutdown complete");
    Ok(())
}
