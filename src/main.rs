use clap::{Arg, Command};
use std::process;
use tracing::{error, info};

mod proxy;
mod relay;
mod utils;

use proxy::server::RelayServer;
use relay::handler::{PdfRelayHandler, RelayConfig};
use utils::cors::OriginAllowList;

#[tokio::main]
async fn main() {
    // Parse command line arguments first
    let matches = Command::new("pdf-relay")
        .version("1.0.2")
        .about("A CORS-aware relay that fetches PDF documents server-side")
        .long_about(
            "Reads one proxy event per line from stdin and writes one proxy\n\
            response per line to stdout. Each event names a pdf_url to fetch;\n\
            the body is returned gzip-compressed and base64-encoded unless\n\
            compression is disabled.",
        )
        .arg(
            Arg::new("allow-origin")
                .long("allow-origin")
                .value_name("ORIGIN")
                .help("Origin permitted to call the relay (repeatable; replaces the built-in list)")
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("no-compress")
                .long("no-compress")
                .help("Return the PDF bytes base64-encoded but not gzip-compressed")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("lenient-content-type")
                .long("lenient-content-type")
                .help("Accept upstream content types carrying parameters, e.g. application/pdf; charset=binary")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors (stdout stays reserved for responses)")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Initialize tracing to stderr only (stdout is reserved for the envelope protocol)
    let log_level = if std::env::var("RUST_LOG").is_ok() {
        // Use RUST_LOG if set
        None
    } else if matches.get_flag("quiet") {
        Some("error")
    } else {
        Some("info")
    };

    let subscriber = tracing_subscriber::fmt().with_writer(std::io::stderr);

    if let Some(level) = log_level {
        std::env::set_var("RUST_LOG", level);
    }

    subscriber.init();

    let allowed_origins = match matches.get_many::<String>("allow-origin") {
        Some(origins) => OriginAllowList::new(origins.cloned().collect()),
        None => OriginAllowList::default(),
    };

    let config = RelayConfig {
        allowed_origins,
        compress: !matches.get_flag("no-compress"),
        strict_content_type: !matches.get_flag("lenient-content-type"),
    };

    info!(
        "Relay configured (compress: {}, strict content type: {})",
        config.compress, config.strict_content_type
    );

    let handler = PdfRelayHandler::new(config);
    let mut server = RelayServer::new(handler);
    if let Err(e) = server.start().await {
        error!("Relay terminated with error: {}", e);
        process::exit(1);
    }
}
