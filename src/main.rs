//! shelf-quote - CLI tool to price and send modular shelving quotes.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use shelf_quote::email::QuoteEmail;
use shelf_quote::{
    layout_sides, preview, render_summary, Catalog, EmailConfig, HttpMailTransport, Limits,
    QuoteRequest, QuoteSender, SendOutcome,
};

/// Price, validate and send modular shelving quotes.
#[derive(Parser, Debug)]
#[command(name = "shelf-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Quote request JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Catalog JSON file (builtin catalog when omitted)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Write the summary to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't build the order
    #[arg(long)]
    validate: bool,

    /// Output the priced order as JSON
    #[arg(long)]
    debug: bool,

    /// Output preview geometry of every design as JSON
    #[arg(long)]
    preview: bool,

    /// Send the quote by email
    #[arg(long)]
    send: bool,

    /// Email provider service id
    #[arg(long, env = "SHELF_QUOTE_SERVICE_ID", default_value = "")]
    service_id: String,

    /// Email provider template id
    #[arg(long, env = "SHELF_QUOTE_TEMPLATE_ID", default_value = "")]
    template_id: String,

    /// Email provider public key
    #[arg(long, env = "SHELF_QUOTE_PUBLIC_KEY", default_value = "", hide_env_values = true)]
    public_key: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let limits = Limits::default();

    info!("Processing: {}", args.input.display());

    let request = QuoteRequest::from_json_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    info!("Read {} design(s)", request.designs.len());

    // Validate
    let mut passed = true;
    for (idx, result) in request.validate(&catalog, &limits).iter().enumerate() {
        for warning in &result.warnings {
            warn!("Design {}: {}", idx + 1, warning);
        }
        for err in &result.errors {
            error!("Design {}: {}", idx + 1, err);
        }
        passed &= result.passed;
    }

    if !passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    if args.preview {
        let previews: Vec<_> = request
            .designs
            .iter()
            .map(|d| preview(&layout_sides(&d.draft, &limits)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&previews)?);
    }

    let order = request.build_order(&catalog, &limits)?;

    // Debug output
    if args.debug {
        println!("{}", serde_json::to_string_pretty(&order)?);
        return Ok(());
    }

    let summary = render_summary(&order);
    match &args.output {
        Some(path) => {
            std::fs::write(path, &summary)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => print!("{}", summary),
    }

    if args.send {
        let customer = request
            .customer
            .as_ref()
            .context("Sending requires customer details in the request")?;
        let config = EmailConfig::new(args.service_id, args.template_id, args.public_key);
        let sender = QuoteSender::new(config)?;
        let transport = HttpMailTransport::new()?;
        let email = QuoteEmail::for_order(customer, &order, request.message.clone());

        info!("Sending quote...");
        match sender.send(&transport, &order, &email)? {
            SendOutcome::Sent => info!("Quote sent to {}", customer.email),
            SendOutcome::ProviderError(message) => anyhow::bail!("Quote was not sent: {}", message),
        }
    }

    Ok(())
}
