//! easy-inputs demo
//!
//! Renders the demonstration page to stdout.

mod page;

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use easy_inputs::{EasyInputs, GroupSpec};

/// Render the easy-inputs demonstration page.
#[derive(Parser)]
#[command(name = "easy-inputs-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Builder name; the root of every generated HTML name.
    #[arg(short, long, default_value = "testing-easy-inputs")]
    name: String,

    /// HTML id of the rendered form.
    #[arg(short, long, default_value = "dah-form")]
    form_id: String,

    /// JSON group declaration to render after the built-in examples.
    #[arg(short, long)]
    group_file: Option<PathBuf>,

    /// Embed placeholder nonce fields.
    #[arg(long)]
    nonces: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn placeholder_nonce(scope: &str) -> String {
    format!(r#"<input type="hidden" name="{scope}" value="demo-nonce" />"#)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let extra = match &cli.group_file {
        Some(path) => {
            info!("Loading group from {}", path.display());
            let json = std::fs::read_to_string(path)?;
            Some(GroupSpec::from_json(&json)?)
        }
        None => None,
    };

    // One builder per render; nothing is shared between requests.
    let mut ei = EasyInputs::new(cli.name);
    if cli.nonces {
        ei = ei.with_issuer(placeholder_nonce);
    }

    let html = page::render_demo_page(&ei, &cli.form_id, extra.as_ref());
    info!("Rendered {} bytes for form {}", html.len(), cli.form_id);
    println!("{html}");

    Ok(())
}
