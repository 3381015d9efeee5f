//! devcert CLI application.
//!
//! This binary generates an encrypted RSA server key and a matching
//! self-signed certificate for local TLS testing. Run with no arguments
//! it writes `server-key.pem` and `server-certificate.pem` into the
//! current working directory.

use clap::Parser;
use devcert::error::Result;
use devcert::generator::{generate_into, ORG_NAME, SAN_DNS, VALIDITY_DAYS};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devcert")]
#[command(about = "Generate a self-signed certificate for a local TLS server", long_about = None)]
struct Cli {
    /// Output directory (default: current directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let out_dir = cli.out_dir.unwrap_or_else(|| PathBuf::from("."));

    let paths = generate_into(&out_dir)?;

    println!("✓ Wrote encrypted private key: {}", paths.key.display());
    println!("✓ Wrote self-signed certificate: {}", paths.certificate.display());
    println!("  Subject: O={}", ORG_NAME);
    println!("  SAN: DNS:{}", SAN_DNS);
    println!("  Valid for: {} days", VALIDITY_DAYS);

    Ok(())
}
