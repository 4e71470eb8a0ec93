//! lbaas-rule CLI entry point.

use clap::Parser;

use lbaas_rule::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = lbaas_rule::cli::run(cli).await {
        lbaas_rule::cli::handle_error(err, json);
    }
}
