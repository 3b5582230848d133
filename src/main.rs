//! CLI entry point for `rls-optimize`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use rls_optimize::generator::migration;
use rls_optimize::input::loader;
use rls_optimize::output::writer;
use rls_optimize::MigrationError;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rls-optimize",
    about = "Wrap auth.uid() calls in RLS policies for per-query evaluation and emit the migration"
)]
struct Cli {
    /// JSON export of the policies to rewrite
    #[arg(long, default_value = "unoptimized_policies.json")]
    input: PathBuf,

    /// Migration file to write (overwritten if present)
    #[arg(
        long,
        default_value = "../supabase/migrations/20260126000007_optimize_rls_policies_phase_8_complete.sql"
    )]
    output: PathBuf,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(2);
    }
}

fn run(cli: &Cli) -> Result<(), MigrationError> {
    let policies = loader::load_policies(&cli.input)?;
    println!("Found {} unoptimized policies", policies.len());

    let migration = migration::build_migration(&policies);
    info!(
        policies = migration.policy_count,
        tables = migration.table_count,
        wrapped_calls = migration.wrapped_calls,
        "built migration"
    );

    writer::write_migration(&cli.output, &migration)?;

    println!("Migration generated successfully!");
    println!("Output: {}", cli.output.display());
    println!("Tables: {}", migration.table_count);
    println!("Policies: {}", migration.policy_count);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "rls_optimize=debug"
    } else {
        "rls_optimize=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}
