/*!
  Binary for the CLI of the operator algebra: alg
*/

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod cli;
pub mod error;

use clap::Parser;
use cli::CliApp;
use colored::Colorize;
use error::CliError;

use algebra::{
    algebra_physical::{management::storage::MemoryStorage, operations::PhysicalOperator},
    api::{load, translate_with},
    execution::TranslationParameters,
    io::import_group_file,
    GroupId,
};

fn run(cli: CliApp) -> Result<(), CliError> {
    log::info!("Reading plan ...");

    let plan = load(&cli.plan)?;

    if cli.translation.print_logical {
        match &plan {
            Some(plan) => println!("{plan}"),
            None => println!("(empty plan)"),
        }
    }

    let mut parameters = TranslationParameters::default();
    parameters.set_max_depth(cli.translation.max_depth);

    log::info!("Translating plan ...");
    let physical = translate_with(plan.as_ref(), parameters)?;
    log::info!("Plan translated");

    if !cli.execution.execute {
        println!("{physical}");
        return Ok(());
    }

    log::info!("{physical}");

    let mut storage = MemoryStorage::new();
    for source in &cli.execution.groups {
        import_group_file(&mut storage, GroupId::new(source.name.clone()), &source.file)?;
    }

    let mut count = 0usize;
    for row in physical.cursor(&storage)? {
        println!("{}", serde_json::to_string(&row?)?);
        count += 1;
    }

    log::info!("Execution produced {count} rows");

    Ok(())
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Plan file: {:?}", cli.plan);

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
