use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use log::debug;

use manta_io::{STDOUT_PATH, write_snv_impacts};
use manta_search::{InMemoryTfbsStore, SearchConfig, SearchRequest};

pub fn run_search(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a variant file is required.");

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => SearchConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to read config file: {}", path))?,
        None => SearchConfig::default(),
    };

    // command line wins over the config file
    if let Some(store) = matches.get_one::<String>("store") {
        config.store = Some(PathBuf::from(store));
    }
    if let Some(output) = matches.get_one::<String>("output") {
        config.output = Some(PathBuf::from(output));
    }

    let store_path = config
        .store
        .clone()
        .ok_or_else(|| anyhow!("No binding site store given. Use --store or set `store` in the config file."))?;

    let store = InMemoryTfbsStore::try_from(store_path.as_path())
        .with_context(|| format!("Failed to load binding site store: {}", store_path.display()))?;

    debug!("Searching {} against {}", input, store_path.display());
    let request = SearchRequest::new(input, matches.get_one::<String>("filetype").cloned());

    let report = match request.run(&store, &config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{}", err);
            for detail in err.details() {
                eprintln!("{}", detail);
            }
            return Err(anyhow!("Please fix the input file and/or explicitly specify the file type using the -t option"));
        }
    };

    let output = config.output.as_deref();
    write_snv_impacts(output, &report.snv_impacts).context("Failed to write SNV impact results")?;

    if !report.warnings.is_empty() {
        eprintln!("\nProblems were detected while searching the MANTA2 database:");
        for warning in &report.warnings {
            eprintln!("\n{}", warning);
        }
    }

    if let Some(output) = output.filter(|o| *o != Path::new(STDOUT_PATH)) {
        eprintln!("\nSNV impact results written to file {}.", output.display());
    }

    Ok(())
}
