use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use manta_io::determine_file_format;

pub fn run_sniff(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a variant file is required.");

    let result = determine_file_format(Path::new(input))?;

    match result.file_format {
        Some(file_format) => println!("{}", file_format),
        None => println!("unknown"),
    }

    for error in &result.errors {
        eprintln!("{}", error);
    }

    Ok(())
}
