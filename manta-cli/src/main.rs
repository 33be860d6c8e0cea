mod search;
mod sniff;

use anyhow::Result;
use clap::{Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "manta";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Search a database of transcription factor binding sites for those impacted by a list of SNVs.")
        .subcommand_required(true)
        .arg(arg!(-v --verbose "Log debugging information").global(true))
        .subcommand(search::cli::create_search_cli())
        .subcommand(sniff::cli::create_sniff_cli())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // SEARCH
        //
        Some((search::cli::SEARCH_CMD, matches)) => {
            search::handlers::run_search(matches)?;
        }

        //
        // SNIFF
        //
        Some((sniff::cli::SNIFF_CMD, matches)) => {
            sniff::handlers::run_sniff(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_parse_search_args() {
        let matches = build_parser()
            .try_get_matches_from([
                "manta", "search", "-i", "variants.vcf", "-t", "vcf", "-s", "tfbs.jsonl", "-v",
            ])
            .unwrap();
        assert!(matches.get_flag("verbose"));

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, search::cli::SEARCH_CMD);
        assert_eq!(sub.get_one::<String>("input").unwrap(), "variants.vcf");
        assert_eq!(sub.get_one::<String>("filetype").unwrap(), "vcf");
        assert!(sub.get_one::<String>("output").is_none());
    }

    #[rstest]
    fn test_search_requires_input() {
        let result = build_parser().try_get_matches_from(["manta", "search"]);
        assert!(result.is_err());
    }
}
