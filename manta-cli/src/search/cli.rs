use clap::{Command, arg};

pub const SEARCH_CMD: &str = "search";

pub fn create_search_cli() -> Command {
    Command::new(SEARCH_CMD)
        .about("Search the binding site database for TFBSs impacted by the variants of a VCF, BED or GFF file")
        .arg_required_else_help(true)
        .arg(arg!(-i --input <input> "Variant file to search the database with").required(true))
        .arg(arg!(-t --filetype <filetype> "Variant file type, one of vcf, bed, gff or simple. Detected from the file when omitted"))
        .arg(arg!(-o --output <output> "Write the tab separated results here instead of stdout"))
        .arg(arg!(-s --store <store> "Binding site store, JSON lines, possibly gzip'd"))
        .arg(arg!(-c --config <config> "TOML file with search settings"))
}
