use clap::{Command, arg};

pub const SNIFF_CMD: &str = "sniff";

pub fn create_sniff_cli() -> Command {
    Command::new(SNIFF_CMD)
        .about("Report the format detected for a variant file")
        .arg_required_else_help(true)
        .arg(arg!(-i --input <input> "Variant file to inspect").required(true))
}
