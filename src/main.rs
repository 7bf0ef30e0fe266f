use std::path::PathBuf;

use asmrepl::{
    assembler::AssemblerConfig,
    repl::{Session, SessionConfig},
};
use clap::Parser;
use target_lexicon::Triple;

/// asmrepl is an interactive assembler: type an instruction, get its
/// encoding.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Target triple to assemble for. Defaults to the host.
    #[arg(short, long)]
    triple: Option<Triple>,

    /// CPU model within the target.
    #[arg(short, long, default_value = "generic")]
    cpu: String,

    /// Disables colored output.
    #[arg(long)]
    no_color: bool,

    /// Skips the banner.
    #[arg(short, long)]
    quiet: bool,

    /// Scripts to run, in order, before the interactive prompt.
    scripts: Vec<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let triple = args.triple.unwrap_or_else(Triple::host);
    let config = SessionConfig { assembler: AssemblerConfig::new(triple, args.cpu),
                                 scripts:   args.scripts,
                                 use_color: !args.no_color,
                                 quiet:     args.quiet, };

    let result = Session::interactive(config).and_then(|mut session| session.run());
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
