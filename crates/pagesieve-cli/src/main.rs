mod cli;
mod info_cmd;
mod labels_cmd;
mod select_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Select {
            ref file,
            ref pages,
            parity,
            orientation,
            match_mode,
            ref text,
            ref format,
        } => select_cmd::run(
            file,
            pages.as_deref(),
            parity,
            orientation,
            match_mode,
            text,
            format,
        ),
        cli::Commands::Labels { ref file, ref format } => labels_cmd::run(file, format),
        cli::Commands::Info { ref file, ref format } => info_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
