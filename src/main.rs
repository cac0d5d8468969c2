//! `glimpse` command: open a preview window for a list of images.

use std::path::PathBuf;

use clap::{error::ErrorKind, CommandFactory, Parser};
use glimpse::{options::Options, Viewer};

/// Cursor-following image hover preview.
#[derive(Parser, Debug)]
#[command(name = "glimpse", version, about)]
struct Args {
    /// TOML options file.
    #[arg(short, long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Images in link order. Overrides `images` from the options file.
    images: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let options = match &args.options {
        Some(path) => match Options::load(path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if args.images.is_empty() && options.images.is_empty() {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "no images given on the command line or in the options file",
            )
            .exit();
    }

    let viewer = Viewer::builder()
        .with_options(options)
        .with_images(args.images)
        .build();
    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
