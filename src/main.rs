use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use mandelzoom::{Cli, ImageFilePresenter, ZoomSequenceController};

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.zoom_config()?;
    let presenter = ImageFilePresenter::new(cli.format);
    let controller = ZoomSequenceController::new(presenter, cli.output.clone());

    let summary = controller.run(&config)?;
    info!(
        "Wrote {} frames to {}",
        summary.frames_written,
        controller.output_dir().display()
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("mandelzoom: {}", err);
            ExitCode::FAILURE
        }
    }
}
