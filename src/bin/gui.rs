use clap::Parser;
use env_logger::Env;
use mandelbrot_explorer::{GuiOptions, PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let options = GuiOptions::parse();
    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), options);

    command.execute()?;

    Ok(())
}
