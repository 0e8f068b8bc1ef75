use clap::Parser;
use env_logger::Env;
use mandelbrot_explorer::{PpmFilePresenter, StillRenderController, StillRenderOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let options = StillRenderOptions::parse();
    let config = options.explorer_config()?;
    let view = options.view_state(&config)?;
    let viewport = options.view.viewport()?;

    let mut controller = StillRenderController::new(PpmFilePresenter::new());
    controller.generate(&config, &view, viewport)?;
    controller.write(&options.output)?;

    Ok(())
}
