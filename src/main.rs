use log::info;

use iri_query::prelude::{ChapmanModel, ElectronDensityModel, Error, ExternalModel, QueryLoop};

mod cli;
use cli::Cli;

fn main() -> Result<(), Error> {
    // logs go to stderr: stdout is the answer channel
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::new();

    let model: Box<dyn ElectronDensityModel> = match cli.external_command() {
        Some((program, args)) => Box::new(ExternalModel::spawn(&program, args.as_slice())?),
        None => Box::new(ChapmanModel::new(cli.chapman_parameters())),
    };

    let mut runner = QueryLoop::new(model, cli.density_unit());

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    let answered = runner.run(stdin, stdout)?;
    info!("terminated after {} request(s)", answered);
    Ok(())
}
