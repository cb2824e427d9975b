use anyhow::Context;
use clap::Parser;
use intake_wizard::cli::{Cli, Cmd};
use intake_wizard::config::Config;
use intake_wizard::intake::INTAKE;
use intake_wizard::notify::TracingNotifier;
use intake_wizard::terminal::{Outcome, TerminalFrontend};
use intake_wizard::transport::Transport;
use intake_wizard::{WizardSession, logging, replay, transport};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.log.filter);

    let output = cli.output.as_deref();

    match cli.cmd {
        Cmd::Schema => {
            println!("{}", serde_json::to_string_pretty(&INTAKE)?);
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Run => {
            let (mut session, mut transport) = prepare(&config, output)?;
            let mut frontend = TerminalFrontend::new(io::stdin().lock(), io::stdout().lock());
            match frontend.run(&mut session, transport.as_mut(), &mut TracingNotifier)? {
                Outcome::Submitted(_) => Ok(ExitCode::SUCCESS),
                Outcome::Abandoned => Ok(ExitCode::from(2)),
            }
        }
        Cmd::Fill { answers } => {
            let (mut session, mut transport) = prepare(&config, output)?;
            let file = File::open(&answers)
                .with_context(|| format!("failed to open {}", answers.display()))?;
            let answers = replay::read_answers(BufReader::new(file))?;
            let record =
                replay::fill(&mut session, answers, transport.as_mut(), &mut TracingNotifier)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn prepare(
    config: &Config,
    output: Option<&Path>,
) -> anyhow::Result<(WizardSession, Box<dyn Transport>)> {
    let transport = transport::from_config(&config.transport, output)
        .context("failed to open submission output")?;
    let session = WizardSession::intake().with_notices(config.notices.clone());
    Ok((session, transport))
}
