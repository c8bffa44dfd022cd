use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use ttb_cli::config::{LoadedSettings, Overrides, Settings, load_settings};
use ttb_cli::render::render_view;
use ttb_cli::session::{Flow, Session};
use ttb_editor::validate;
use ttb_submit::{HttpGenerationService, SubmissionController};

use crate::cli::{EditArgs, RunArgs};

/// Settings from the file (or defaults) with command-line overrides applied.
pub fn load(config: Option<&Path>, overrides: Overrides) -> Result<LoadedSettings> {
    let mut loaded = load_settings(config)?;
    loaded.settings.apply(overrides);
    Ok(loaded)
}

pub fn run_config(loaded: &LoadedSettings) -> Result<i32> {
    match &loaded.path {
        Some(path) if loaded.from_file => println!("# Settings file: {}", path.display()),
        Some(path) => println!("# Settings file: {} (not found, using defaults)", path.display()),
        None => println!("# Settings file: unavailable on this platform"),
    }
    print!("{}", loaded.settings.to_toml()?);
    Ok(0)
}

pub fn run_edit(args: &EditArgs, settings: &Settings) -> Result<i32> {
    let mut session = build_session(settings, args.open)?;
    let mut stdout = io::stdout();
    let mut exit_code = 0;

    if let Some(path) = &args.script {
        match replay(&mut session, path, &mut stdout) {
            Ok(Flow::Quit) => return Ok(0),
            Ok(Flow::Continue) => {}
            Err(error) => {
                eprintln!("error: {error:#}");
                exit_code = 1;
            }
        }
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        eprintln!("Type `help` for the list of commands.");
    }
    let mut line = String::new();
    loop {
        if interactive {
            eprint!("> ");
            io::stderr().flush()?;
        }
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        match session.execute_line(&line, &mut stdout) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(error) => eprintln!("error: {error:#}"),
        }
    }
    Ok(exit_code)
}

pub fn run_script(args: &RunArgs, settings: &Settings) -> Result<i32> {
    let mut session = build_session(settings, args.open)?.with_echo(false);
    let mut stdout = io::stdout();

    if let Err(error) = replay(&mut session, &args.script, &mut stdout) {
        eprintln!("error: {error:#}");
        return Ok(1);
    }

    println!("{}", render_view(session.editor().view()));
    if let Err(error) = validate(session.editor().store()) {
        eprintln!("error: {error}");
        return Ok(1);
    }
    println!("Ready to generate.");

    if args.submit {
        if let Err(error) = session.submit(&mut stdout) {
            eprintln!("error: {error:#}");
            return Ok(1);
        }
    }
    Ok(0)
}

fn build_session(settings: &Settings, open: bool) -> Result<Session<HttpGenerationService>> {
    let service = HttpGenerationService::new(
        settings.service.endpoint.clone(),
        settings.service.timeout(),
    )?;
    info!(endpoint = %settings.service.endpoint, "using generation service");
    let controller = SubmissionController::new(service, settings.header.clone());
    Ok(Session::new(controller, settings.service.endpoint.clone()).with_open_browser(open))
}

fn replay(
    session: &mut Session<HttpGenerationService>,
    path: &Path,
    out: &mut impl Write,
) -> Result<Flow> {
    let file =
        File::open(path).with_context(|| format!("failed to open script {}", path.display()))?;
    info!(script = %path.display(), "replaying script");
    session.run_script(&path.display().to_string(), BufReader::new(file), out)
}
