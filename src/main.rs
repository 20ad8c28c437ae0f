use clap::Parser;
use contact_form::terminal::{Terminal, TerminalEvent};
use contact_form::ui::frame_json::view_to_json;
use contact_form::{App, ContactForm, FormConfig, Result, script, testing};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "contact-form", version, about = "Interactive contact form")]
struct Cli {
    /// YAML form configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replay a YAML event script headlessly and print the resulting view as JSON.
    #[arg(long, conflicts_with = "dump")]
    script: Option<PathBuf>,

    /// Print the initial view as JSON and exit.
    #[arg(long)]
    dump: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "contact form failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };
    let form = ContactForm::new(config)?;

    if let Some(path) = &cli.script {
        let steps = script::load(path)?;
        let mut screen = testing::render(form);
        script::run(&mut screen, &steps)?;
        print_json(&view_to_json(&screen.view())?)?;
        return Ok(());
    }

    if cli.dump {
        print_json(&view_to_json(&form.view())?)?;
        return Ok(());
    }

    run_interactive(form)
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_interactive(form: ContactForm) -> Result<()> {
    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.set_line_wrap(false)?;

    let mut app = App::new(form);
    let result = event_loop(&mut app, &mut terminal);

    app.finish(&mut terminal)?;
    terminal.show_cursor()?;
    terminal.set_line_wrap(true)?;
    terminal.exit_raw_mode()?;

    result
}

fn event_loop(app: &mut App, terminal: &mut Terminal) -> Result<()> {
    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    app.handle_key(key_event);
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }

        if app.tick() {
            render_requested = true;
        }

        if app.should_exit() {
            break;
        }

        if render_requested {
            app.render(terminal)?;
            render_requested = false;
        }
    }

    Ok(())
}
