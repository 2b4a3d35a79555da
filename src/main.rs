use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use steply_datepicker::{DatePicker, PickerConfig, PointerTarget, codec, snapshot};
use tracing_subscriber::EnvFilter;

/// Drive a date picker from stdin, one command per line, printing the view
/// as JSON after each command.
///
/// Commands: `type <text>`, `pick <YYYY-MM-DD>`, `toggle`, `outside`,
/// `inside`, `prev`, `next`, `show`.
#[derive(Debug, Parser)]
#[command(name = "datepicker-demo")]
struct Args {
    /// YAML picker config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial value; overrides the config's.
    #[arg(long)]
    value: Option<String>,

    /// Hidden-field name; overrides the config's.
    #[arg(long)]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => PickerConfig::from_path(path)?,
        None => PickerConfig::default(),
    };
    if args.value.is_some() {
        config.value = args.value;
    }
    if args.name.is_some() {
        config.name = args.name;
    }

    let mut picker = DatePicker::from_config(&config)
        .with_on_change(|value| tracing::info!(value, "change"));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", snapshot::picker_to_json(&picker))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        match command.trim() {
            "type" => picker.on_text_input(rest),
            "pick" => match codec::from_storage(rest) {
                Ok(date) => picker.on_day_selected(date),
                Err(err) => {
                    eprintln!("pick: {err}");
                    continue;
                }
            },
            "toggle" => picker.on_toggle_open(),
            "outside" => picker.on_pointer(PointerTarget::Outside),
            "inside" => picker.on_pointer(PointerTarget::Inside),
            "prev" => picker.on_navigate_previous_month(),
            "next" => picker.on_navigate_next_month(),
            "show" | "" => {}
            other => {
                eprintln!("unknown command `{other}`");
                continue;
            }
        }
        writeln!(out, "{}", snapshot::picker_to_json(&picker))?;
    }

    Ok(())
}
