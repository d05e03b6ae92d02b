use anyhow::{Context, Result};
use caesar_shift::cipher::{transform, Mode};
use caesar_shift::clipboard::copy_to_clipboard;
use caesar_shift::session::{summary_line, Rendered, Session};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// caesar-shift - interactive Caesar cipher utility
///
/// Shifts ASCII letters by a fixed amount, preserving case and leaving
/// everything else untouched. Not secure; not meant to be.
#[derive(Parser)]
#[command(name = "caesar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with the configured shift
    Encrypt {
        /// Text to transform (reads stdin when omitted)
        text: Option<String>,

        /// Shift amount (any sign or magnitude, reduced modulo 26)
        #[arg(long, short, default_value_t = 0, allow_hyphen_values = true)]
        shift: i32,

        /// Copy the output to the system clipboard
        #[arg(long, default_value_t = false)]
        copy: bool,
    },

    /// Decrypt text (applies the negated shift)
    Decrypt {
        /// Text to transform (reads stdin when omitted)
        text: Option<String>,

        /// Shift amount the text was encrypted with
        #[arg(long, short, default_value_t = 0, allow_hyphen_values = true)]
        shift: i32,

        /// Copy the output to the system clipboard
        #[arg(long, default_value_t = false)]
        copy: bool,
    },

    /// Start a live session: type text, tweak shift and mode, see output
    Interactive,

    /// View or update persisted defaults for interactive sessions
    Config {
        /// Print current settings without changing anything
        #[arg(
            long,
            default_value_t = false,
            conflicts_with_all = ["default_shift", "default_mode", "live"]
        )]
        show: bool,

        /// Default shift for new sessions
        #[arg(long, allow_hyphen_values = true)]
        default_shift: Option<i32>,

        /// Default mode for new sessions (encrypt or decrypt)
        #[arg(long)]
        default_mode: Option<Mode>,

        /// Whether new sessions start with live update on
        #[arg(long)]
        live: Option<bool>,
    },

    /// Show version information
    Version,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct Settings {
    default_shift: i32,
    default_mode: Mode,
    live_update: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_shift: 3,
            default_mode: Mode::Encrypt,
            live_update: true,
        }
    }
}

impl Settings {
    fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {:?}", path))?;
            serde_yaml::from_str(&content).context("Failed to parse settings")
        } else {
            Ok(Self::default())
        }
    }

    fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("caesar-shift").join("settings.yaml"))
    }
}

/// Run a one-shot transform: text from the argument or stdin, output on
/// stdout, parameter summary on stderr so the output stays pipeable.
fn handle_transform(text: Option<String>, shift: i32, mode: Mode, copy: bool) -> Result<()> {
    let from_stdin = text.is_none();
    let input = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let output = transform(&input, mode.effective_shift(shift));

    if from_stdin {
        // Stdin input carries its own trailing newline (or lack of one).
        print!("{}", output);
        io::stdout().flush()?;
    } else {
        println!("{}", output);
    }
    eprintln!("{}", summary_line(shift, mode));

    if copy {
        export_to_clipboard(&output);
    }

    Ok(())
}

/// Clipboard export with the original's guard against copying nothing.
/// Failures downgrade to a warning so headless runs still succeed.
fn export_to_clipboard(output: &str) {
    if output.is_empty() {
        eprintln!("Nothing to copy.");
        return;
    }
    match copy_to_clipboard(output) {
        Ok(()) => eprintln!("✓ Copied to clipboard"),
        Err(e) => eprintln!("Warning: {:#}", e),
    }
}

fn handle_config(
    default_shift: Option<i32>,
    default_mode: Option<Mode>,
    live: Option<bool>,
) -> Result<()> {
    let mut settings = Settings::load()?;

    // clap rejects --show combined with any setter, so a setter here
    // always means a write.
    let changed = default_shift.is_some() || default_mode.is_some() || live.is_some();

    if changed {
        if let Some(shift) = default_shift {
            settings.default_shift = shift;
        }
        if let Some(mode) = default_mode {
            settings.default_mode = mode;
        }
        if let Some(live) = live {
            settings.live_update = live;
        }
        settings.save()?;
        println!("✓ Settings saved");
    }

    println!("Default shift: {}", settings.default_shift);
    println!("Default mode: {}", settings.default_mode);
    println!(
        "Live update: {}",
        if settings.live_update { "on" } else { "off" }
    );

    Ok(())
}

fn print_rendered(rendered: &Rendered) {
    println!("{}", rendered.output);
    println!("  {}", rendered.summary);
}

fn print_session_help() {
    println!("Commands:");
    println!("  <text>      set the input text");
    println!("  :shift N    set the shift (invalid values fall back to 0)");
    println!("  :+  :-      step the shift up or down");
    println!("  :mode       toggle between Encrypt and Decrypt");
    println!("  :live       toggle live update");
    println!("  :run        re-run the transform now");
    println!("  :copy       copy the last output to the clipboard");
    println!("  :help       show this help");
    println!("  :quit       exit");
}

fn handle_interactive() -> Result<()> {
    let settings = Settings::load()?;
    let mut session = Session::new(
        settings.default_shift,
        settings.default_mode,
        settings.live_update,
    );

    println!("caesar-shift interactive session (:help for commands, :quit to exit)");

    // Populate the default example once on startup.
    let initial = session.render();
    let mut last_output = initial.output.clone();
    print_rendered(&initial);

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim_end_matches(['\n', '\r']);

        let rendered = match entry.strip_prefix(':') {
            None => session.set_input(entry),
            Some(command) => {
                let mut parts = command.split_whitespace();
                match parts.next().unwrap_or("") {
                    "shift" => {
                        // Missing or unparseable values coerce to zero.
                        let raw = parts.next().unwrap_or("0");
                        let shift = raw.parse::<i32>().unwrap_or_else(|_| {
                            println!("Invalid shift {:?}, using 0", raw);
                            0
                        });
                        session.set_shift(shift)
                    }
                    "+" => Some(session.nudge_shift(1)),
                    "-" => Some(session.nudge_shift(-1)),
                    "mode" => session.toggle_mode(),
                    "live" => {
                        let rendered = session.toggle_live();
                        println!(
                            "Live update {}",
                            if session.live_update() { "on" } else { "off" }
                        );
                        rendered
                    }
                    "run" => Some(session.render()),
                    "copy" => {
                        export_to_clipboard(&last_output);
                        None
                    }
                    "help" => {
                        print_session_help();
                        None
                    }
                    "quit" | "q" => break,
                    other => {
                        println!("Unknown command :{} (try :help)", other);
                        None
                    }
                }
            }
        };

        if let Some(rendered) = rendered {
            last_output = rendered.output.clone();
            print_rendered(&rendered);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt { text, shift, copy } => {
            handle_transform(text, shift, Mode::Encrypt, copy)
        }
        Commands::Decrypt { text, shift, copy } => {
            handle_transform(text, shift, Mode::Decrypt, copy)
        }
        Commands::Interactive => handle_interactive(),
        Commands::Config {
            show: _,
            default_shift,
            default_mode,
            live,
        } => handle_config(default_shift, default_mode, live),
        Commands::Version => {
            println!("caesar-shift {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
