#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use releve::{
    io,
    model::{OverrideEntry, TimeWindow},
    render::{EntryRenderer, TextRenderer},
    scheduler::{check_timeline, MergeOptions, OverridePrecedence, Scheduler, ViolationKind},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planning d'astreinte tournant (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct Inputs {
    /// Fichier JSON de rotation
    #[arg(long)]
    schedule: String,
    /// Fichier JSON de surcharges (optionnel)
    #[arg(long)]
    overrides: Option<String>,
    /// En cas de surcharges qui se chevauchent, la première garde la main
    #[arg(long)]
    earliest_wins: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculer le planning final sur [from, until)
    Render {
        #[command(flatten)]
        inputs: Inputs,
        /// RFC3339 UTC
        #[arg(long)]
        from: String,
        /// RFC3339 UTC
        #[arg(long)]
        until: String,
        /// Fichier JSON de sortie
        #[arg(long, default_value = "output.json")]
        out: String,
        /// Export CSV (optionnel)
        #[arg(long)]
        csv: Option<String>,
        /// Affiche un tableau texte au lieu du JSON
        #[arg(long)]
        text: bool,
    },

    /// Vérifier une frise existante (tri, chevauchements, trous)
    Check {
        #[arg(long)]
        entries: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        until: String,
    },

    /// Qui est d'astreinte à un instant donné
    Who {
        #[command(flatten)]
        inputs: Inputs,
        /// RFC3339 UTC
        #[arg(long)]
        at: String,
    },
}

impl Inputs {
    fn load(&self) -> Result<(Scheduler, Vec<OverrideEntry>, MergeOptions)> {
        let policy = io::load_policy(&self.schedule)?;
        let overrides = match &self.overrides {
            Some(path) => io::load_overrides(path)?,
            None => Vec::new(),
        };
        let scheduler = Scheduler::new(policy).context("invalid schedule")?;
        let opts = MergeOptions {
            precedence: if self.earliest_wins {
                OverridePrecedence::EarliestWins
            } else {
                OverridePrecedence::LatestWins
            },
        };
        Ok((scheduler, overrides, opts))
    }
}

fn parse_window(from: &str, until: &str) -> Result<TimeWindow> {
    let from = io::parse_instant(from).context("--from")?;
    let until = io::parse_instant(until).context("--until")?;
    Ok(TimeWindow::new(from, until)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Render {
            inputs,
            from,
            until,
            out,
            csv,
            text,
        } => {
            let window = parse_window(&from, &until)?;
            let (scheduler, overrides, opts) = inputs.load()?;
            let entries = scheduler.render(&window, &overrides, opts)?;

            io::write_entries_json(&out, &entries)?;
            if let Some(path) = csv {
                export_csv(&path, &entries)?;
            }
            if text {
                print!("{}", TextRenderer.render(&entries));
            } else {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            0
        }
        Commands::Check {
            entries,
            from,
            until,
        } => {
            let window = parse_window(&from, &until)?;
            let entries = io::load_entries(&entries)?;
            let violations = check_timeline(&entries, &window);
            if violations.is_empty() {
                println!("OK: {} entries cover the window", entries.len());
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                for v in &violations {
                    let kind = match v.kind {
                        ViolationKind::Unsorted => "unsorted",
                        ViolationKind::Overlap => "overlap",
                        ViolationKind::Gap => "gap",
                        ViolationKind::OutOfWindow => "out-of-window",
                        ViolationKind::Empty => "empty",
                    };
                    eprintln!("{kind} at entry {} ({})", v.index, v.at.to_rfc3339());
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Who { inputs, at } => {
            let at = io::parse_instant(&at).context("--at")?;
            let (scheduler, overrides, opts) = inputs.load()?;
            let entry = scheduler.on_call_at(at, &overrides, opts)?;
            println!("{}", entry.user);
            0
        }
    };

    std::process::exit(code);
}

#[cfg(feature = "csv")]
fn export_csv(path: &str, entries: &[releve::ScheduleEntry]) -> Result<()> {
    io::export_entries_csv(path, entries)
}

#[cfg(not(feature = "csv"))]
fn export_csv(_path: &str, _entries: &[releve::ScheduleEntry]) -> Result<()> {
    anyhow::bail!("CSV export requires the `csv` feature")
}
