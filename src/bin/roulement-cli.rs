#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use roulement::{
    io,
    render::{GridRenderer, TextGrid},
    CandidatePicker, Engine, PlanConfig, RandomPicker, Roster,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de roulement hebdomadaire (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Planifier la semaine à partir d'un CSV d'équipe
    Plan {
        /// CSV `name,preferred_shift`
        #[arg(long)]
        csv: String,
        #[arg(long, default_value_t = 2)]
        min_per_shift: usize,
        #[arg(long, default_value_t = 3)]
        max_per_shift: usize,
        #[arg(long, default_value_t = 5)]
        max_days_per_week: u32,
        /// liste "Monday,Tuesday,..." (ordre = ordre de parcours)
        #[arg(long)]
        days: Option<String>,
        /// liste "Morning,Afternoon,..." (ordre = ordre de parcours)
        #[arg(long)]
        shifts: Option<String>,
        /// Graine du tirage aléatoire (exécution reproductible)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Export CSV des créneaux sous-dotés (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Vérifier un CSV d'équipe (noms uniques, préférences connues)
    Check {
        #[arg(long)]
        csv: String,
        /// liste "Morning,Afternoon,..." si différente des créneaux par défaut
        #[arg(long)]
        shifts: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Plan {
            csv,
            min_per_shift,
            max_per_shift,
            max_days_per_week,
            days,
            shifts,
            seed,
            out_json,
            out_csv,
            report,
        } => {
            let workers = io::import_workers_csv(csv)?;
            let mut config = PlanConfig {
                min_per_shift,
                max_per_shift,
                max_days_per_week,
                ..PlanConfig::default()
            };
            if let Some(list) = days {
                config.days = parse_labels(&list);
            }
            if let Some(list) = shifts {
                config.shifts = parse_labels(&list);
            }

            let picker: Box<dyn CandidatePicker> = match seed {
                Some(seed) => Box::new(RandomPicker::seeded(seed)),
                None => Box::new(RandomPicker::from_entropy()),
            };
            let mut engine = Engine::with_picker(config, picker)?;
            let mut roster = Roster::from_workers(workers);
            let outcome = engine.plan(&mut roster)?;

            println!("{}", TextGrid.render(engine.grid()));

            if let Some(path) = out_json {
                io::export_grid_json(path, engine.grid())?;
            }
            if let Some(path) = out_csv {
                io::export_grid_csv(path, engine.grid())?;
            }

            if outcome.fully_staffed() {
                0
            } else {
                eprintln!("Found {} understaffed slot(s)", outcome.shortfalls.len());
                for sf in &outcome.shortfalls {
                    eprintln!("  {} {}: {}/{}", sf.day, sf.shift, sf.staffed, sf.required);
                }
                if let Some(path) = report {
                    // CSV simple
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["day", "shift", "staffed", "required"])?;
                    for sf in &outcome.shortfalls {
                        let staffed = sf.staffed.to_string();
                        let required = sf.required.to_string();
                        w.write_record([
                            sf.day.as_str(),
                            sf.shift.as_str(),
                            staffed.as_str(),
                            required.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Check { csv, shifts } => {
            let workers = io::import_workers_csv(csv)?;
            let mut config = PlanConfig::default();
            if let Some(list) = shifts {
                config.shifts = parse_labels(&list);
            }
            config.validate()?;
            let roster = Roster::from_workers(workers);
            config.check_roster(&roster)?;
            println!("OK: {} worker(s), preferences all known", roster.workers.len());
            0
        }
    };

    std::process::exit(code);
}

fn parse_labels(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
