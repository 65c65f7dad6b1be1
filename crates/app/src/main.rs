use std::fmt;
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use capitals_core::data;
use capitals_core::model::{Dataset, QuizSettings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{Clock, GuessResult, QuizService, QuizView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidPacing { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidPacing { raw } => write!(f, "invalid --pacing-ms value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--dataset <path>] [--pacing-ms <ms>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:capitals.sqlite3");
    eprintln!("  --dataset <built-in world list>");
    eprintln!("  --pacing-ms 1000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, QUIZ_DATASET, QUIZ_PACING_MS, RUST_LOG");
    eprintln!();
    eprintln!("While playing: 1-4 or a city name to guess, `reset`, `quit`.");
}

struct Args {
    db_url: String,
    dataset: Option<PathBuf>,
    pacing: Duration,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = normalize_sqlite_url(
            std::env::var("QUIZ_DB_URL").unwrap_or_else(|_| "sqlite:capitals.sqlite3".into()),
        );
        let mut dataset = std::env::var("QUIZ_DATASET").ok().map(PathBuf::from);
        let mut pacing = std::env::var("QUIZ_PACING_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(services::DEFAULT_PACING, Duration::from_millis);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--dataset" => {
                    dataset = Some(PathBuf::from(require_value(args, "--dataset")?));
                }
                "--pacing-ms" => {
                    let value = require_value(args, "--pacing-ms")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidPacing { raw: value.clone() })?;
                    pacing = Duration::from_millis(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            dataset,
            pacing,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_dataset(path: Option<&PathBuf>) -> Result<Dataset, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(data::world());
    };
    let json = std::fs::read_to_string(path)?;
    let dataset = Dataset::from_json(&json).map_err(capitals_core::Error::from)?;
    tracing::info!(path = %path.display(), countries = dataset.len(), "loaded dataset");
    Ok(dataset)
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Guess(String),
    Reset,
    Quit,
    Empty,
}

impl Input {
    /// Numbers pick an option by position; anything else is taken as a city name.
    fn parse(line: &str, options: &[String]) -> Self {
        let line = line.trim();
        match line {
            "" => Self::Empty,
            "reset" => Self::Reset,
            "quit" | "q" | "exit" => Self::Quit,
            _ => line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i))
                .map_or_else(|| Self::Guess(line.to_owned()), |o| Self::Guess(o.clone())),
        }
    }
}

fn render(view: &QuizView) {
    println!();
    println!(
        "{} (knowledge points: {})",
        view.question.prompt(),
        view.current_country_points
    );
    for (i, option) in view.question.options().iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }
    println!(
        "Mastered: {}/{}  (mastery at {} points)",
        view.mastered_count,
        view.active_countries.len(),
        view.mastery_threshold
    );
    for standing in &view.active_countries {
        let mark = if standing.mastered { "*" } else { " " };
        println!("  {mark} {:<32} {}", standing.country, standing.points);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv)?;

    prepare_sqlite_file(&args.db_url)?;
    let dataset = load_dataset(args.dataset.as_ref())?;

    let mut service = QuizService::open_sqlite(
        &args.db_url,
        dataset,
        QuizSettings::default(),
        Clock::default(),
        Box::new(StdRng::from_os_rng()),
    )
    .await?
    .with_pacing(args.pacing);

    println!("Capital City Guesser: test your knowledge of world capitals!");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut show_question = true;

    loop {
        let view = service.view();
        if show_question {
            render(&view);
        }
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        show_question = false;

        match Input::parse(&line, view.question.options()) {
            Input::Empty => {}
            Input::Quit => break,
            Input::Reset => {
                service.reset_all_progress().await?;
                println!("All progress cleared.");
                show_question = true;
            }
            Input::Guess(option) => match service.submit_guess(&option).await {
                GuessResult::Ignored => {}
                GuessResult::Answered(feedback) if feedback.correct => {
                    println!("Correct! ({} points)", feedback.points);
                    if !feedback.saved {
                        println!("(progress not saved yet, retrying on the next answer)");
                    }
                    if let Some(notice) = &feedback.expansion {
                        println!(
                            "Great job! New countries unlocked: {}",
                            notice.added.join(", ")
                        );
                    }
                    if let Some(ticket) = feedback.advance {
                        let ticket = ticket.wait().await;
                        service.advance(ticket)?;
                    }
                    show_question = true;
                }
                GuessResult::Answered(feedback) => {
                    println!("Not quite, try again. ({} points)", feedback.points);
                    if !feedback.saved {
                        println!("(progress not saved yet, retrying on the next answer)");
                    }
                }
            },
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
