use std::fmt;
use std::io::{self, BufRead, Write};

use academy_core::highlight::highlight;
use academy_core::model::{OPTION_COUNT, QuestionBank, TopicSelector};
use services::{AppServices, Clock, QuizLoopService, QuizState};

const OPTION_LABELS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingFile,
    UnknownArg(String),
    InvalidTopic { raw: String },
    InvalidSeed { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingFile => write!(f, "highlight requires a file path"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTopic { raw } => {
                write!(f, "invalid --topic value: {raw} (expected python, ml or mix)")
            }
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    eprintln!(
        "  cargo run -p app -- quiz      [--db <sqlite_url>] [--bank <path.json>] [--topic python|ml|mix] [--seed <u64>]"
    );
    eprintln!("  cargo run -p app -- best      [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- theme     [--db <sqlite_url>]  # toggles light/dark");
    eprintln!("  cargo run -p app -- highlight <file>");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://academy.sqlite3");
    eprintln!("  --topic mix");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ACADEMY_DB_URL, ACADEMY_BANK, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quiz,
    Best,
    Theme,
    Highlight,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "quiz" => Some(Self::Quiz),
            "best" => Some(Self::Best),
            "theme" => Some(Self::Theme),
            "highlight" => Some(Self::Highlight),
            _ => None,
        }
    }
}

struct Args {
    db_url: String,
    bank_path: Option<String>,
    topic: TopicSelector,
    seed: Option<u64>,
    file: Option<String>,
}

impl Args {
    fn parse(cmd: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            db_url: std::env::var("ACADEMY_DB_URL")
                .ok()
                .map_or_else(|| "sqlite://academy.sqlite3".into(), normalize_sqlite_url),
            bank_path: std::env::var("ACADEMY_BANK").ok(),
            topic: TopicSelector::Mixed,
            seed: None,
            file: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    parsed.db_url = normalize_sqlite_url(value);
                }
                "--bank" if cmd == Command::Quiz => {
                    parsed.bank_path = Some(require_value(args, "--bank")?);
                }
                "--topic" if cmd == Command::Quiz => {
                    let value = require_value(args, "--topic")?;
                    parsed.topic = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidTopic { raw: value.clone() })?;
                }
                "--seed" if cmd == Command::Quiz => {
                    let value = require_value(args, "--seed")?;
                    let seed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    parsed.seed = Some(seed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ if cmd == Command::Highlight && parsed.file.is_none() => {
                    parsed.file = Some(arg);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if cmd == Command::Highlight && parsed.file.is_none() {
            return Err(ArgsError::MissingFile);
        }
        Ok(parsed)
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
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
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

fn load_bank(path: Option<&str>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(QuestionBank::builtin());
    };
    let raw = std::fs::read_to_string(path)?;
    let bank = QuestionBank::from_json(&raw)?;
    tracing::info!(path, "loaded question bank");
    Ok(bank)
}

/// `1`-`4` or `a`-`d`, case-insensitive.
fn parse_choice(input: &str) -> Option<usize> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return (1..=OPTION_COUNT).contains(&n).then(|| n - 1);
    }
    let mut chars = input.chars();
    let c = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    OPTION_LABELS.iter().position(|label| *label == c)
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Option<String>> {
    io::stdout().flush()?;
    lines.next().transpose()
}

async fn run_quiz(
    quiz: &mut QuizLoopService,
    topic: TopicSelector,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    quiz.start(topic)?;
    println!("{} quiz\n", topic.title());

    while quiz.state() != QuizState::Completed {
        let view = quiz.current_question_view()?;
        if let Some(label) = quiz.progress_label() {
            println!("[{label}]");
        }
        println!("{}", view.prompt);
        for (label, option) in OPTION_LABELS.iter().zip(view.options.iter()) {
            println!("  {label}) {option}");
        }

        let choice = loop {
            print!("> ");
            let Some(line) = read_line(&mut lines)? else {
                println!();
                return Ok(());
            };
            match parse_choice(&line) {
                Some(choice) => break choice,
                None => println!("answer with 1-4 or A-D"),
            }
        };

        let feedback = quiz.submit_answer(choice)?;
        if feedback.correct {
            println!("correct!");
        } else {
            println!(
                "wrong, the answer is {}) {}",
                OPTION_LABELS[feedback.correct_index], view.options[feedback.correct_index]
            );
        }
        println!("{}\n", feedback.explanation);

        quiz.advance().await?;
    }

    if let Some(result) = quiz.result_view() {
        println!("score: {} / {} ({})", result.score, result.total, result.percent);
        println!("{}", result.tier_message);
        match result.best {
            Some(_) if result.is_new_best => println!("new best score!"),
            Some(best) => println!("best score: {best}"),
            None => println!("best score unavailable"),
        }
    }

    let missed = quiz.missed_questions();
    if !missed.is_empty() {
        println!("\nreview:");
        for item in missed {
            println!("- {}", item.prompt);
            println!("  answer: {}", item.correct_option);
            println!("  {}", item.explanation);
        }
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Quiz,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Quiz,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    let mut iter = argv.into_iter().peekable();
    if iter.peek().is_some_and(|first| !first.starts_with("--")) {
        iter.next();
    }

    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if cmd == Command::Highlight {
        let path = parsed.file.as_deref().ok_or(ArgsError::MissingFile)?;
        let source = std::fs::read_to_string(path)?;
        println!("{}", highlight(&source));
        return Ok(());
    }

    // Open + migrate SQLite at startup; services only see the key-value trait.
    prepare_sqlite_file(&parsed.db_url)?;
    let bank = load_bank(parsed.bank_path.as_deref())?;
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::system(), bank).await?;

    match cmd {
        Command::Quiz => {
            let mut quiz = services.quiz_loop();
            if let Some(seed) = parsed.seed {
                quiz = quiz.with_seed(seed);
            }
            run_quiz(&mut quiz, parsed.topic).await
        }
        Command::Best => {
            match services.scores().best().await? {
                Some(best) => println!("best score: {best}"),
                None => println!("no quiz completed yet"),
            }
            Ok(())
        }
        Command::Theme => {
            let theme = services.theme();
            let next = theme.toggle(theme.load().await).await;
            println!("{} {next}", next.icon());
            Ok(())
        }
        Command::Highlight => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_accept_numbers_and_letters() {
        assert_eq!(parse_choice("1"), Some(0));
        assert_eq!(parse_choice(" 4 "), Some(3));
        assert_eq!(parse_choice("b"), Some(1));
        assert_eq!(parse_choice("D"), Some(3));
        assert_eq!(parse_choice("5"), None);
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("ab"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn sqlite_urls_are_normalized() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/a.sqlite3".into()),
            "sqlite:///tmp/a.sqlite3"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:/tmp/b.sqlite3".into()),
            "sqlite:///tmp/b.sqlite3"
        );
    }

    #[test]
    fn quiz_args_parse_topic_and_seed() {
        let mut args = ["--topic", "ml", "--seed", "9", "--db", "sqlite::memory:"]
            .into_iter()
            .map(String::from);
        let parsed = Args::parse(Command::Quiz, &mut args).unwrap();
        assert_eq!(parsed.topic.key(), "ml");
        assert_eq!(parsed.seed, Some(9));
        assert_eq!(parsed.db_url, "sqlite::memory:");
    }

    #[test]
    fn highlight_requires_a_file() {
        let mut args = std::iter::empty::<String>();
        assert!(matches!(
            Args::parse(Command::Highlight, &mut args),
            Err(ArgsError::MissingFile)
        ));
    }

    #[test]
    fn quiz_flags_are_rejected_for_other_commands() {
        let mut args = ["--topic", "ml"].into_iter().map(String::from);
        assert!(matches!(
            Args::parse(Command::Best, &mut args),
            Err(ArgsError::UnknownArg(arg)) if arg == "--topic"
        ));
    }
}
