use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use gitsim::areas::session::{Session, Submission};
use gitsim::artifacts::command::result::CommandResult;
use gitsim::artifacts::core::page_or_print;
use gitsim::commands::reference;
use gitsim::config::SessionConfig;
use is_terminal::IsTerminal;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";
const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

#[derive(Parser)]
#[command(
    name = "gitsim",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A Git command simulator for learning",
    long_about = "This is a Git command simulator, written in Rust. \
    It keeps a fictitious repository in memory and answers Git commands the way \
    Git would, together with a short explanation of what happened. \
    Nothing on disk is ever touched.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SessionArgs {
    #[arg(long, global = true, help = "Directory shown in messages, e.g. ~/my-project")]
    workdir: Option<String>,
    #[arg(long, global = true, help = "Branch created by 'git init'")]
    default_branch: Option<String>,
    #[arg(
        long = "file",
        global = true,
        help = "Seed a working file (repeat for several files)"
    )]
    files: Vec<String>,
}

impl SessionArgs {
    /// Environment first, then command line flags on top
    fn resolve(self) -> Result<SessionConfig> {
        let mut config = SessionConfig::load_from_env()?;

        if let Some(workdir) = self.workdir {
            config = config.with_workdir(workdir).context("invalid --workdir")?;
        }
        if let Some(branch) = self.default_branch {
            config = config
                .with_default_branch(branch)
                .context("invalid --default-branch")?;
        }
        if !self.files.is_empty() {
            config = config
                .with_working_files(self.files)
                .context("invalid --file")?;
        }

        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "repl",
        about = "Start an interactive terminal",
        long_about = "This command reads Git commands from standard input, one per line, \
        and prints each result. Type 'exit' or press Ctrl-D to leave."
    )]
    Repl {
        #[arg(long, help = "Print the repository state after every command")]
        state: bool,
    },
    #[command(
        name = "run",
        about = "Replay a script of commands",
        long_about = "This command replays a file with one command per line and prints the transcript. \
        Blank lines and lines starting with '#' are skipped."
    )]
    Run {
        #[arg(index = 1, help = "The script to replay")]
        script: PathBuf,
        #[arg(long, help = "Print the repository state after every command")]
        state: bool,
        #[arg(long, help = "Fail if any command produced an error")]
        strict: bool,
    },
    #[command(
        name = "reference",
        about = "Print the command reference",
        long_about = "This command prints the Git commands covered by the lessons, grouped by category."
    )]
    Reference,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    colored::control::set_override(std::io::stdout().is_terminal());

    match cli.command {
        Commands::Repl { state } => {
            let session = Session::new(cli.session.resolve()?);
            repl(session, state).await?
        }
        Commands::Run {
            script,
            state,
            strict,
        } => {
            let session = Session::new(cli.session.resolve()?);
            run_script(session, &script, state, strict).await?
        }
        Commands::Reference => page_or_print(&reference::render())?,
    }

    Ok(())
}

async fn repl(mut session: Session, show_state: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "Type 'help' to list the available commands.")?;
    loop {
        write!(stdout, "{} $ ", session.config().workdir().cyan())?;
        stdout.flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read from stdin")?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            writeln!(stdout)?;
            break;
        };
        if EXIT_COMMANDS.contains(&line.trim()) {
            break;
        }

        match session.submit(&line) {
            Submission::Ignored => continue,
            Submission::Cleared => write!(stdout, "{}", CLEAR_SCREEN)?,
            Submission::Recorded(result) => print_result(&mut stdout, &result, false)?,
        }
        if show_state {
            writeln!(stdout, "{}", session.state())?;
        }
    }

    Ok(())
}

async fn run_script(
    mut session: Session,
    script: &Path,
    show_state: bool,
    strict: bool,
) -> Result<()> {
    let contents = tokio::fs::read_to_string(script)
        .await
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let mut stdout = std::io::stdout().lock();

    let commands = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let mut failures = 0usize;
    for command in commands {
        match session.submit(command) {
            Submission::Ignored | Submission::Cleared => continue,
            Submission::Recorded(result) => {
                failures += usize::from(result.is_error());
                print_result(&mut stdout, &result, true)?;
            }
        }
        if show_state {
            writeln!(stdout, "{}", session.state())?;
        }
    }

    log::debug!(
        "replayed {} with {} history entries",
        script.display(),
        session.history().len()
    );

    if strict && failures > 0 {
        anyhow::bail!("{} command(s) in {} failed", failures, script.display());
    }

    Ok(())
}

fn print_result(writer: &mut impl Write, result: &CommandResult, echo: bool) -> Result<()> {
    if echo {
        writeln!(writer, "{} {}", "$".cyan(), result.input)?;
    }
    if !result.output.is_empty() {
        writeln!(writer, "{}", result.classification.paint(&result.output))?;
    }
    writeln!(writer, "{} {}", "hint:".dimmed(), result.explanation.italic())?;
    writeln!(writer)?;

    Ok(())
}
