//! CLI entry point for `inboxview`.

use std::io::{BufRead, Write};
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use inboxview::api::{HttpMailApi, MailApi};
use inboxview::config::Config;
use inboxview::i18n;
use inboxview::model::message::{format_timestamp, render_markup};
use inboxview::model::{BodyView, MessageDetail, MessageSummary};

/// Column width used when rendering HTML bodies outside the TUI.
const RENDER_WIDTH: usize = 100;

#[derive(Parser)]
#[command(name = "inboxview", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the mail capture server
    #[arg(long, global = true, env = "INBOXVIEW_URL", value_name = "URL")]
    url: Option<String>,

    /// Seconds between list refreshes
    #[arg(long, global = true, value_name = "SECS")]
    interval: Option<u64>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Language (en, es). Defaults to system locale.
    #[arg(long, global = true, value_name = "LANG")]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the inbox in the TUI
    Watch,
    /// List received messages
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one message
    Show {
        id: String,
        #[arg(long)]
        json: bool,
        /// Print HTML bodies verbatim instead of rendering them
        #[arg(long)]
        raw: bool,
    },
    /// Delete all captured messages
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

/// Detect language early from --lang arg or system env, before clap processes --help.
fn detect_lang_early() -> i18n::Lang {
    let args: Vec<String> = std::env::args().collect();
    for (i, arg) in args.iter().enumerate() {
        let code = if arg == "--lang" {
            args.get(i + 1).map(String::as_str)
        } else {
            arg.strip_prefix("--lang=")
        };
        if let Some(lang) = code.and_then(i18n::Lang::from_code) {
            return lang;
        }
    }
    i18n::detect_system_lang()
}

/// Build a localized clap Command using i18n strings.
fn build_localized_command() -> clap::Command {
    let mut cmd = Cli::command()
        .about(i18n::app_about())
        .long_about(i18n::app_long_about())
        .after_help(i18n::app_after_help());

    let subcommands: Vec<clap::Command> = cmd
        .get_subcommands()
        .map(|sub| {
            let about = match sub.get_name() {
                "watch" => Some(i18n::help_cmd_watch()),
                "list" => Some(i18n::help_cmd_list()),
                "show" => Some(i18n::help_cmd_show()),
                "clear" => Some(i18n::help_cmd_clear()),
                "completions" => Some(i18n::help_cmd_completions()),
                "manpage" => Some(i18n::help_cmd_manpage()),
                _ => None,
            };
            match about {
                Some(text) => sub.clone().about(text),
                None => sub.clone(),
            }
        })
        .collect();

    for sub in subcommands {
        cmd = cmd.mut_subcommand(sub.get_name(), |_| sub.clone());
    }

    cmd
}

fn main() -> anyhow::Result<()> {
    // Detect language BEFORE clap parsing so --help is localized
    i18n::set_lang(detect_lang_early());

    let matches = build_localized_command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    // Configuration file first, command-line flags on top
    let mut config = inboxview::config::load_config();
    if let Some(url) = cli.url {
        config.server.url = url;
    }
    if let Some(secs) = cli.interval {
        config.polling.interval_secs = secs;
    }
    config.validate()?;

    let log_level = match cli.verbose {
        0 => config.general.log_level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let interactive = matches!(cli.command, None | Some(Commands::Watch));
    setup_logging(&log_level, &config, !interactive);
    tracing::debug!(lang = i18n::lang().code(), "Interface language");

    match cli.command {
        None | Some(Commands::Watch) => inboxview::tui::run_tui(&config),
        Some(Commands::List { json }) => cmd_list(&config, json),
        Some(Commands::Show { id, json, raw }) => cmd_show(&config, &id, json, raw),
        Some(Commands::Clear { yes }) => cmd_clear(&config, yes),
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Manpage) => cmd_manpage(),
    }
}

/// Set up tracing with a log file and, outside the TUI, stderr output.
fn setup_logging(level: &str, config: &Config, to_stderr: bool) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer =
        to_stderr.then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let log_path = inboxview::config::log_file_path(config);
    let file_layer = log_path
        .parent()
        .zip(log_path.file_name())
        .filter(|(dir, _)| std::fs::create_dir_all(dir).is_ok())
        .map(|(dir, name)| {
            let file_appender = tracing_appender::rolling::never(dir, name);
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_appender)
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

/// Client for one-shot commands.
fn connect(config: &Config) -> anyhow::Result<HttpMailApi> {
    Ok(HttpMailApi::new(
        &config.server.url,
        config.server.timeout(),
    )?)
}

/// Spinner shown on stderr while a request is in flight.
fn spinner(label: &str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Print the received messages.
fn cmd_list(config: &Config, json: bool) -> anyhow::Result<()> {
    let api = connect(config)?;

    let pb = spinner(&format!("{} {}", i18n::msg_fetching(), api.base_url()))?;
    let result = api.list_summaries();
    pb.finish_and_clear();
    let summaries = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print_summary_table(&summaries, &config.general.date_format);
    }
    Ok(())
}

/// Print received messages as a human-readable table.
fn print_summary_table(summaries: &[MessageSummary], date_format: &str) {
    println!();
    if summaries.is_empty() {
        println!("  {}", i18n::list_empty());
        println!();
        return;
    }
    println!("  {} {}", summaries.len(), i18n::cli_result_count());
    println!();

    println!(
        "  {:<10} {:<20} {:<30} {:<40}",
        "ID",
        i18n::tui_col_date(),
        i18n::tui_col_from(),
        i18n::tui_col_subject()
    );
    println!("  {}", "-".repeat(103));

    for summary in summaries {
        let id: String = summary.id.chars().take(10).collect();
        let date = format_timestamp(&summary.timestamp, date_format);
        let from: String = summary.from.chars().take(29).collect();
        let subject: String = summary.title().chars().take(40).collect();
        println!("  {id:<10} {date:<20} {from:<30} {subject:<40}");
    }
    println!();
}

/// Print one message.
fn cmd_show(config: &Config, id: &str, json: bool, raw: bool) -> anyhow::Result<()> {
    let api = connect(config)?;

    let pb = spinner(&format!("{} {id}", i18n::msg_fetching()))?;
    let result = api.get_detail(id);
    pb.finish_and_clear();
    let detail = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print_detail(&detail, &config.general.date_format, raw);
    }
    Ok(())
}

fn print_detail(detail: &MessageDetail, date_format: &str, raw: bool) {
    println!("{}{}", i18n::tui_header_subject(), detail.title());
    println!("{}{}", i18n::tui_header_from(), detail.from);
    println!("{}{}", i18n::tui_header_to(), detail.recipients_line());
    println!(
        "{}{}",
        i18n::tui_header_date(),
        format_timestamp(&detail.timestamp, date_format)
    );
    println!();
    match detail.body_view() {
        BodyView::Preformatted(text) => println!("{text}"),
        BodyView::Markup(markup) if raw => println!("{markup}"),
        BodyView::Markup(markup) => println!("{}", render_markup(markup, RENDER_WIDTH)),
    }
}

/// Delete every captured message, after confirmation unless `--yes`.
fn cmd_clear(config: &Config, yes: bool) -> anyhow::Result<()> {
    let api = connect(config)?;

    if !yes && !confirm(i18n::confirm_clear())? {
        println!("{}", i18n::cli_aborted());
        return Ok(());
    }

    api.clear_all()?;
    println!("{}", i18n::cli_cleared());
    Ok(())
}

/// Ask a yes/no question on the terminal. Anything but yes declines.
fn confirm(question: &str) -> anyhow::Result<bool> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{question}{}", i18n::cli_confirm_suffix())?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "s\u{ed}"
    )
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "inboxview", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::stdout().write_all(&buf)?;
    Ok(())
}
