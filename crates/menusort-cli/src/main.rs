use menusort::menu::{merge, unmerge};
use menusort::{
    MenuItem, Platform, accelerator_for_keystroke, sort_menu_items, sort_menu_tree,
};
use serde::Serialize;
use std::io::Read;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Menu(menusort::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Menu(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<menusort::Error> for CliError {
    fn from(value: menusort::Error) -> Self {
        Self::Menu(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Sort,
    Merge,
    Unmerge,
    Accelerator,
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: Option<String>,
    base: Option<String>,
    pretty: bool,
    recursive: bool,
    specificity: f64,
    platform: Platform,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Sort,
            input: None,
            base: None,
            pretty: false,
            recursive: false,
            specificity: f64::INFINITY,
            platform: Platform::current(),
        }
    }
}

fn usage() -> &'static str {
    "menusort-cli\n\
\n\
USAGE:\n\
  menusort-cli [sort] [--pretty] [--recursive] [<path>|-]\n\
  menusort-cli merge --base <path> [--specificity <n>] [--platform macos|windows|linux] [--pretty] [<path>|-]\n\
  menusort-cli unmerge --base <path> [--platform macos|windows|linux] [--pretty] [<path>|-]\n\
  menusort-cli accelerator <keystroke>\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input and --base files hold a JSON array of menu items.\n\
  - sort orders one menu level; --recursive also sorts every submenu.\n\
  - merge/unmerge apply each input item to the --base menu and print the result.\n\
  - Set MENUSORT_LOG (e.g. MENUSORT_LOG=debug) to log dropped ordering constraints to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "sort" => args.command = Command::Sort,
            "merge" => args.command = Command::Merge,
            "unmerge" => args.command = Command::Unmerge,
            "accelerator" => args.command = Command::Accelerator,
            "--pretty" => args.pretty = true,
            "--recursive" => args.recursive = true,
            "--base" => {
                let Some(base) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.base = Some(base.clone());
            }
            "--specificity" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.specificity = n.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if args.specificity.is_nan() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--platform" => {
                let Some(p) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.platform = p.parse::<Platform>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if matches!(args.command, Command::Merge | Command::Unmerge) && args.base.is_none() {
        return Err(CliError::Usage(usage()));
    }
    if matches!(args.command, Command::Accelerator) && args.input.is_none() {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn read_menu(input: Option<&str>) -> Result<Vec<MenuItem>, CliError> {
    let text = read_input(input)?;
    Ok(serde_json::from_str(&text)?)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Sort => {
            let menu = read_menu(args.input.as_deref())?;
            tracing::debug!(items = menu.len(), recursive = args.recursive, "sorting menu");
            let sorted = if args.recursive {
                sort_menu_tree(menu)?
            } else {
                sort_menu_items(menu)?
            };
            write_json(&sorted, args.pretty)
        }
        Command::Merge | Command::Unmerge => {
            let mut menu = read_menu(args.base.as_deref())?;
            let items = read_menu(args.input.as_deref())?;
            tracing::debug!(
                base = menu.len(),
                items = items.len(),
                platform = %args.platform,
                "applying menu template"
            );
            for item in &items {
                if matches!(args.command, Command::Merge) {
                    merge(&mut menu, item, args.specificity, args.platform);
                } else {
                    unmerge(&mut menu, item, args.platform);
                }
            }
            write_json(&menu, args.pretty)
        }
        Command::Accelerator => {
            let keystroke = args.input.as_deref().unwrap_or_default();
            if let Some(accelerator) = accelerator_for_keystroke(keystroke) {
                println!("{accelerator}");
            }
            Ok(())
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("MENUSORT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() {
    init_logging();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
