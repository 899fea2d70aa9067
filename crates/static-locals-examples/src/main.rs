use facet::Facet;
use figue as args;

mod scenarios;

type AnyResult<T> = Result<T, String>;

pub(crate) const READERS_ENV: &str = "STATIC_LOCALS_READERS";
const DEFAULT_READERS: usize = 4;

#[derive(Facet, Debug)]
struct Cli {
    #[facet(flatten)]
    builtins: args::FigueBuiltins,
    #[facet(args::subcommand)]
    command: CommandKind,
}

#[derive(Facet, Debug)]
#[repr(u8)]
enum CommandKind {
    Basic,
    NonCopyable,
    Concurrent {
        #[facet(args::named, default)]
        readers: Option<usize>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> AnyResult<()> {
    let cli = parse_cli()?;
    match cli.command {
        CommandKind::Basic => scenarios::basic::run(),
        CommandKind::NonCopyable => scenarios::non_copyable::run(),
        CommandKind::Concurrent { readers } => scenarios::concurrent::run(readers_from(readers)?),
    }
}

fn parse_cli() -> AnyResult<Cli> {
    let figue_config = args::builder::<Cli>()
        .map_err(|e| format!("failed to build CLI schema: {e}"))?
        .cli(|cli| cli.strict())
        .help(|h| {
            h.program_name("static-locals-examples")
                .description("Run static-locals sample programs as subcommands")
                .version(option_env!("CARGO_PKG_VERSION").unwrap_or("dev"))
        })
        .build();

    args::Driver::new(figue_config)
        .run()
        .into_result()
        .map(|v| v.value)
        .map_err(|e| e.to_string())
}

fn readers_from(cli_value: Option<usize>) -> AnyResult<usize> {
    let readers = match cli_value {
        Some(readers) => readers,
        None => match std::env::var(READERS_ENV) {
            Ok(raw) => raw
                .parse()
                .map_err(|e| format!("{READERS_ENV}={raw:?} is not a thread count: {e}"))?,
            Err(_) => DEFAULT_READERS,
        },
    };
    if readers == 0 {
        return Err("need at least one reader thread".to_owned());
    }
    Ok(readers)
}
