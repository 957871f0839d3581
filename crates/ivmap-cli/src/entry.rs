use crate::{prelude::*, script, self_check};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Run the built-in assignment scenarios against a fresh map
    SelfCheck,

    /// Execute an interval map script
    Run {
        /// The value of every key before it is first assigned
        #[arg(short, long, env = "IVMAP_DEFAULT", default_value = "A")]
        default: String,

        /// Path of the script to run, or standard input if omitted
        file: Option<PathBuf>,
    },
}

#[allow(clippy::inline_always)]
#[inline(always)]
pub fn main() {
    [
        ".env.local",
        if cfg!(debug_assertions) {
            ".env.dev"
        } else {
            ".env.prod"
        },
        ".env",
    ]
    .into_iter()
    .try_for_each(|p| match dotenv::from_filename(p) {
        Ok(p) => {
            trace!("Loaded env from {p:?}");
            Ok(())
        },
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    })
    .expect("Failed to load .env files");

    tracing::subscriber::set_global_default(
        tracing_subscriber::Registry::default()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
                    .unwrap(),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr)),
    )
    .expect("Failed to set default tracing subscriber");

    let opts: Opts = clap::Parser::parse();

    std::process::exit(match run(opts) {
        Ok(()) => 0,
        Err(e) => {
            error!("{e:?}");
            1
        },
    });
}

fn run(opts: Opts) -> Result {
    let Opts { command } = opts;

    match command {
        Command::SelfCheck => {
            self_check::run()?;
            println!("All tests passed!");
        },
        Command::Run { default, file } => {
            let mut map = IntervalMap::new(default);
            let out = io::stdout().lock();

            if let Some(file) = file {
                let stream = File::open(&file)
                    .with_context(|| format!("Failed to open script {}", file.display()))?;
                script::run(&mut map, io::BufReader::new(stream), out)
                    .with_context(|| format!("Error running script {}", file.display()))?;
            } else {
                script::run(&mut map, io::stdin().lock(), out)
                    .context("Error running script from stdin")?;
            }

            debug!(breakpoints = map.breakpoint_count(), "Script finished");
        },
    }

    Ok(())
}
