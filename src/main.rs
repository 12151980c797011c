use clap::{Parser, Subcommand};
use nbgraph::{BundleSink, Config, DisplaySink, EvcxrSink, GraphRenderer, HtmlSink};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author = "Simon Zeng", version, about = "Notebook graph markup utilities")]
struct Args {
    /// Enable verbose output
    #[arg(short = 'v', global = true)]
    verbose: bool,

    /// Config file (defaults to ./nbgraph.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: 'html', 'evcxr', or 'bundle' (default: html)
    #[arg(long, global = true, default_value = "html", value_parser = ["html", "evcxr", "bundle"])]
    format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inline the graph script and stylesheet into container markup
    Render {
        /// Directory holding test.js and test.css
        #[arg(long, conflicts_with_all = ["script", "stylesheet"])]
        resources: Option<PathBuf>,

        /// Graph script path
        #[arg(long)]
        script: Option<PathBuf>,

        /// Graph stylesheet path
        #[arg(long)]
        stylesheet: Option<PathBuf>,
    },

    /// Emit a script that animates the graph rectangle to a new size
    Transition {
        /// Target width, inserted verbatim
        #[arg(allow_hyphen_values = true)]
        width: String,

        /// Target height, inserted verbatim
        #[arg(allow_hyphen_values = true)]
        height: String,

        /// Transition duration in milliseconds
        #[arg(long)]
        duration: Option<u64>,

        /// Id of the element to animate
        #[arg(long)]
        target: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    log::debug!("{args:?}");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::discover(&std::env::current_dir()?)?,
    };

    let markup = match args.command {
        Command::Render {
            resources,
            script,
            stylesheet,
        } => {
            let renderer = if let Some(dir) = resources {
                GraphRenderer::from_resource_dir(dir)
            } else {
                let configured = config.graph_renderer();
                GraphRenderer::new(
                    script.unwrap_or_else(|| configured.script_path().to_path_buf()),
                    stylesheet.unwrap_or_else(|| configured.stylesheet_path().to_path_buf()),
                )
            };
            renderer.render()?
        }
        Command::Transition {
            width,
            height,
            duration,
            target,
        } => {
            let mut transition = config.transition();
            if let Some(duration) = duration {
                transition = transition.with_duration(duration);
            }
            if let Some(target) = target {
                transition = transition.with_target(target);
            }
            transition.render(width, height)
        }
    };

    let stdout = std::io::stdout().lock();
    let mut sink: Box<dyn DisplaySink> = match args.format.as_str() {
        "html" => Box::new(HtmlSink::new(stdout)),
        "evcxr" => Box::new(EvcxrSink::new(stdout)),
        "bundle" => Box::new(BundleSink::new(stdout)),
        _ => unreachable!("Invalid format validated by clap"),
    };
    markup.show(sink.as_mut())?;

    Ok(())
}
