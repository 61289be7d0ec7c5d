use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use loom_deps::commands;
use loom_deps::{AppState, LoomExtension, LoomResult, OsName, Platform};

#[derive(Debug, Parser)]
#[command(name = "loom-deps")]
#[command(about = "Resolve Minecraft library dependencies from the version manifest")]
struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the dependency pass and print every configuration.
    Resolve(ResolveArgs),
    /// List Minecraft releases from the version manifest.
    Versions {
        #[arg(long)]
        manifest_url: Option<String>,
    },
    /// Show which configuration a coordinate would be registered into.
    Classify {
        coordinate: String,
        #[arg(long, help = "windows, osx or linux; defaults to this machine")]
        os: Option<String>,
    },
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Minecraft version, overrides `targetVersion` from the config file.
    #[arg(long = "version")]
    target_version: Option<String>,

    /// Loader version; enables the fabric-base artifact.
    #[arg(long = "loader")]
    loader_version: Option<String>,

    #[arg(long, default_value = "loom.json")]
    config: PathBuf,

    #[arg(long)]
    cache_dir: Option<PathBuf>,

    #[arg(long)]
    manifest_url: Option<String>,

    #[arg(long)]
    os: Option<String>,

    #[arg(long, help = "Print the result as JSON")]
    json: bool,
}

fn platform(os: Option<&str>) -> LoomResult<Platform> {
    match os {
        Some(name) => Ok(Platform {
            os: name.parse::<OsName>()?,
            ..Platform::current()
        }),
        None => Ok(Platform::current()),
    }
}

fn load_extension(args: &ResolveArgs) -> LoomResult<LoomExtension> {
    let mut extension = if args.config.exists() {
        LoomExtension::load(&args.config)?
    } else {
        LoomExtension::default()
    };

    if let Some(version) = &args.target_version {
        extension.target_version = version.clone();
    }
    if let Some(loader) = &args.loader_version {
        extension.loader_version = Some(loader.clone());
    }

    extension.validate()?;
    Ok(extension)
}

async fn run(cli: Cli) -> LoomResult<()> {
    match cli.command {
        Command::Resolve(args) => {
            let extension = load_extension(&args)?;
            let state = AppState::new(args.cache_dir.clone(), args.manifest_url.clone())?;
            let response =
                commands::resolve_dependencies(&state, &extension, platform(args.os.as_deref())?)
                    .await?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                for (configuration, coordinates) in &response.configurations {
                    println!("{configuration}:");
                    for coordinate in coordinates {
                        println!("  {coordinate}");
                    }
                }
            }
        }
        Command::Versions { manifest_url } => {
            let state = AppState::new(None, manifest_url)?;
            for version in commands::get_minecraft_versions(&state).await? {
                println!("{}\t{}", version.id, version.release_time);
            }
        }
        Command::Classify { coordinate, os } => {
            let response = commands::classify_coordinate(
                &LoomExtension::default(),
                &coordinate,
                platform(os.as_deref())?,
            )?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    loom_deps::init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
