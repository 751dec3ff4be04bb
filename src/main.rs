use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shipgen::{AppError, GenerateOptions};

#[derive(Parser)]
#[command(name = "shipgen")]
#[command(version)]
#[command(
    about = "Generate process-manager, nginx, and deploy-script artifacts from a JSON deployment configuration",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new deployment configuration with name-derived defaults
    #[clap(visible_alias = "i")]
    Init {
        /// Application name (default: my-next-app)
        name: Option<String>,
        /// Directory the default templates are written to
        #[arg(long, default_value = "./templates")]
        template_dir: PathBuf,
    },
    /// Interactive setup wizard
    Setup,
    /// Generate deployment files from a configuration
    #[clap(visible_alias = "gen")]
    Generate {
        /// Path to the configuration file
        config: PathBuf,
        #[command(flatten)]
        options: GenerateArgs,
    },
    /// Generate deployment files and run the deployment script
    Deploy {
        /// Path to the configuration file
        config: PathBuf,
        #[command(flatten)]
        options: GenerateArgs,
    },
    /// Show CI/CD environment information
    CiStatus,
    /// Validate a configuration for CI/CD pipelines
    CiValidate {
        /// Path to the configuration file
        #[arg(default_value = "./config.json")]
        config: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Environment file to use instead of the configured one
    #[arg(long)]
    env: Option<String>,
    /// Skip building the application
    #[arg(long)]
    skip_build: bool,
    /// Skip installing dependencies
    #[arg(long)]
    skip_deps: bool,
    /// Skip database migrations
    #[arg(long)]
    skip_migrations: bool,
    /// Show what would be done without executing
    #[arg(long)]
    dry_run: bool,
    /// Output directory for generated files
    #[arg(long, default_value = "./generated")]
    output_dir: PathBuf,
    /// Directory the templates are read from
    #[arg(long, default_value = "./templates")]
    template_dir: PathBuf,
}

impl From<GenerateArgs> for GenerateOptions {
    fn from(args: GenerateArgs) -> Self {
        Self {
            skip_build: args.skip_build,
            skip_deps: args.skip_deps,
            skip_migrations: args.skip_migrations,
            dry_run: args.dry_run,
            env_file: args.env,
            output_dir: args.output_dir,
            template_dir: args.template_dir,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { name, template_dir } => {
            shipgen::init(name.as_deref(), &template_dir).map(|_| ())
        }
        Commands::Setup => shipgen::setup().map(|_| ()),
        Commands::Generate { config, options } => shipgen::generate(&config, &options.into()),
        Commands::Deploy { config, options } => shipgen::deploy(&config, &options.into()),
        Commands::CiStatus => shipgen::ci_status(),
        Commands::CiValidate { config } => shipgen::ci_validate(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
