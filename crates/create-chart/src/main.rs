//! create-chart - Example project scaffolding for Visual Vocabulary charts

use anyhow::Result;
use chart_scaffolder_core::catalog::{self, CatalogSource};
use chart_scaffolder_core::runtime::check;
use chart_scaffolder_core::tui::CreateArgs;
use chart_scaffolder_core::{LibraryConfig, RuntimeInfo};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Visual Vocabulary Components configuration
#[derive(Clone)]
pub struct VvcConfig;

impl LibraryConfig for VvcConfig {
    fn name(&self) -> &'static str {
        "create-chart"
    }

    fn display_name(&self) -> &'static str {
        "Visual Vocabulary"
    }

    fn package_name(&self) -> &'static str {
        catalog::DEFAULT_PACKAGE
    }

    fn catalog_path_env(&self) -> &'static str {
        "VVC_CATALOG_PATH"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/Financial-Times/vvc"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding Visual Vocabulary chart examples"
    }

    fn next_steps(&self, dir: &Path, runtimes: &[RuntimeInfo]) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Install dependencies
        steps.push("npm install".to_string());

        // Step 3: Fill in required props
        steps.push("Fill in the required props marked in src/index.js".to_string());

        // Step 4: Start the dev server
        let has_parcel = check::find(runtimes, "Parcel").is_some_and(|r| r.available);
        if has_parcel {
            steps.push("parcel index.html".to_string());
        } else {
            steps.push("npx parcel index.html".to_string());
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-chart")]
#[command(about = "CLI for scaffolding Visual Vocabulary chart examples")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// `create` options, accepted without the subcommand name
    #[command(flatten)]
    pub create: CliCreateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new chart project
    Create(CliCreateArgs),
    /// List the templates in the release catalog
    List(ListArgs),
    /// Generate release data from a library prop metadata dump (for development use)
    GenerateCatalog(GenerateCatalogArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project directory to create
    #[arg(value_name = "DIRECTORY")]
    pub path: Option<PathBuf>,

    /// Template name to use
    #[arg(value_name = "TEMPLATE")]
    pub template_name: Option<String>,

    /// Release catalog JSON to use instead of the bundled one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Template name to use
    #[arg(short, long, conflicts_with = "template_name")]
    pub template: Option<String>,

    /// Project directory to create
    #[arg(short, long, conflicts_with = "path")]
    pub directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Open the generated source file when done
    #[arg(long)]
    pub open: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            catalog: args.catalog,
            template: args.template.or(args.template_name),
            directory: args.directory.or(args.path),
            yes: args.yes,
            open: args.open,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Release catalog JSON to use instead of the bundled one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct GenerateCatalogArgs {
    /// JSON dump of the library's propTypes and defaultProps
    #[arg(long)]
    pub metadata: PathBuf,

    /// Where to write the release data
    #[arg(long, default_value = "vvc-release-data.json")]
    pub output: PathBuf,
}

async fn list_templates<C: LibraryConfig>(config: &C, catalog_path: Option<PathBuf>) -> Result<()> {
    let source = match catalog_path {
        Some(path) => CatalogSource::local(path),
        None => CatalogSource::from_config(config),
    };
    let catalog = catalog::load_catalog(&source).await?;

    println!(
        "{}",
        format!(
            "{} {} templates ({})",
            config.display_name(),
            catalog.version,
            source.describe()
        )
        .cyan()
        .bold()
    );
    println!();

    for (name, spec) in &catalog.templates {
        println!(
            "  {} {} {}",
            "->".blue(),
            name.bold(),
            format!(
                "{} required, {} optional, {} defaults",
                spec.required.len(),
                spec.optional.len(),
                spec.defaults.len()
            )
            .dimmed()
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = VvcConfig;

    // Handle subcommands
    match args.command {
        Some(Command::Create(create_args)) => {
            let result = chart_scaffolder_core::run(&config, create_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::List(list_args)) => list_templates(&config, list_args.catalog).await,
        Some(Command::GenerateCatalog(gen_args)) => {
            catalog::generate_catalog(&config, &gen_args.metadata, &gen_args.output)
                .await
                .map(|_| ())
        }
        None => {
            // No subcommand provided, default to create behavior
            let result = chart_scaffolder_core::run(&config, args.create.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
