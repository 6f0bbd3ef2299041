//! Charm-style CLI prompts using cliclack

use crate::catalog::{self, CatalogSource, ReleaseCatalog};
use crate::library::LibraryConfig;
use crate::runtime::check::{self, RuntimeInfo};
use crate::scaffold::{write_project, ENTRY_POINT};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Release catalog to use instead of the bundled one
    pub catalog: Option<PathBuf>,

    /// Template name to use
    pub template: Option<String>,

    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Open the generated source file when done
    pub open: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: LibraryConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Load the release catalog
    let catalog = load_catalog(config, &args.catalog).await?;

    // Step 2: Select directory (must not exist yet)
    let project_dir = select_directory(&args)?;

    // Step 3: Select template
    let template_name = select_template(&catalog, args.template.as_deref(), args.yes)?;

    // Step 4: Write the project
    create_project(&catalog, &template_name, &project_dir).await?;

    // Step 5: Check tooling (advisory)
    let runtimes = check_runtimes()?;

    if args.open {
        open_entry_point(&project_dir)?;
    }

    // Step 6: Show next steps
    print_next_steps(config, &project_dir, &runtimes)?;

    Ok(())
}

async fn load_catalog<C: LibraryConfig>(
    config: &C,
    catalog_path: &Option<PathBuf>,
) -> Result<ReleaseCatalog> {
    let source = match catalog_path {
        Some(path) => CatalogSource::local(path.clone()),
        None => CatalogSource::from_config(config),
    };

    let spinner = cliclack::spinner();
    spinner.start("Loading release catalog...");

    let catalog = match catalog::load_catalog(&source).await {
        Ok(catalog) => catalog,
        Err(e) => {
            spinner.stop("Failed to load release catalog");
            return Err(e)
                .with_context(|| format!("Failed to load catalog from {}", source.describe()));
        }
    };

    spinner.stop(format!(
        "{} {} ({} templates, {})",
        config.display_name(),
        catalog.version,
        catalog.templates.len(),
        source.describe()
    ));

    if matches!(source, CatalogSource::Local(_)) {
        if let Ok(bundled) = catalog::bundled_catalog() {
            if let Some(warning) = catalog::check_compatibility(&catalog.version, &bundled.version)
            {
                cliclack::log::warning(warning)?;
            }
        }
    }

    Ok(catalog)
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let dir = match &args.directory {
        Some(dir) => dir.clone(),
        None => {
            let input: String = cliclack::input("Project directory")
                .placeholder("my-chart")
                .validate(|input: &String| {
                    if input.trim().is_empty() {
                        Err("Please enter a directory name")
                    } else {
                        Ok(())
                    }
                })
                .interact()?;
            PathBuf::from(input.trim())
        }
    };

    let path = if dir.is_absolute() {
        dir
    } else {
        current_dir.join(dir)
    };

    if path.exists() {
        anyhow::bail!("Destination {} already exists! Aborting.", path.display());
    }

    // Validate parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    cliclack::log::info(format!("Using directory: {}", path.display()))?;
    Ok(path)
}

fn select_template(
    catalog: &ReleaseCatalog,
    specified_template: Option<&str>,
    yes: bool,
) -> Result<String> {
    // If a template was specified via --template flag, use it directly
    if let Some(template_name) = specified_template {
        if catalog.template(template_name).is_some() {
            cliclack::log::info(format!("Using template: {}", template_name))?;
            return Ok(template_name.to_string());
        }

        let available = catalog.template_names().join(", ");
        if yes {
            anyhow::bail!(
                "Template '{}' not found. Available templates: {}",
                template_name,
                available
            );
        }
        cliclack::log::warning(format!("Template '{}' not found", template_name))?;
    }

    let names = catalog.template_names();
    let first = match names.first() {
        Some(first) => first.clone(),
        None => anyhow::bail!("No templates found."),
    };

    // If only one template, or prompts are skipped, use the first one
    if names.len() == 1 || yes {
        cliclack::log::info(format!("Using template: {}", first))?;
        return Ok(first);
    }

    let mut select = cliclack::select("Please choose a template from the following");
    for name in &names {
        let hint = catalog
            .template(name)
            .map(|spec| {
                format!(
                    "{} required, {} optional",
                    spec.required.len(),
                    spec.optional.len()
                )
            })
            .unwrap_or_default();
        select = select.item(name.clone(), name, hint);
    }

    Ok(select.interact()?)
}

async fn create_project(
    catalog: &ReleaseCatalog,
    template_name: &str,
    project_dir: &Path,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Creating {}...", project_dir.display()));

    match write_project(project_dir, catalog, template_name).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                project_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            Err(e.into())
        }
    }
}

fn check_runtimes() -> Result<Vec<RuntimeInfo>> {
    let spinner = cliclack::spinner();
    spinner.start("Checking tooling...");

    let runtimes = check::check_runtimes();
    let runtime_info: Vec<String> = runtimes.iter().map(RuntimeInfo::summary).collect();
    spinner.stop(format!("Detected tooling: {}", runtime_info.join(", ")));

    if let Some(node) = check::find(&runtimes, "Node.js").filter(|r| !r.available) {
        cliclack::log::warning(format!(
            "{} is required to run the example (install from https://nodejs.org)",
            node.name
        ))?;
    }

    Ok(runtimes)
}

fn open_entry_point(project_dir: &Path) -> Result<()> {
    let entry = project_dir.join(ENTRY_POINT);
    match open::that(&entry) {
        Ok(()) => cliclack::log::info(format!("Opened {}", entry.display()))?,
        Err(e) => cliclack::log::warning(format!("Could not open {}: {}", entry.display(), e))?,
    }
    Ok(())
}

fn print_next_steps<C: LibraryConfig>(
    config: &C,
    project_dir: &Path,
    runtimes: &[RuntimeInfo],
) -> Result<()> {
    let steps = config.next_steps(project_dir, runtimes);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Docs: {}", config.docs_url()))?;

    Ok(())
}
