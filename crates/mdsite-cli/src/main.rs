use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mdsite_config::Config;
use mdsite_engine::{PageError, RenderOptions, convert, extract_title, io, render_page};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static HTML site from Markdown files")]
struct Cli {
    /// Log every block and file processed
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and generate every page
    Build {
        /// Config file (defaults to ./mdsite.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Convert a single Markdown file to HTML
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Template with {{ Title }} and {{ Content }} placeholders; without
        /// one only the document body is written and no title is required
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Escape attribute values
        #[arg(long)]
        strict: bool,
    },
    /// Print the title of a Markdown file
    Title {
        /// Input Markdown file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Build { config } => build(config),
        Command::Render {
            input,
            template,
            output,
            strict,
        } => render(input, template, output, strict),
        Command::Title { input } => {
            let markdown = read_markdown(&input)?;
            let title = extract_title(&markdown)
                .with_context(|| format!("No title in {}", input.display()))?;
            println!("{title}");
            Ok(())
        }
    }
}

fn build(config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load_from_path(&config_path)? {
        Some(config) => config,
        None => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
    };
    let options = RenderOptions {
        escape_attributes: config.escape_attributes,
    };

    let copied = io::copy_static(&config.static_path, &config.output_path).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            config.static_path.display(),
            config.output_path.display()
        )
    })?;
    log::info!("Copied {copied} static files");

    let pages = io::generate_site(
        &config.content_path,
        &config.template_path,
        &config.output_path,
        &options,
    )
    .context("Site generation failed")?;
    log::info!(
        "Generated {} pages in {}",
        pages.len(),
        config.output_path.display()
    );
    Ok(())
}

fn render(
    input: PathBuf,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let markdown = read_markdown(&input)?;
    let options = RenderOptions {
        escape_attributes: strict,
    };

    let html = match template {
        Some(path) => {
            let template = io::read_template(&path)?;
            render_page(&markdown, &template, &options)
        }
        None => convert(&markdown)
            .map(|node| node.render_with(&options))
            .map_err(PageError::from),
    }
    .with_context(|| format!("Failed to render {}", input.display()))?;

    match output {
        Some(path) => {
            fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Created {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn read_markdown(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
