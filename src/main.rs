//! og-card CLI
//!
//! Usage:
//!   og-card presets
//!   og-card generate --name "My Project" [OPTIONS]
//!   og-card generate --config og-card.json
//!   og-card svg --name "My Project" [OPTIONS]

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use og_card::meta::{generate_meta_tags, MetaTagsConfig};
use og_card::{
    build_svg, generate, ColorConfig, ConfigError, DocumentConfig, FontConfig, LogoConfig,
    PresetError, PresetRegistry, StyleConfig, StylePreset,
};

#[derive(Parser)]
#[command(name = "og-card", version)]
#[command(about = "Generate Open Graph images for link previews")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered style presets
    Presets {
        /// Register presets from TOML files first
        #[arg(long)]
        preset_file: Vec<PathBuf>,
    },

    /// Generate a PNG image
    Generate {
        #[command(flatten)]
        card: CardArgs,

        /// Output PNG path
        #[arg(short, long, default_value = "og-image.png")]
        output: PathBuf,

        /// Also write the SVG next to the PNG
        #[arg(long)]
        svg: bool,

        /// Print Open Graph and Twitter Card meta tags
        #[arg(long)]
        meta: bool,
    },

    /// Print the SVG document to stdout
    Svg {
        #[command(flatten)]
        card: CardArgs,
    },
}

#[derive(Args)]
struct CardArgs {
    /// Project name (required unless --config is given)
    #[arg(long)]
    name: Option<String>,

    /// Short tagline below the name
    #[arg(long)]
    tagline: Option<String>,

    /// Page description, used in meta tags only
    #[arg(long)]
    description: Option<String>,

    /// Feature keywords shown as one row
    #[arg(long, num_args = 1..)]
    features: Vec<String>,

    /// Footer text, typically a URL or version
    #[arg(long)]
    footer: Option<String>,

    /// Background color
    #[arg(long)]
    bg: Option<String>,

    /// Accent color for the name
    #[arg(long)]
    accent: Option<String>,

    /// SVG file to use as the logo
    #[arg(long)]
    logo_svg: Option<PathBuf>,

    /// Regular-weight font file (TTF/OTF)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Style preset name (see `og-card presets`)
    #[arg(long)]
    preset: Option<String>,

    /// Register presets from TOML files before building
    #[arg(long)]
    preset_file: Vec<PathBuf>,

    /// JSON or TOML document config; content flags are ignored when set
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canonical page URL, used in meta tags
    #[arg(long)]
    url: Option<String>,

    /// Public URL of the image, used in meta tags
    #[arg(long)]
    image_url: Option<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("--name is required (or use --config <path>)")]
    MissingName,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    Generate(#[from] og_card::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CardArgs {
    fn document(&self) -> Result<DocumentConfig, CliError> {
        if let Some(path) = &self.config {
            let mut config = DocumentConfig::from_file(path)?;
            // Meta flags fill in what the file leaves unset
            fill_missing(&mut config.url, &self.url);
            fill_missing(&mut config.image_url, &self.image_url);
            return Ok(config);
        }

        let name = self.name.clone().ok_or(CliError::MissingName)?;
        let mut config = DocumentConfig::new(name).with_features(self.features.clone());
        config.tagline = self.tagline.clone();
        config.description = self.description.clone();
        config.footer = self.footer.clone();
        config.url = self.url.clone();
        config.image_url = self.image_url.clone();

        let mut colors = ColorConfig::new();
        colors.background = self.bg.clone();
        colors.accent = self.accent.clone();
        if !colors.is_empty() {
            config.colors = Some(colors);
        }
        if let Some(font) = &self.font {
            config.font = Some(FontConfig::new().with_path(font));
        }
        if let Some(logo) = &self.logo_svg {
            config.logo = Some(LogoConfig::svg_file(logo, None));
        }
        if let Some(preset) = &self.preset {
            config.style = Some(StyleConfig::new().with_preset(preset.as_str()));
        }
        Ok(config)
    }
}

fn fill_missing(target: &mut Option<String>, fallback: &Option<String>) {
    if target.as_deref().map_or(true, str::is_empty) && fallback.is_some() {
        target.clone_from(fallback);
    }
}

fn register_preset_files(registry: &PresetRegistry, paths: &[PathBuf]) -> Result<(), CliError> {
    for path in paths {
        let preset = StylePreset::from_file(path)?;
        log::info!("registered preset '{}' from {}", preset.name, path.display());
        registry.register(preset)?;
    }
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn print_presets(registry: &PresetRegistry) {
    println!("Available presets:\n");
    for preset in registry.list() {
        let description = preset
            .description
            .as_deref()
            .map(|d| format!(" - {}", d))
            .unwrap_or_default();
        let decorations = preset.enabled_decorations();
        let decorations = if decorations.is_empty() {
            String::new()
        } else {
            format!("  [{}]", decorations.join(", "))
        };
        println!("  {}{}{}", preset.name, description, decorations);

        if let Some(colors) = preset.colors.as_ref().filter(|c| !c.is_empty()) {
            let parts = colors
                .entries()
                .iter()
                .map(|(slot, value)| format!("{}: {}", slot, value))
                .collect::<Vec<_>>()
                .join(", ");
            println!("    colors: {}", parts);
        }
    }
    println!(
        "\nUsage:\n  og-card generate --preset <name>\n  og-card generate --config og-card.json  (with \"style\": {{ \"preset\": \"<name>\" }})"
    );
}

fn run(cli: Cli) -> Result<(), CliError> {
    let registry = PresetRegistry::global();

    match cli.command {
        Command::Presets { preset_file } => {
            register_preset_files(registry, &preset_file)?;
            print_presets(registry);
        }
        Command::Svg { card } => {
            register_preset_files(registry, &card.preset_file)?;
            let mut config = card.document()?;
            if let Some(logo) = config.logo.as_ref().filter(|l| l.is_file()) {
                config.logo = Some(logo.resolve_file().map_err(og_card::Error::from)?);
            }
            println!("{}", build_svg(&config, registry)?);
        }
        Command::Generate {
            card,
            output,
            svg,
            meta,
        } => {
            register_preset_files(registry, &card.preset_file)?;
            let config = card.document()?;
            let result = generate(&config, registry)?;

            write_file(&output, &result.png)?;
            log::info!("wrote {}", output.display());
            println!(
                "PNG: {} ({}x{}, {:.1}KB)",
                output.display(),
                result.width,
                result.height,
                result.png_size() as f64 / 1024.0
            );

            if svg {
                let svg_path = output.with_extension("svg");
                write_file(&svg_path, result.svg.as_bytes())?;
                println!("SVG: {}", svg_path.display());
            }

            if meta {
                let tags = generate_meta_tags(
                    &MetaTagsConfig::from_document(&config)
                        .with_image_size(result.width, result.height),
                );
                println!("\nMeta tags:\n{}", tags.html);
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
