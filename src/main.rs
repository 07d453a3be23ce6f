mod color;
mod settings;
mod theme;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use color::HexColor;
use settings::FileSettings;
use theme::{CssWriter, Role, ThemeApplier, ThemeMode, ThemeStore, presets, transfer};

#[derive(Debug, Parser)]
#[command(name = "hearth-theme", version, about = "Theme engine for the Hearth home hub")]
struct Cli {
    /// Override settings file path.
    #[arg(long)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current mode and effective palette.
    Show,
    /// Set the theme mode.
    SetMode {
        #[arg(value_enum)]
        mode: ThemeMode,
    },
    /// Flip between light and dark (system mode resolves first).
    Toggle,
    /// Override a single role of the custom palette.
    Set { role: String, color: String },
    /// Shift one role through HSL, slider-style.
    Adjust {
        role: String,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        hue: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        saturation: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lightness: f64,
    },
    /// Apply a named preset as the custom override.
    Preset { name: String },
    /// List the preset catalog.
    Presets,
    /// Export the active theme as a JSON document (suggested file name:
    /// home-hub-theme.json).
    Export {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import a theme document exported earlier (or by the web app).
    Import { file: PathBuf },
    /// Clear the custom override, reverting to the built-in palette.
    Clear,
    /// Render the effective palette as a :root CSS block.
    Css {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let settings = FileSettings::open(cli.settings.as_deref()).context("open settings")?;
    let scheme = theme::detect_system_scheme().unwrap_or_default();
    let mut store = ThemeStore::open(Box::new(settings), scheme);

    match cli.command {
        Command::Show => print_state(&store),
        Command::SetMode { mode } => {
            store.set_mode(mode);
            println!("Mode set to {}.", mode.as_str());
        }
        Command::Toggle => {
            store.toggle_mode();
            println!("Mode set to {}.", store.mode().as_str());
        }
        Command::Set { role, color } => {
            let role = parse_role(&role)?;
            let color: HexColor = color.parse().context("parse color")?;
            let palette = store.effective_palette().with(role, color);
            store.set_custom_palette(palette);
            println!("{} set to {}.", role.css_name(), color);
        }
        Command::Adjust {
            role,
            hue,
            saturation,
            lightness,
        } => {
            let role = parse_role(&role)?;
            let current = store.effective_palette();
            let next = current.get(role).adjust(hue, saturation, lightness);
            store.set_custom_palette(current.with(role, next));
            println!("{} adjusted to {}.", role.css_name(), next);
        }
        Command::Preset { name } => {
            let palette =
                presets::preset(&name).with_context(|| format!("unknown preset `{name}`"))?;
            store.set_custom_palette(palette);
            println!("Applied preset {name}.");
        }
        Command::Presets => {
            for (name, palette) in presets::presets() {
                println!("{name:<14} primary {}", palette.primary);
            }
        }
        Command::Export { name, out } => {
            let doc = transfer::export(&store, name.as_deref())?;
            let raw = serde_json::to_string_pretty(&doc).context("serialize theme document")?;
            match out {
                Some(path) => {
                    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
                    println!("Exported theme to {}.", path.display());
                }
                None => println!("{raw}"),
            }
        }
        Command::Import { file } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("read {}", file.display()))?;
            let palette = transfer::import(&mut store, &raw).context("import theme document")?;
            println!("Imported theme; primary is now {}.", palette.primary);
        }
        Command::Clear => {
            store.clear_custom_palette();
            println!("Custom palette cleared.");
        }
        Command::Css { out } => {
            let mut applier = ThemeApplier::new(CssWriter::new());
            applier.apply(&store.effective_palette());
            let css = applier.surface().render();
            match out {
                Some(path) => {
                    fs::write(&path, css).with_context(|| format!("write {}", path.display()))?;
                    println!("Wrote CSS to {}.", path.display());
                }
                None => print!("{css}"),
            }
        }
    }

    Ok(())
}

fn parse_role(raw: &str) -> anyhow::Result<Role> {
    Role::parse(raw).with_context(|| format!("unknown role `{raw}`"))
}

fn print_state(store: &ThemeStore) {
    println!("mode:     {}", store.mode().as_str());
    println!(
        "resolved: {}",
        if store.resolved_is_dark() { "dark" } else { "light" }
    );
    println!(
        "source:   {}",
        if store.custom_palette().is_some() {
            "custom override"
        } else {
            "built-in"
        }
    );
    for (role, color) in store.effective_palette().iter() {
        println!("  {:<16} {}", role.css_name(), color);
    }
}
