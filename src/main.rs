use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use pyramid_chart::cli::{Cli, ColorChoice, Commands, InitArgs, RenderArgs};
use pyramid_chart::config::{
    Config, ConfigLoader, FileConfigLoader, BAR_HEIGHT_MAX, BAR_HEIGHT_MIN, LOCAL_CONFIG_NAME,
};
use pyramid_chart::error::PyramidError;
use pyramid_chart::layout::{layout, SignMap};
use pyramid_chart::model::{example, FixedSource, PyramidData, RandomSource};
use pyramid_chart::output::{
    ChartFormatter, ColorMode, JsonFormatter, OutputFormat, PyramidView, Style, TextFormatter,
};
use pyramid_chart::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}

fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_render_impl(args: &RenderArgs, cli: &Cli) -> pyramid_chart::Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let style = resolve_style(args, &config)?;

    let mut data = PyramidData::default();
    if args.random || args.seed.is_some() {
        let mut source = args
            .seed
            .map_or_else(RandomSource::new, RandomSource::with_seed);
        data.regenerate(&mut source);
    } else {
        let mut source = FixedSource::new(example());
        data.regenerate(&mut source);
    }

    let signs = SignMap::mirrored("Male", "Female");
    let primitives = layout(data.series(), &signs)?;

    if cli.verbose > 0 {
        eprintln!(
            "Laying out {} series into {} bar primitives",
            data.series().len(),
            primitives.len()
        );
    }

    let view = PyramidView {
        primitives: &primitives,
        signs: &signs,
        style,
    };
    let rendered = match args.format {
        OutputFormat::Text => {
            TextFormatter::new(color_choice_to_mode(cli.color)).format(&view)?
        }
        OutputFormat::Json => JsonFormatter::new().format(&view)?,
    };

    if let Some(path) = &args.output {
        fs::write(path, &rendered)?;
        if !cli.quiet {
            eprintln!("Wrote chart to {}", path.display());
        }
    } else {
        print!("{rendered}");
    }

    Ok(EXIT_SUCCESS)
}

fn resolve_style(args: &RenderArgs, config: &Config) -> pyramid_chart::Result<Style> {
    let bar_height = args.bar_height.unwrap_or(config.style.bar_height);
    if !(BAR_HEIGHT_MIN..=BAR_HEIGHT_MAX).contains(&bar_height) {
        return Err(PyramidError::Config(format!(
            "bar_height must be between {BAR_HEIGHT_MIN} and {BAR_HEIGHT_MAX}, got {bar_height}"
        )));
    }

    let left_color = args
        .left_color
        .as_deref()
        .unwrap_or(&config.style.left_color)
        .parse()?;
    let right_color = args
        .right_color
        .as_deref()
        .unwrap_or(&config.style.right_color)
        .parse()?;

    Ok(Style {
        bar_height,
        left_color,
        right_color,
    })
}

fn load_config(path: Option<&Path>, no_config: bool) -> pyramid_chart::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    match path {
        Some(p) => loader.load_from_path(p),
        None => loader.load(),
    }
}

fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs, cli: &Cli) -> pyramid_chart::Result<i32> {
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_NAME));

    if path.exists() && !args.force {
        return Err(PyramidError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    fs::write(&path, Config::default().to_toml_string()?)?;
    if !cli.quiet {
        println!("Created {}", path.display());
    }

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
