use blazecss_lib::blaze_generate::BANNER;
use blazecss_lib::{render_batch, validate, Config, Sheet};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "BlazeCSS")]
#[command(about = "Render JSON stylesheet trees to CSS")]
struct Args {
    /// Input sheet files (JSON).
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output file name. Writes to stdout when omitted.
    #[arg(short, long)]
    output: Option<String>,

    /// Formatting preset.
    #[arg(short, long, value_enum, default_value_t = Preset::Pretty)]
    preset: Preset,

    /// Leave out the generator banner.
    #[arg(long)]
    no_banner: bool,

    /// Drop `no value for ..` comments.
    #[arg(long)]
    no_warnings: bool,

    /// Do not line up declaration values.
    #[arg(long)]
    no_align: bool,

    /// Parse the result with LightningCSS before writing it.
    #[arg(long)]
    check: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Pretty,
    Compact,
    Inline,
}

fn main() -> ExitCode {
    env_logger::init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn config_for(args: &Args) -> Config {
    let mut cfg = match args.preset {
        Preset::Pretty => Config::pretty(),
        Preset::Compact => Config::compact(),
        Preset::Inline => Config::inline(),
    };
    if args.no_banner {
        cfg.banner = false;
    }
    if args.no_warnings {
        cfg.warn = false;
    }
    if args.no_align {
        cfg.align = false;
    }
    cfg
}

fn run(args: &Args) -> blazecss_lib::Result<()> {
    let cfg = config_for(args);

    let mut sheets = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let text = fs::read_to_string(path)?;
        sheets.push(Sheet::from_json(&text)?);
        log::info!("read sheet {}", path);
    }

    // One banner for the whole output, not one per sheet.
    let per_sheet = Config {
        banner: false,
        ..cfg.clone()
    };
    let mut css = render_batch(&per_sheet, &sheets).concat();
    if cfg.banner {
        css.push_str(BANNER);
        css.push_str(&cfg.newline);
    }

    if args.check {
        if cfg.is_inline() {
            log::warn!("skipping --check: inline output is not a stylesheet");
        } else {
            let summary = validate::check(&css)?;
            log::info!("output parses: {} top-level rules", summary.total());
        }
    }

    match &args.output {
        Some(path) => fs::write(path, css)?,
        None => io::stdout().write_all(css.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_and_overrides() {
        let args = Args::try_parse_from([
            "blazecss",
            "--preset",
            "compact",
            "--no-banner",
            "a.json",
            "b.json",
        ])
        .unwrap();
        assert_eq!(args.inputs, vec!["a.json", "b.json"]);
        assert_eq!(config_for(&args), Config::compact());

        let args = Args::try_parse_from(["blazecss", "--no-align", "a.json"]).unwrap();
        let cfg = config_for(&args);
        assert_eq!(args.preset, Preset::Pretty);
        assert!(!cfg.align && cfg.banner);
    }

    #[test]
    fn test_inputs_are_required() {
        assert!(Args::try_parse_from(["blazecss"]).is_err());
    }
}
