//! answer-i18n - Main entry point
//!
//! Looks up front-end translations from the command line, using the same
//! bootstrap (detection, bundled tables, remote loading, English fallback)
//! as the application.

use anyhow::{Context, Result};
use answer_i18n::core::Config;
use answer_i18n::i18n::{LoadStatus, Localizer};
use answer_i18n::icon::answer_icon;
use std::collections::BTreeMap;

const HELP: &str = "\
answer-i18n - look up front-end translations

USAGE:
  answer-i18n [OPTIONS] [KEY [NAME=VALUE]...]

OPTIONS:
  --lang CODE     Switch to CODE before looking up (remembered for next time)
  --languages     List supported languages
  --dump          Print all effective translations as JSON
  --icon          Print the answer icon as SVG
  -h, --help      Print this help
";

struct Args {
    help: bool,
    lang: Option<String>,
    languages: bool,
    dump: bool,
    icon: bool,
    key: Option<String>,
    values: Vec<(String, String)>,
}

fn parse_args() -> Result<Args> {
    let mut pargs = pico_args::Arguments::from_env();

    let mut args = Args {
        help: pargs.contains(["-h", "--help"]),
        lang: pargs.opt_value_from_str("--lang")?,
        languages: pargs.contains("--languages"),
        dump: pargs.contains("--dump"),
        icon: pargs.contains("--icon"),
        key: pargs.opt_free_from_str()?,
        values: Vec::new(),
    };

    for raw in pargs.finish() {
        let raw = raw.to_string_lossy();
        let (name, value) = raw
            .split_once('=')
            .with_context(|| format!("Expected NAME=VALUE, got '{}'", raw))?;
        args.values.push((name.to_string(), value.to_string()));
    }

    Ok(args)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = parse_args()?;

    // Load or create configuration; the logger filter depends on it
    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let default_filter = if config.debug_enabled() { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    log::info!("Starting answer-i18n v{}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        log::warn!("Failed to load config, using defaults: {}", e);
    }

    if args.help {
        print!("{}", HELP);
        return Ok(());
    }

    let localizer = Localizer::bootstrap(&config).context("Failed to set up localization")?;

    if let Some(lang) = &args.lang {
        if localizer.load_language(lang).await == LoadStatus::Failed {
            log::warn!("Translations for '{}' unavailable, falling back to English", lang);
        }
        if config.remember_language(lang) {
            if let Err(e) = config.save() {
                log::warn!("Failed to save language preference: {}", e);
            }
        }
    }

    let mut did_something = false;

    if args.languages {
        let active = localizer.current_language();
        for lang in localizer.languages().iter() {
            let marker = if lang.code == active { "*" } else { " " };
            println!("{} {:<4} {:<10} {}", marker, lang.code, lang.name, lang.locale);
        }
        did_something = true;
    }

    if args.dump {
        let all: BTreeMap<_, _> = localizer.translations().into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        did_something = true;
    }

    if args.icon {
        println!("{}", answer_icon().to_svg());
        did_something = true;
    }

    if let Some(key) = &args.key {
        let values: Vec<(&str, &str)> = args
            .values
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        // Terminal output: plain text, no markup escaping needed
        println!("{}", localizer.translate_with(key, &values).into_inner());
        did_something = true;
    }

    if !did_something {
        print!("{}", HELP);
    }

    Ok(())
}
