//! answer-i18n - Demo CLI
//!
//! Walks through the localization bootstrap: detection, lookups with
//! fallback, a language switch, locale formatting and the answer icon.

use answer_i18n::core::Config;
use answer_i18n::i18n::{EnvironmentSignals, Localizer};
use answer_i18n::icon::answer_icon;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   answer-i18n - Demo CLI");
    println!("==============================================\n");

    let config = Config::default();

    // 1. Detection
    println!("[1/6] Detecting language...");
    let signals = EnvironmentSignals::capture(&config.detection);
    println!("      Environment: {:?}", signals.variables);
    println!("      System:      {:?}", signals.system);

    let localizer = match Localizer::bootstrap(&config) {
        Ok(l) => l,
        Err(e) => {
            println!("      Could not create HTTP backend: {}", e);
            return;
        }
    };
    println!(
        "      Detected:    {} ({})\n",
        localizer.current_language(),
        localizer.current_locale()
    );

    // 2. Supported languages
    println!("[2/6] Supported languages:");
    for lang in localizer.languages().iter() {
        println!("      {:<4} {:<10} {}", lang.code, lang.name, lang.locale);
    }
    println!();

    // 3. Lookups
    let keys = ["chatEmptyStateTitle", "clearChat", "labels.useSemanticRanker", "no.such.key"];
    for (step, code) in [("3/6", "en"), ("4/6", "da"), ("5/6", "fr")] {
        localizer.load_language(code).await;
        println!(
            "[{}] Requested '{}', active '{}' ({})",
            step,
            code,
            localizer.current_language(),
            localizer.current_locale()
        );
        for key in keys {
            println!("      {:<26} => {}", key, localizer.translate(key));
        }

        let today = chrono::Local::now().date_naive();
        let fmt = localizer.formatter();
        let date = fmt.format_date(today);
        let updated = localizer.translate_with("lastUpdated", &[("date", date.as_str())]);
        println!("      {:<26} => {}", "lastUpdated", updated);
        println!("      {:<26} => {}\n", "number", fmt.format_number(1234567.891, 2));
    }

    // 6. Icon
    println!("[6/6] Answer icon:");
    println!("      {}\n", answer_icon().to_svg());

    println!("==============================================");
}
