//! Translation tables shipped with the application

use super::table::TranslationTable;

/// Raw JSON of the bundled tables, keyed by language code
const BUNDLED: [(&str, &str); 2] = [
    ("da", include_str!("../../locales/da/translation.json")),
    ("en", include_str!("../../locales/en/translation.json")),
];

/// Parse the bundled tables. A table that fails to parse is skipped with an error log.
pub fn bundled_tables() -> Vec<(&'static str, TranslationTable)> {
    BUNDLED
        .iter()
        .filter_map(|(code, json)| match TranslationTable::from_json_str(json) {
            Ok(table) => Some((*code, table)),
            Err(e) => {
                log::error!("Bundled translations for '{}' are invalid: {}", code, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_tables_parse() {
        let tables = bundled_tables();
        let codes: Vec<_> = tables.iter().map(|(code, _)| *code).collect();

        assert_eq!(codes, vec!["da", "en"]);
        assert!(tables.iter().all(|(_, table)| !table.is_empty()));
    }

    #[test]
    fn test_danish_keys_exist_in_english() {
        let tables = bundled_tables();
        let da = &tables[0].1;
        let en = &tables[1].1;

        for (key, _) in da.iter() {
            assert!(en.get(key).is_some(), "'{}' missing from en", key);
        }
    }
}
