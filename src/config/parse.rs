use std::path::PathBuf;
use std::time::Duration;

use super::Settings;
use crate::state::{ProductField, SortOrder};
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};

/// What: Parse settings.conf content into `settings`.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys and unparsable values are logged at debug level and skipped.
/// - `sort_by = none` disables the initial sort.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        let applied = match key.as_str() {
            "items_per_page" | "per_page" | "page_size" => match val.parse::<usize>() {
                Ok(v) if v > 0 => {
                    settings.items_per_page = v;
                    true
                }
                _ => false,
            },
            "sort_by" | "sort" => {
                if val.eq_ignore_ascii_case("none") {
                    settings.sort_by = None;
                    true
                } else if let Some(f) = ProductField::from_config_key(&val) {
                    settings.sort_by = Some(f);
                    true
                } else {
                    false
                }
            }
            "sort_order" | "order" => SortOrder::from_config_key(&val)
                .map(|o| settings.sort_order = o)
                .is_some(),
            "toast_duration_ms" | "toast_ms" => val
                .parse::<u64>()
                .map(|v| settings.toast_duration = Duration::from_millis(v))
                .is_ok(),
            "fetch_latency_ms" => val
                .parse::<u64>()
                .map(|v| settings.latency.fetch = Duration::from_millis(v))
                .is_ok(),
            "mutation_latency_ms" | "save_latency_ms" => val
                .parse::<u64>()
                .map(|v| settings.latency.mutation = Duration::from_millis(v))
                .is_ok(),
            "dataset_path" | "dataset" => {
                settings.dataset_path = if val.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(val.as_str()))
                };
                true
            }
            "show_keybinds_footer" | "keybinds_visible" => {
                settings.show_keybinds_footer = parse_bool(&val);
                true
            }
            _ => false,
        };
        if !applied {
            tracing::debug!(key = %key, value = %val, "[Config] ignoring setting");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Every recognized key is applied, aliases included
    ///
    /// - Input: A settings file touching all keys
    /// - Output: Settings carry the parsed values
    fn config_parse_all_keys() {
        let content = "\
items-per-page = 10
sort = Name
order = ascending
toast_duration_ms = 1500 # shorter
fetch_latency_ms = 0
mutation_latency_ms = 25
dataset = /srv/data/products.json
keybinds_visible = off
";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s.items_per_page, 10);
        assert_eq!(s.sort_by, Some(ProductField::Name));
        assert_eq!(s.sort_order, SortOrder::Asc);
        assert_eq!(s.toast_duration, Duration::from_millis(1500));
        assert_eq!(s.latency.fetch, Duration::ZERO);
        assert_eq!(s.latency.mutation, Duration::from_millis(25));
        assert_eq!(
            s.dataset_path.as_deref(),
            Some(std::path::Path::new("/srv/data/products.json"))
        );
        assert!(!s.show_keybinds_footer);
    }

    #[test]
    /// What: Invalid values leave defaults in place
    fn config_parse_invalid_values_ignored() {
        let mut s = Settings::default();
        parse_settings(
            "items_per_page = 0\nsort_by = weight\nsort_order = sideways\ntoast_ms = soon\n",
            &mut s,
        );
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: `sort_by = none` turns off the initial sort
    fn config_parse_sort_none() {
        let mut s = Settings::default();
        parse_settings("sort_by = none", &mut s);
        assert_eq!(s.sort_by, None);
    }
}
