//! Display formatting for catalog values.

pub const UNKNOWN: &str = "Unknown";

/// Catalog placeholders (`unknown`, `n/a`, empty) are shown as "Unknown".
/// Exact match: the catalog spells them in lowercase.
pub fn format_value(value: &str) -> &str {
    match value {
        "" | "unknown" | "n/a" => UNKNOWN,
        v => v,
    }
}

/// Header line above the list.
pub fn summary_label(query: Option<&str>) -> String {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!("Starships found for \"{q}\""),
        None => "Starships in the galactic fleet".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_become_unknown() {
        assert_eq!(format_value(""), UNKNOWN);
        assert_eq!(format_value("unknown"), UNKNOWN);
        assert_eq!(format_value("n/a"), UNKNOWN);
    }

    #[test]
    fn only_exact_placeholders_are_replaced() {
        assert_eq!(format_value("N/A"), "N/A");
        assert_eq!(format_value("Unknown "), "Unknown ");
        assert_eq!(format_value(" "), " ");
    }

    #[test]
    fn real_values_pass_through() {
        assert_eq!(format_value("1050"), "1050");
        assert_eq!(format_value("30-165"), "30-165");
    }

    #[test]
    fn summary_depends_on_query() {
        assert_eq!(summary_label(None), "Starships in the galactic fleet");
        assert_eq!(summary_label(Some("  ")), "Starships in the galactic fleet");
        assert_eq!(summary_label(Some("wing")), "Starships found for \"wing\"");
    }
}
