use chrono::{DateTime, Utc};

/// Replace every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}

/// `{title}_Registrations_{YYYY-MM-DD}.{extension}`, dated in UTC.
pub fn export_file_name(title: &str, exported_at: DateTime<Utc>, extension: &str) -> String {
    format!(
        "{}_Registrations_{}.{extension}",
        sanitize_title(title),
        exported_at.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_alphanumerics_become_underscores() {
        assert_eq!(sanitize_title("Stellar Hackathon 2.0!"), "Stellar_Hackathon_2_0_");
        assert_eq!(sanitize_title("Café"), "Caf_");
    }

    #[test]
    fn file_name_uses_iso_date() {
        let at = DateTime::from_timestamp(1_758_290_709, 0).expect("timestamp");
        assert_eq!(
            export_file_name("Battleclipse: Finals", at, "xlsx"),
            "Battleclipse__Finals_Registrations_2025-09-19.xlsx"
        );
    }
}
