use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Converte un timestamp RFC3339 (es. "2025-11-02T12:34:56Z") nella data breve
/// mostrata accanto alla storia (es. "2 Nov 2025").
/// Ritorna `None` se il timestamp non si parsa: una data illeggibile non deve
/// mai far fallire il render.
pub fn short_date(raw: &str) -> Option<String> {
    let dt = OffsetDateTime::parse(raw, &Rfc3339).ok()?;
    let month = dt.month().to_string();
    // Display di `Month` è il nome inglese completo ("November"): bastano 3 lettere
    Some(format!("{} {} {}", dt.day(), &month[..3], dt.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_of_rfc3339() {
        assert_eq!(short_date("2025-11-02T10:20:30Z").unwrap(), "2 Nov 2025");
    }

    #[test]
    fn short_date_of_garbage_is_none() {
        assert_eq!(short_date("ieri pomeriggio"), None);
    }
}
