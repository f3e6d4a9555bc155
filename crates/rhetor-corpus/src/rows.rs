//! Row-level helpers shared by the CSV loaders.

use rustc_hash::FxHashMap;

/// Case-insensitive header lookup over a CSV header record.
///
/// The corpus spreadsheets were maintained by hand; `Speaker` and
/// `speaker` both occur in the wild.
pub struct HeaderMap {
    indices: FxHashMap<String, usize>,
}

impl HeaderMap {
    pub fn new(headers: &csv::StringRecord) -> Self {
        let mut indices = FxHashMap::default();
        for (idx, name) in headers.iter().enumerate() {
            // First occurrence wins on duplicate headers.
            indices
                .entry(name.trim().to_ascii_lowercase())
                .or_insert(idx);
        }
        Self { indices }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(&name.to_ascii_lowercase()).copied()
    }

    /// Fetch a trimmed field value, `None` if the column is absent or
    /// the cell is empty.
    pub fn get<'r>(&self, record: &'r csv::StringRecord, name: &str) -> Option<&'r str> {
        let idx = self.index_of(name)?;
        let value = record.get(idx)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// Extract the year from a `DD/MM/YYYY` date, or from a bare year.
pub fn extract_year(date: &str) -> Option<u16> {
    let date = date.trim();
    let candidate = match date.rsplit_once('/') {
        Some((_, year)) => year,
        None => date,
    };
    candidate.parse::<u16>().ok()
}

/// Map a raw metadata filename to its preprocessed counterpart,
/// e.g. `farage_2016.txt` → `farage_2016_cleaned.txt`.
pub fn cleaned_filename(original: &str, suffix: &str) -> String {
    let stem = original.strip_suffix(".txt").unwrap_or(original);
    if stem.ends_with(suffix) {
        format!("{stem}.txt")
    } else {
        format!("{stem}{suffix}.txt")
    }
}

/// Derive a stable speech id from a corpus filename.
pub fn speech_id(filename: &str, cleaned_suffix: &str) -> String {
    let stem = filename.strip_suffix(".txt").unwrap_or(filename);
    stem.strip_suffix(cleaned_suffix).unwrap_or(stem).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_map_is_case_insensitive() {
        let headers = csv::StringRecord::from(vec!["Filename", "SPEAKER", "country"]);
        let map = HeaderMap::new(&headers);
        assert_eq!(map.index_of("filename"), Some(0));
        assert_eq!(map.index_of("Speaker"), Some(1));
        assert_eq!(map.index_of("COUNTRY"), Some(2));
        assert_eq!(map.index_of("category"), None);
    }

    #[test]
    fn test_header_map_skips_empty_cells() {
        let headers = csv::StringRecord::from(vec!["speaker"]);
        let map = HeaderMap::new(&headers);
        let row = csv::StringRecord::from(vec!["   "]);
        assert_eq!(map.get(&row, "speaker"), None);
    }

    #[test]
    fn test_extract_year_from_slash_date() {
        assert_eq!(extract_year("02/09/2004"), Some(2004));
        assert_eq!(extract_year("2016"), Some(2016));
        assert_eq!(extract_year("Unknown"), None);
        assert_eq!(extract_year(""), None);
    }

    #[test]
    fn test_cleaned_filename_mapping() {
        assert_eq!(
            cleaned_filename("farage_2016.txt", "_cleaned"),
            "farage_2016_cleaned.txt"
        );
        assert_eq!(
            cleaned_filename("farage_2016_cleaned.txt", "_cleaned"),
            "farage_2016_cleaned.txt"
        );
        assert_eq!(cleaned_filename("obama_2008", "_cleaned"), "obama_2008_cleaned.txt");
    }

    #[test]
    fn test_speech_id_strips_suffixes() {
        assert_eq!(speech_id("farage_2016_cleaned.txt", "_cleaned"), "farage_2016");
        assert_eq!(speech_id("obama_2008.txt", "_cleaned"), "obama_2008");
    }
}
