use crate::models::InterestRecord;

/// Field separator of the statistical dataset
const DELIMITER: char = ',';

/// Minimum number of fields a data row must carry
const MIN_FIELDS: usize = 9;

const INTEREST_FIELD: usize = 7;
const PERSONALITY_FIELD: usize = 8;

/// Decodes raw dataset bytes; invalid UTF-8 sequences become U+FFFD
pub fn decode_dataset(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Parses raw dataset text into interest records
///
/// The first line is a header and is always discarded. Rows with fewer than
/// nine fields, or with a blank interest or personality, are skipped silently.
/// An empty result means nothing usable was found; callers keep whatever
/// dataset was active before.
pub fn parse_dataset(text: &str) -> Vec<InterestRecord> {
    text.lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<InterestRecord> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let interest = fields[INTEREST_FIELD].trim();
    let personality = fields[PERSONALITY_FIELD].trim();
    if interest.is_empty() || personality.is_empty() {
        return None;
    }

    Some(InterestRecord::new(personality, interest))
}
