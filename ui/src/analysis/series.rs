//! Numeric series extraction from uploaded markup documents.

use quick_xml::events::Event;
use quick_xml::Reader;
use rand::Rng;
use thiserror::Error;

/// Longest series handed to the chart and report (two years of monthly samples).
pub const MAX_SERIES_LEN: usize = 24;

const SYNTHETIC_LOW: f64 = 0.3;
const SYNTHETIC_HIGH: f64 = 0.9;

/// Everything a lenient pass over the markup could recover.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkupScan {
    /// Numeric tokens in document order.
    pub numbers: Vec<f64>,
    /// Lower-cased local names of every element encountered.
    pub tags: Vec<String>,
    /// Set when the reader gave up part way; `numbers` and `tags` keep what came before.
    pub error: Option<ScanError>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    #[error("markup error near byte {position}: {message}")]
    Malformed { position: u64, message: String },
}

/// How the series shown to the user was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSource {
    /// Parsed from the document; `total` counts every numeric token, not just the charted ones.
    Extracted { total: usize },
    /// Nothing numeric in the document, so random values stand in.
    Synthetic,
}

impl SeriesSource {
    pub fn status_message(&self) -> String {
        match self {
            SeriesSource::Extracted { total } => {
                format!("Se encontraron {total} valores numéricos.")
            }
            SeriesSource::Synthetic => {
                "No se encontraron valores numéricos útiles, se generó serie aleatoria.".to_string()
            }
        }
    }
}

/// Scan markup leniently: unclosed or mismatched tags are tolerated and a hard
/// syntax error only stops the scan.
///
/// Every element contributes the numbers of its full text content, descendants
/// included, in the order the elements open. A value nested two levels deep is
/// therefore counted once for each enclosing element.
pub fn scan_markup(markup: &str) -> MarkupScan {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().check_end_names = false;

    let mut scan = MarkupScan::default();
    // Text content per element, indexed by start-tag order.
    let mut contents: Vec<String> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => {
                scan.tags.push(local_name(element.local_name().as_ref()));
                open.push(contents.len());
                contents.push(String::new());
            }
            Ok(Event::Empty(element)) => {
                scan.tags.push(local_name(element.local_name().as_ref()));
            }
            Ok(Event::End(_)) => {
                open.pop();
            }
            Ok(Event::Text(text)) => {
                let content = text
                    .unescape()
                    .map(|cow| cow.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(&text).into_owned());
                append_text(&mut contents, &open, &content);
            }
            Ok(Event::CData(data)) => {
                let content = String::from_utf8_lossy(&data.into_inner()).into_owned();
                append_text(&mut contents, &open, &content);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                scan.error = Some(ScanError::Malformed {
                    position: reader.buffer_position() as u64,
                    message: err.to_string(),
                });
                break;
            }
        }
    }

    for content in &contents {
        scan.numbers.extend(content.split_whitespace().filter_map(parse_token));
    }
    scan
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_lowercase()
}

fn append_text(contents: &mut [String], open: &[usize], text: &str) {
    for &idx in open {
        contents[idx].push_str(text);
    }
}

/// Numeric value of a token, following the browser's `Number()` conversion:
/// decimal and exponent forms, unsigned `0x`/`0o`/`0b` literals and the exact
/// spelling `Infinity`. Anything else, `NaN` included, is not a number.
fn parse_token(token: &str) -> Option<f64> {
    if let Some(value) = parse_radix_literal(token) {
        return Some(value);
    }

    let unsigned = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);
    let spelled_out = unsigned.starts_with(|c: char| c.is_ascii_alphabetic());
    if spelled_out && unsigned != "Infinity" {
        return None;
    }

    token.parse::<f64>().ok().filter(|value| !value.is_nan())
}

fn parse_radix_literal(token: &str) -> Option<f64> {
    let (radix, digits) = match token.get(..2)? {
        "0x" | "0X" => (16, &token[2..]),
        "0o" | "0O" => (8, &token[2..]),
        "0b" | "0B" => (2, &token[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|value| value as f64)
}

/// Min-max normalization onto `[0, 1]`.
///
/// A constant input divides by zero and yields `NaN` for every element; callers
/// chart and report that as-is.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    values.iter().map(|value| (value - min) / span).collect()
}

/// Placeholder series, uniform in `[0.3, 0.9)`.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R) -> Vec<f64> {
    (0..MAX_SERIES_LEN)
        .map(|_| rng.gen_range(SYNTHETIC_LOW..SYNTHETIC_HIGH))
        .collect()
}

/// First `MAX_SERIES_LEN` numbers of the scan, normalized, or a synthetic series
/// when the document held nothing numeric.
pub fn series_from_scan<R: Rng + ?Sized>(scan: &MarkupScan, rng: &mut R) -> (Vec<f64>, SeriesSource) {
    if scan.numbers.is_empty() {
        return (synthesize(rng), SeriesSource::Synthetic);
    }

    let take = scan.numbers.len().min(MAX_SERIES_LEN);
    (
        normalize(&scan.numbers[..take]),
        SeriesSource::Extracted {
            total: scan.numbers.len(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn scan_collects_numbers_and_tags() {
        let scan = scan_markup("<NDVI_values>0.1 0.4\n 0.9</NDVI_values>");
        assert_eq!(scan.numbers, vec![0.1, 0.4, 0.9]);
        assert_eq!(scan.tags, vec!["ndvi_values"]);
        assert!(scan.error.is_none());
    }

    #[test]
    fn nested_values_are_read_from_every_enclosing_element() {
        let scan = scan_markup("<serie>\n<ndvi>0.2</ndvi>\n<ndvi>0.8</ndvi>\n</serie>");
        assert_eq!(scan.numbers, vec![0.2, 0.8, 0.2, 0.8]);
        assert_eq!(scan.tags, vec!["serie", "ndvi", "ndvi"]);

        let scan = scan_markup("<lut>\n<gain>1</gain>\n<note>peak 2</note>\n<empty/>\n</lut>");
        assert_eq!(scan.numbers, vec![1.0, 2.0, 1.0, 2.0]);
        assert_eq!(scan.tags, vec!["lut", "gain", "note", "empty"]);
    }

    #[test]
    fn adjacent_child_text_runs_together() {
        // `<a>1</a><b>2</b>` reads as "12" from the parent.
        let scan = scan_markup("<r><a>1</a><b>2</b></r>");
        assert_eq!(scan.numbers, vec![12.0, 1.0, 2.0]);
    }

    #[test]
    fn scan_skips_non_numeric_tokens() {
        let scan = scan_markup("<a>abc 1e2 NaN -3 12px</a>");
        assert_eq!(scan.numbers, vec![100.0, -3.0]);
    }

    #[test]
    fn only_the_exact_infinity_spelling_is_numeric() {
        let scan = scan_markup("<v>0.1 inf INF +inf infinity -INFINITY 0.5</v>");
        assert_eq!(scan.numbers, vec![0.1, 0.5]);

        let scan = scan_markup("<v>Infinity -Infinity +Infinity</v>");
        assert_eq!(scan.numbers, vec![f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY]);
    }

    #[test]
    fn radix_literals_are_numeric() {
        let scan = scan_markup("<v>0x1A 0b101 0o17 0x -0x10 0xZZ</v>");
        assert_eq!(scan.numbers, vec![26.0, 5.0, 15.0]);
    }

    #[test]
    fn scan_tolerates_mismatched_end_tags() {
        let scan = scan_markup("<root> <v>1</w> <v>2</v> </root>");
        assert_eq!(scan.numbers, vec![1.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn scan_reads_cdata() {
        let scan = scan_markup("<gains><![CDATA[4 5 6]]></gains>");
        assert_eq!(scan.numbers, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn scan_of_empty_document_is_empty() {
        let scan = scan_markup("");
        assert!(scan.numbers.is_empty());
        assert!(scan.tags.is_empty());
    }

    #[test]
    fn normalize_maps_onto_unit_interval() {
        let normalized = normalize(&[2.0, 4.0, 6.0]);
        assert_eq!(normalized, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn normalize_constant_input_yields_nan() {
        let normalized = normalize(&[3.0, 3.0, 3.0]);
        assert_eq!(normalized.len(), 3);
        assert!(normalized.iter().all(|value| value.is_nan()));
    }

    #[test]
    fn synthetic_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = synthesize(&mut rng);
        assert_eq!(values.len(), MAX_SERIES_LEN);
        assert!(values.iter().all(|v| (0.3..0.9).contains(v)));
    }

    #[test]
    fn series_is_truncated_but_total_is_reported() {
        let numbers: Vec<String> = (0..30).map(|n| n.to_string()).collect();
        let markup = format!("<d>{}</d>", numbers.join(" "));
        let mut rng = StdRng::seed_from_u64(1);

        let (series, source) = series_from_scan(&scan_markup(&markup), &mut rng);
        assert_eq!(series.len(), MAX_SERIES_LEN);
        assert_eq!(series[0], 0.0);
        assert_eq!(series[MAX_SERIES_LEN - 1], 1.0);
        assert_eq!(source, SeriesSource::Extracted { total: 30 });
        assert_eq!(source.status_message(), "Se encontraron 30 valores numéricos.");
    }

    #[test]
    fn empty_document_falls_back_to_synthetic_series() {
        let mut rng = StdRng::seed_from_u64(42);
        let (series, source) = series_from_scan(&scan_markup(""), &mut rng);
        assert_eq!(series.len(), 24);
        assert_eq!(source, SeriesSource::Synthetic);
        assert_eq!(
            source.status_message(),
            "No se encontraron valores numéricos útiles, se generó serie aleatoria."
        );
    }
}
