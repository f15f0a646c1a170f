//! TLE decoding
//!
//! Element lines are checksummed, then split on whitespace. Line 1 fields and the
//! line 2 angles are sliced out of those tokens at fixed offsets. The packed mean
//! motion and revolution count at the end of line 2 are sliced from the line tail.

use crate::checksum::{checksum, split_checksum};
use crate::{CodecError, LineNumber, Malformed, LINE1_MIN_TOKENS, LINE2_MIN_TOKENS};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{line_ending, multispace0, not_line_ending, one_of, satisfy},
    combinator::{all_consuming, opt, recognize, verify},
    error::ErrorKind,
    multi::fold_many0,
    sequence::{pair, terminated},
    Err::Error,
};
use std::{fs, ops::Range, path::Path, str::FromStr};
use tle_types::prelude::*;
use tracing::{debug, trace};

pub type ParseResult<I, O, E = nom::error::Error<I>> = std::result::Result<(I, O), nom::Err<E>>;

/// Width of the packed mean motion field on line 2
const MEAN_MOTION_WIDTH: usize = 11;
/// Width of the packed revolution count field on line 2
const REVOLUTIONS_WIDTH: usize = 5;

/// Decode a two or three line element set
pub fn decode(text: &str) -> Result<TleRecord, CodecError> {
    let tle = split_lines(text)?;
    decode_unstructured(&tle)
}

/// Read a whole file and decode its contents as a single element set
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<TleRecord, CodecError> {
    let content = fs::read_to_string(path)?;
    decode(&content)
}

/// Decode a catalog of element sets, each with an optional title line
pub fn decode_set(text: &str) -> Result<Vec<TleRecord>, CodecError> {
    let (rest, set) = parse_unstructured_tle_set(text)
        .map_err(|e| Malformed::CatalogEntry(e.to_string()))?;
    let rest = rest.trim_start();
    if !rest.is_empty() {
        let line = rest.lines().next().unwrap_or_default();
        return Err(Malformed::CatalogEntry(line.to_owned()).into());
    }

    set.iter()
        .enumerate()
        .map(|(idx, tle)| {
            trace!(
                entry = idx,
                titled = tle.has_title(),
                satellite_name = %tle.satellite_name,
                "Decoding catalog entry"
            );
            decode_unstructured(tle)
        })
        .collect()
}

/// Split text into the title and element lines of a single set.
///
/// Blank lines are ignored, every other line is trimmed.
pub fn split_lines(text: &str) -> Result<UnstructuredTle, CodecError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    match lines.as_slice() {
        [line1, line2] => Ok(UnstructuredTle {
            satellite_name: String::new(),
            line1: line1.to_string(),
            line2: line2.to_string(),
        }),
        [name, line1, line2] => Ok(UnstructuredTle {
            satellite_name: name.to_string(),
            line1: line1.to_string(),
            line2: line2.to_string(),
        }),
        _ => Err(Malformed::LineCount(lines.len()).into()),
    }
}

pub fn decode_unstructured(tle: &UnstructuredTle) -> Result<TleRecord, CodecError> {
    let l1 = ElementLine::new(&tle.line1, 1, LINE1_MIN_TOKENS)?;

    let designator = l1.token(1)?;
    let classification = designator
        .chars()
        .last()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(|| l1.invalid("classification"))?;
    let catalog_number = l1.parse(
        "catalog number",
        designator.get(..designator.len() - classification.len_utf8()),
    )?;

    let launch = l1.token(2)?;
    let launch_year = expand_year(l1.parse("launch year", launch.get(0..2))?);
    let launch_number = l1.parse("launch number", launch.get(2..5))?;
    let launch_piece = launch
        .get(5..)
        .ok_or_else(|| l1.invalid("launch piece"))?
        .to_owned();

    let epoch = l1.token(3)?;
    let epoch_year = expand_year(l1.parse("epoch year", epoch.get(0..2))?);
    let epoch_day = l1.parse("epoch day", epoch.get(2..))?;

    let mean_motion_d1 = l1.parse("mean motion first derivative", Some(l1.token(4)?))?;
    let mean_motion_d2 = l1.implied_decimal("mean motion second derivative", 5)?;
    let b_star = l1.implied_decimal("b-star", 6)?;
    let ephemeris_type = l1.parse("ephemeris type", Some(l1.token(7)?))?;
    let element_number = l1.parse("element number", Some(l1.token(8)?))?;

    let l2 = ElementLine::new(&tle.line2, 2, LINE2_MIN_TOKENS)?;

    let inclination = l2.parse("inclination", Some(l2.token(2)?))?;
    let right_ascension = l2.parse("right ascension", Some(l2.token(3)?))?;
    let eccentricity = format!("0.{}", l2.token(4)?);
    let eccentricity = l2.parse("eccentricity", Some(eccentricity.as_str()))?;
    let argument_perigee = l2.parse("argument of perigee", Some(l2.token(5)?))?;
    let mean_anomaly = l2.parse("mean anomaly", Some(l2.token(6)?))?;

    let tail = l2.body.len();
    let revolutions_cols = tail.checked_sub(REVOLUTIONS_WIDTH).map(|start| start..tail);
    let mean_motion_cols = revolutions_cols
        .as_ref()
        .and_then(|r| r.start.checked_sub(MEAN_MOTION_WIDTH))
        .map(|start| start..start + MEAN_MOTION_WIDTH);
    let mean_motion = l2.parse("mean motion", l2.slice(mean_motion_cols))?;
    let revolutions_epoch = l2.parse("revolution number", l2.slice(revolutions_cols))?;

    let record = TleRecord {
        title: tle.satellite_name.trim().to_owned(),
        catalog_number,
        classification,
        launch_year,
        launch_number,
        launch_piece,
        epoch_year,
        epoch_day,
        mean_motion_d1,
        mean_motion_d2,
        b_star,
        ephemeris_type,
        element_number,
        inclination,
        right_ascension,
        eccentricity,
        argument_perigee,
        mean_anomaly,
        mean_motion,
        revolutions_epoch,
    };
    debug!(
        catalog_number = record.catalog_number,
        title = %record.title,
        epoch_year = record.epoch_year,
        epoch_day = record.epoch_day,
        "Decoded TLE"
    );
    Ok(record)
}

/// Two digit years 57..=99 are 19xx, everything else 20xx
fn expand_year(year: u16) -> u16 {
    if year >= 57 {
        1900 + year
    } else {
        2000 + year
    }
}

/// A checksum-validated element line, tokenized on whitespace
struct ElementLine<'a> {
    number: LineNumber,
    /// The line without its checksum digit
    body: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> ElementLine<'a> {
    fn new(line: &'a str, number: LineNumber, min_tokens: usize) -> Result<Self, CodecError> {
        let (body, expected) = split_checksum(line).ok_or(Malformed::MissingChecksum(number))?;
        let computed = checksum(body);
        if computed != expected {
            debug!(line = number, expected, computed, "TLE checksum mismatch");
            return Err(CodecError::ChecksumMismatch {
                line: number,
                expected,
                computed,
            });
        }

        let tokens: Vec<&str> = body.split_whitespace().collect();
        if tokens.len() < min_tokens {
            return Err(Malformed::MissingTokens {
                line: number,
                found: tokens.len(),
                expected: min_tokens,
            }
            .into());
        }

        Ok(Self {
            number,
            body,
            tokens,
        })
    }

    fn token(&self, index: usize) -> Result<&'a str, CodecError> {
        self.tokens.get(index).copied().ok_or_else(|| {
            Malformed::MissingTokens {
                line: self.number,
                found: self.tokens.len(),
                expected: index + 1,
            }
            .into()
        })
    }

    fn slice(&self, range: Option<Range<usize>>) -> Option<&'a str> {
        range.and_then(|r| self.body.get(r))
    }

    fn parse<T: FromStr>(&self, field: &'static str, text: Option<&str>) -> Result<T, CodecError> {
        text.and_then(|t| t.trim().parse().ok())
            .ok_or_else(|| self.invalid(field))
    }

    fn implied_decimal(&self, field: &'static str, index: usize) -> Result<f64, CodecError> {
        let token = self.token(index)?;
        all_consuming(implied_decimal)(token)
            .map(|(_, value)| value)
            .map_err(|_| self.invalid(field))
    }

    fn invalid(&self, field: &'static str) -> CodecError {
        Malformed::InvalidField {
            line: self.number,
            field,
        }
        .into()
    }
}

/// Decimal-point-assumed exponential notation, e.g. `-11606-4` is `-0.11606e-4`
fn implied_decimal(s: &str) -> ParseResult<&str, f64> {
    let (s, sign) = opt(one_of("+-"))(s)?;
    let (s, mantissa) = take_while_m_n(5, 5, |c: char| c.is_ascii_digit())(s)?;
    let (s, exponent) = recognize(pair(one_of("+-"), satisfy(|c| c.is_ascii_digit())))(s)?;
    let value: f64 = format!("0.{mantissa}e{exponent}")
        .parse()
        .map_err(|_| Error(nom::error::Error::new(s, ErrorKind::Float)))?;
    Ok((s, if sign == Some('-') { -value } else { value }))
}

/// Split a catalog into its element sets without parsing the element lines
pub fn parse_unstructured_tle_set(set: &str) -> ParseResult<&str, Vec<UnstructuredTle>> {
    fold_many0(
        tle,
        Vec::new,
        |mut tle_set: Vec<UnstructuredTle>, tle| {
            tle_set.push(tle);
            tle_set
        },
    )(set)
}

fn tle(s: &str) -> ParseResult<&str, UnstructuredTle> {
    let (s, _) = multispace0(s)?;
    let (s, name) = opt(terminated(title_line, line_ending))(s)?;
    let (s, _) = multispace0(s)?;
    let (s, line1) = element_line(s, "1 ")?;
    let (s, _) = multispace0(s)?;
    let (s, line2) = element_line(s, "2 ")?;
    Ok((
        s,
        UnstructuredTle {
            satellite_name: name.map(str::trim).unwrap_or_default().to_owned(),
            line1: line1.trim().to_owned(),
            line2: line2.trim().to_owned(),
        },
    ))
}

fn title_line(s: &str) -> ParseResult<&str, &str> {
    verify(not_line_ending, |l: &str| {
        !l.trim().is_empty() && !l.starts_with("1 ") && !l.starts_with("2 ")
    })(s)
}

fn element_line<'a>(s: &'a str, marker: &'static str) -> ParseResult<&'a str, &'a str> {
    verify(not_line_ending, |l: &str| l.starts_with(marker))(s)
}
