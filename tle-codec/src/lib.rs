pub use crate::checksum::checksum;
pub use crate::error::{CodecError, LineNumber, Malformed};
pub use crate::formatter::encode;
pub use crate::parser::{
    decode, decode_file, decode_set, decode_unstructured, parse_unstructured_tle_set, split_lines,
};
pub use tle_types::prelude::*;

pub mod checksum;
pub mod error;
pub mod formatter;
pub mod parser;

pub const LINE_DELIMITER: &str = "\n";
pub const TITLE_MAX_LEN: usize = 24;
pub const LINE1_MIN_TOKENS: usize = 9;
pub const LINE2_MIN_TOKENS: usize = 8;
pub const EXPONENT_ZERO: &str = " 00000-0";
