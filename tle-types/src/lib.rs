pub mod prelude;
pub mod record;
pub mod tle;
