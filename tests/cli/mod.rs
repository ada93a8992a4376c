mod output_contracts;
mod parse_contracts;
pub mod support;
