pub mod date_parsing;
