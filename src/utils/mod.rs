mod helper_functions;
mod line_cursor;
#[cfg(test)]
mod testing;

pub use helper_functions::{is_separator, parse_f64, split_key_value};
pub use line_cursor::LineCursor;

#[cfg(test)]
pub use testing::{get_parsed_test_file, write_temp_lxcat, TEST_LXCAT};
#[cfg(all(test, feature = "local"))]
pub use testing::local_get_parsed_test_file;
