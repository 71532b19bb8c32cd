//! Unit test suite for the Newsletter2Go client


mod test_client;
mod test_error;
mod test_utils;
