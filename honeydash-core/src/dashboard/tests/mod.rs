mod endpoint_tests;
mod handler_tests;
