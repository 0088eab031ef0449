//! Integration tests for ansikit.

mod catalog_test;
mod init_test;
