#![allow(clippy::unwrap_used)] // this is test code, it's ok to unwrap
#![allow(dead_code)] // we have a public core::tests module that is only used by tests

pub mod fake_dictionary;

pub use fake_dictionary::{FakeDictionary, FakeProvider};
