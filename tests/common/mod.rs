#![allow(dead_code)]

use mason_core::{record, scalar_alias};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Ok,
    Warn,
    Unknown(i32),
}

impl From<i32> for Status {
    fn from(value: i32) -> Self {
        match value {
            0 => Status::Ok,
            1 => Status::Warn,
            other => Status::Unknown(other),
        }
    }
}

impl From<Status> for i32 {
    fn from(value: Status) -> Self {
        match value {
            Status::Ok => 0,
            Status::Warn => 1,
            Status::Unknown(other) => other,
        }
    }
}

scalar_alias!(Status => i32);

record! {
    pub struct Address {
        field street: Option<String>,
        field zip: i32,
    }
}

record! {
    pub struct Person {
        field name: Option<String>,
        field id: i64,
        field score: f64,
        field active: bool,
        field status: Status,
        array tags: Option<String>,
        object address: Address,
        objects history: Address,
        multi raw,
    }
}

record! {
    pub struct Report {
        object owner: Person,
        objects people: Person,
    }
}

pub fn address(street: &str, zip: i32) -> Address {
    Address {
        street: Some(street.to_string()),
        zip,
    }
}

pub fn get_test_file_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(filename)
}

pub fn read_test_file(filename: &str) -> String {
    let path = get_test_file_path(filename);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {:?}", path))
}
