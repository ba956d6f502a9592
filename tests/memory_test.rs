//! Allocation accounting for `free_members` and `free`.
//!
//! A counting global allocator tracks live blocks per thread, so each test only sees
//! its own allocations even when the harness runs tests in parallel.

mod common;

use common::{read_test_file, Address, Person, Report};
use mason_core::{from_json, Record};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

struct Counting;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

// realloc keeps the default, which goes through alloc and dealloc
unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = LIVE.try_with(|live| live.set(live.get() + 1));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE.try_with(|live| live.set(live.get() - 1));
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn live() -> isize {
    LIVE.with(Cell::get)
}

#[test]
fn test_free_members_releases_everything() {
    let text = read_test_file("features.json");
    let baseline = live();

    let mut report: Report = from_json(&text).unwrap();
    assert!(live() > baseline);

    report.free_members();
    assert_eq!(live(), baseline);
    assert_eq!(report, Report::default());
}

#[test]
fn test_free_members_then_free_on_a_boxed_record() {
    let text = read_test_file("features.json");
    let baseline = live();

    let mut boxed: Box<Report> = Box::new(from_json(&text).unwrap());
    boxed.free_members();
    assert_eq!(live(), baseline + 1);

    {
        let boxed = boxed;
        (*boxed).free();
    }
    assert_eq!(live(), baseline);
}

#[test]
fn test_free_releases_captured_subtrees() {
    let text = r#"{"raw": [{"a": [1, {"b": "c"}]}, [[[]]], "s"]}"#;
    let baseline = live();

    let person: Person = from_json(text).unwrap();
    assert!(live() > baseline);
    person.free();
    assert_eq!(live(), baseline);
}

#[test]
fn test_object_array_slots_are_reset_in_place() {
    let text = r#"{"history": [{"street": "a"}, {"street": "b"}], "address": {"street": "c"}}"#;
    let baseline = live();

    let mut person: Person = from_json(text).unwrap();
    person.history[0].free_members();
    assert_eq!(person.history[0], Address::default());
    assert_eq!(person.history.len(), 2);

    person.free_members();
    assert!(person.history.is_empty());
    assert!(person.address.is_none());
    assert_eq!(live(), baseline);
}

#[test]
fn test_parse_failure_leaks_nothing() {
    let baseline = live();
    let result = from_json::<Person>(r#"{"name": "unterminated"#);
    assert!(result.is_err());
    drop(result);
    assert_eq!(live(), baseline);
}

#[test]
fn test_serialization_releases_its_tree() {
    let person: Person = from_json(r#"{"name": "Ada", "tags": ["x"]}"#).unwrap();
    let baseline = live();

    let text = person.to_text::<mason_core::JsonBackend>().unwrap();
    assert_eq!(live(), baseline + 1);
    drop(text);
    assert_eq!(live(), baseline);
}
