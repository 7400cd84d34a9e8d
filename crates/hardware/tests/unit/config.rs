//! Configuration Tests.

use std::io::Write;

use pretty_assertions::assert_eq;
use rvpipe_core::common::error::SimError;
use rvpipe_core::config::{Config, FaultPolicy};

#[test]
fn defaults() {
    let c = Config::default();
    assert!(!c.general.trace_instructions);
    assert_eq!(c.general.max_cycles, 10_000);
    assert_eq!(c.general.fault_policy, FaultPolicy::Halt);
    assert_eq!(c.memory.imem_words, 1024);
    assert_eq!(c.memory.dmem_words, 1024);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_sections_fill_in_defaults() {
    let c = Config::from_json(r#"{ "general": { "max_cycles": 50 } }"#).unwrap();
    assert_eq!(c.general.max_cycles, 50);
    assert_eq!(c.general.fault_policy, FaultPolicy::Halt);
    assert_eq!(c.memory, Config::default().memory);
}

#[test]
fn fault_policy_names() {
    let c = Config::from_json(r#"{ "general": { "fault_policy": "Nop" } }"#).unwrap();
    assert_eq!(c.general.fault_policy, FaultPolicy::Nop);
    let err = Config::from_json(r#"{ "general": { "fault_policy": "Explode" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn wrong_type_is_config_error() {
    let err = Config::from_json(r#"{ "memory": { "imem_words": "lots" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn from_file_reads_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "memory": {{ "dmem_words": 16 }} }}"#).unwrap();
    let c = Config::from_file(file.path()).unwrap();
    assert_eq!(c.memory.dmem_words, 16);
}

#[test]
fn from_file_missing_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}
