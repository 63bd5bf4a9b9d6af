//! End-to-end builder generation from Go source.
//!
//! Run `cargo insta review` to update snapshots after intentional changes.

use gobble_codegen::{Error, build_unit, generate};
use gobble_syntax::{ast::SourceFile, parse_source};

fn parse(src: &str) -> SourceFile {
    parse_source(src, "input.go").expect("Failed to parse Go source")
}

const MODELS: &str = r#"
package models

import (
	"time"
)

type Role int

type User struct {
	ID        int64
	Name      string
	Email     *string
	Tags      []string
	CreatedAt time.Time
	password  string
	Internal  bool `json:"-" builder:"ignore"`
}

type Marker struct{}

type Hidden struct {
	secret string
	Skip   int `builder:"ignore"`
}
"#;

#[test]
fn test_user_builder() {
    let output = generate(&parse(MODELS), "User").expect("Failed to generate builder");
    insta::assert_snapshot!("user_builder", output);
}

#[test]
fn test_empty_builders() {
    let file = parse(MODELS);
    let marker = generate(&file, "Marker").expect("Failed to generate builder");
    insta::assert_snapshot!("marker_builder", marker);

    let hidden = build_unit(&file, "Hidden").expect("Failed to build unit");
    assert!(hidden.is_empty());
}

#[test]
fn test_pipeline_builder() {
    let file = parse(
        r#"
package pipeline

import "context"

type Stage struct {
	Input   <-chan string
	Output  chan<- int
	Errors  chan error
	Lookup  map[string][]*Stage
	Handler func(context.Context, ...string) (int, error)
	Buffer  [16]byte
	Type    string
}
"#,
    );

    let output = generate(&file, "Stage").expect("Failed to generate builder");
    insta::assert_snapshot!("pipeline_builder", output);
}

#[test]
fn test_local_struct_in_function() {
    let file = parse(
        r#"
package main

func main() {
	if true {
		type Options struct {
			Verbose bool
		}
	}
}
"#,
    );

    let unit = build_unit(&file, "Options").expect("Failed to build unit");
    assert_eq!(unit.module_name(), "main");
    assert_eq!(unit.fields().len(), 1);
    assert_eq!(unit.fields()[0].type_signature(), "bool");
}

#[test]
fn test_struct_in_function_literal_initializer() {
    let file = parse(
        r#"
package main

var setup = func() {
	type Local struct {
		A int
	}
}
"#,
    );

    let unit = build_unit(&file, "Local").expect("Failed to build unit");
    assert_eq!(unit.target_name(), "Local");
    assert_eq!(unit.fields()[0].name(), "A");
}

#[test]
fn test_non_struct_target() {
    let file = parse(MODELS);
    assert_eq!(
        build_unit(&file, "Role"),
        Err(Error::NotFound {
            target: "Role".to_string()
        })
    );
}

#[test]
fn test_unsupported_field_type() {
    let file = parse(
        r#"
package models

type Config struct {
	Name   string
	Nested struct {
		Level int
	}
}
"#,
    );

    match build_unit(&file, "Config") {
        Err(Error::Extract { target, source }) => {
            assert_eq!(target, "Config");
            assert_eq!(
                *source,
                Error::UnsupportedType {
                    field: "Nested".to_string(),
                    kind: "struct type".to_string()
                }
            );
        }
        other => panic!("expected extraction error, got {other:?}"),
    }
}

#[test]
fn test_multi_name_fields() {
    let file = parse(
        r#"
package geometry

type Point struct {
	X, Y float64
	z    float64
}
"#,
    );

    let unit = build_unit(&file, "Point").expect("Failed to build unit");
    let names: Vec<&str> = unit.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["X", "Y"]);
}
