//! Rendering a [`GenerationUnit`] into a Go builder source file.

use std::collections::HashMap;

use gobble_ir::{FieldDescriptor, GenerationUnit};

use crate::{Error, Result, builder::CodeBuilder, naming::unexported};

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "Code generated by gobble. DO NOT EDIT.";

/// Name of the terminal method on every builder.
const BUILD_METHOD: &str = "Build";

/// Receiver names tried in order; the first one no field uses wins.
const RECEIVER_NAMES: &[&str] = &["b", "bldr", "builder"];

/// Turns a generation unit into source text.
pub trait Render {
    fn render(&self, unit: &GenerationUnit) -> Result<String>;
}

/// Renders gofmt-formatted Go builders.
///
/// For a target `User` the output declares an unexported-field `UserBuilder`
/// struct, a `NewUserBuilder` constructor, one chainable setter per field and
/// a terminal `Build() User` method.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoBuilderRenderer;

impl Render for GoBuilderRenderer {
    fn render(&self, unit: &GenerationUnit) -> Result<String> {
        let plan = Plan::new(unit)?;
        let target = unit.target_name();
        let builder = format!("{target}Builder");

        let code = CodeBuilder::go()
            .comment(GENERATED_HEADER)
            .blank()
            .line(&format!("package {}", unit.module_name()))
            .blank();

        let code = if plan.fields.is_empty() {
            code.line(&format!("type {builder} struct{{}}"))
        } else {
            let width = plan.ident_width();
            code.block_with_close(&format!("type {builder} struct {{"), "}", |b| {
                b.each(&plan.fields, |b, (field, ident)| {
                    b.line(&format!("{ident:<width$} {}", field.type_signature()))
                })
            })
        };

        let code = code
            .blank()
            .block_with_close(&format!("func New{builder}() *{builder} {{"), "}", |b| {
                b.line(&format!("return &{builder}{{}}"))
            });

        let receiver = plan.receiver;
        let code = code.each(&plan.fields, |b, (field, ident)| {
            let header = format!(
                "func ({receiver} *{builder}) {}({ident} {}) *{builder} {{",
                field.name(),
                field.type_signature()
            );
            b.blank().block_with_close(&header, "}", |b| {
                b.line(&format!("{receiver}.{ident} = {ident}"))
                    .line(&format!("return {receiver}"))
            })
        });

        let build = format!("func ({receiver} *{builder}) {BUILD_METHOD}() {target} {{");
        let code = code.blank().block_with_close(&build, "}", |b| {
            if plan.fields.is_empty() {
                return b.line(&format!("return {target}{{}}"));
            }
            let width = plan.name_width() + 1;
            b.block_with_close(&format!("return {target}{{"), "}", |b| {
                b.each(&plan.fields, |b, (field, ident)| {
                    let key = format!("{}:", field.name());
                    b.line(&format!("{key:<width$} {receiver}.{ident},"))
                })
            })
        });

        Ok(code.build())
    }
}

/// Identifiers chosen for one builder.
struct Plan<'a> {
    fields: Vec<(&'a FieldDescriptor, String)>,
    receiver: &'static str,
}

impl<'a> Plan<'a> {
    fn new(unit: &'a GenerationUnit) -> Result<Self> {
        let fail = |message: String| Error::Render {
            target: unit.target_name().to_string(),
            message,
        };

        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut fields = Vec::with_capacity(unit.fields().len());
        for field in unit.fields() {
            if field.name() == BUILD_METHOD {
                return Err(fail(format!(
                    "field {BUILD_METHOD} conflicts with the {BUILD_METHOD} method"
                )));
            }
            let ident = unexported(field.name());
            if let Some(previous) = seen.insert(ident.clone(), field.name()) {
                return Err(fail(format!(
                    "fields {previous} and {} both map to identifier '{ident}'",
                    field.name()
                )));
            }
            fields.push((field, ident));
        }

        let receiver = RECEIVER_NAMES
            .iter()
            .copied()
            .find(|name| !seen.contains_key(*name))
            .ok_or_else(|| {
                fail(format!(
                    "every receiver name ({}) is taken by a field",
                    RECEIVER_NAMES.join(", ")
                ))
            })?;

        Ok(Self { fields, receiver })
    }

    fn ident_width(&self) -> usize {
        self.fields
            .iter()
            .map(|(_, ident)| ident.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn name_width(&self) -> usize {
        self.fields
            .iter()
            .map(|(field, _)| field.name().chars().count())
            .max()
            .unwrap_or(0)
    }
}
