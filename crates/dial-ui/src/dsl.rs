//! Builds [`AnalogClock`] widgets from `.mkml` documents.
//!
//! ```mkml
//! AnalogClock "kitchen" {
//!     size: 120
//!     mode: stopwatch
//!     marks: 12
//!     ticks: false
//!     sec_color: #e03c31
//! }
//! ```
//!
//! The optional string after the widget name becomes the instance scope
//! (its CSS class and keyframe prefix); unnamed clocks get `dial-{n}`.

use std::collections::HashSet;

use dial_engine::paint::Color;
use dial_mkml::{Document, Node, Prop, Value, parse_str};

use crate::clock::{ClockConfig, ClockMode};
use crate::error::BuildError;
use crate::widgets::AnalogClock;

/// Widget name recognized in markup.
pub const ANALOG_CLOCK: &str = "AnalogClock";

/// Parses `src` and builds one clock per declaration.
pub fn parse_and_build(src: &str) -> Result<Vec<AnalogClock>, BuildError> {
    let doc = parse_str(src)?;
    build_clocks(&doc)
}

/// Builds one clock per node of `doc`, in source order.
pub fn build_clocks(doc: &Document) -> Result<Vec<AnalogClock>, BuildError> {
    let mut seen = HashSet::new();
    let mut clocks = Vec::with_capacity(doc.nodes.len());

    for (i, node) in doc.nodes.iter().enumerate() {
        if node.widget != ANALOG_CLOCK {
            return Err(BuildError::UnknownWidget { line: node.line, name: node.widget.clone() });
        }

        let scope = match &node.content {
            Some(name) => {
                if !is_scope_name(name) {
                    return Err(BuildError::InvalidName { line: node.line, name: name.clone() });
                }
                name.clone()
            }
            None => format!("dial-{}", i + 1),
        };
        if !seen.insert(scope.clone()) {
            return Err(BuildError::DuplicateName { line: node.line, name: scope });
        }

        let config = config_from_node(node)?;
        log::debug!("mkml: {ANALOG_CLOCK} {scope:?} at line {}: {config:?}", node.line);
        clocks.push(AnalogClock::new(scope, config));
    }

    Ok(clocks)
}

/// Reads a clock configuration from a node's properties.
///
/// Properties apply in source order, so a repeated key keeps its last value.
pub fn config_from_node(node: &Node) -> Result<ClockConfig, BuildError> {
    let mut config = ClockConfig::default();
    for prop in &node.props {
        apply_prop(&mut config, node, prop)?;
    }
    Ok(config)
}

fn apply_prop(config: &mut ClockConfig, node: &Node, prop: &Prop) -> Result<(), BuildError> {
    let invalid = |expected: &'static str| BuildError::InvalidValue {
        line: prop.line,
        key: prop.key.clone(),
        expected,
        found: prop.value.as_attribute(),
    };

    match prop.key.as_str() {
        "size" => match prop.value {
            Value::Number(n) if n.is_finite() && n > 0.0 => config.size = n as f32,
            _ => return Err(invalid("a positive number")),
        },
        "mode" => match &prop.value {
            Value::Str(s) | Value::Ident(s) => {
                config.mode = s
                    .parse::<ClockMode>()
                    .map_err(|_| invalid("`clock` or `stopwatch`"))?;
            }
            _ => return Err(invalid("`clock` or `stopwatch`")),
        },
        "marks" => match prop.value {
            Value::Number(n) if n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 => {
                config.marks = n as u32;
            }
            _ => return Err(invalid("a whole number")),
        },
        // Strings follow attribute rules: anything but "false" is true.
        "ticks" => match &prop.value {
            Value::Bool(b) => config.ticks = *b,
            Value::Str(s) | Value::Ident(s) => config.ticks = s != "false",
            _ => return Err(invalid("a boolean")),
        },
        key => {
            let slot = match key {
                "marks_color" => &mut config.palette.marks,
                "text_color" => &mut config.palette.text,
                "pivot_color" => &mut config.palette.pivot,
                "hour_color" => &mut config.palette.hour,
                "min_color" => &mut config.palette.minute,
                "sec_color" => &mut config.palette.second,
                _ => {
                    return Err(BuildError::UnknownProperty {
                        line: prop.line,
                        widget: node.widget.clone(),
                        key: key.to_string(),
                    });
                }
            };
            match prop.value {
                Value::Color(bytes) => *slot = Color::from_bytes(bytes),
                _ => return Err(invalid("a color like #rrggbb")),
            }
        }
    }
    Ok(())
}

/// A CSS-class-safe identifier.
fn is_scope_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '-' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
