//! Text format for replaying pointer events.
//!
//! One event per line: `press|release|enter|exit <x> <y>`. Blank lines and
//! lines starting with `#` are ignored. A drag path `x,y;x,y;...` expands to a
//! press on the first point, an enter on every point, and a release on the
//! last one.

use super::events::PointerEvent;
use thiserror::Error;

/// Errors that can occur while parsing an event script or drag path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown event '{name}'")]
    UnknownEvent { line: usize, name: String },

    #[error("line {line}: expected '<event> <x> <y>'")]
    Malformed { line: usize },

    #[error("line {line}: invalid coordinate '{value}'")]
    InvalidCoordinate { line: usize, value: String },

    #[error("invalid drag point '{0}', expected 'x,y'")]
    InvalidPoint(String),

    #[error("drag path is empty")]
    EmptyPath,
}

/// Parses a multi-line event script.
pub fn parse_script(source: &str) -> Result<Vec<PointerEvent>, ScriptError> {
    let mut events = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = text.split_whitespace().collect();
        let [name, x, y] = parts.as_slice() else {
            return Err(ScriptError::Malformed { line });
        };

        let x = parse_coord(x, line)?;
        let y = parse_coord(y, line)?;

        let event = match name.to_ascii_lowercase().as_str() {
            "press" | "touch" => PointerEvent::Press { x, y },
            "release" => PointerEvent::Release { x, y },
            "enter" => PointerEvent::Enter { x, y },
            "exit" => PointerEvent::Exit { x, y },
            _ => {
                return Err(ScriptError::UnknownEvent {
                    line,
                    name: name.to_string(),
                });
            }
        };
        events.push(event);
    }

    Ok(events)
}

/// Expands a `x,y;x,y;...` drag path into press/enter/release events.
pub fn parse_drag(path: &str) -> Result<Vec<PointerEvent>, ScriptError> {
    let points = path
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(parse_point)
        .collect::<Result<Vec<_>, _>>()?;

    let (Some(&(fx, fy)), Some(&(lx, ly))) = (points.first(), points.last()) else {
        return Err(ScriptError::EmptyPath);
    };

    let mut events = Vec::with_capacity(points.len() + 2);
    events.push(PointerEvent::Press { x: fx, y: fy });
    events.extend(points.iter().map(|&(x, y)| PointerEvent::Enter { x, y }));
    events.push(PointerEvent::Release { x: lx, y: ly });
    Ok(events)
}

fn parse_point(point: &str) -> Result<(i32, i32), ScriptError> {
    let invalid = || ScriptError::InvalidPoint(point.to_string());
    let (x, y) = point.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok((x, y))
}

fn parse_coord(value: &str, line: usize) -> Result<i32, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidCoordinate {
        line,
        value: value.to_string(),
    })
}
