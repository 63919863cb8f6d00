//! Vector path descriptions, printed in SVG path-data syntax.

use std::fmt;

/// Format a coordinate with at most two decimals, dropping trailing zeros
/// and a trailing decimal point (`120.00` → `120`, `10.50` → `10.5`).
pub fn pretty_number(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Close,
}

impl PathCommand {
    /// End point of the command, if it has one.
    pub fn point(&self) -> Option<(f64, f64)> {
        match *self {
            PathCommand::MoveTo(x, y) | PathCommand::LineTo(x, y) => Some((x, y)),
            PathCommand::Close => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(x, y) => write!(f, "M {} {}", pretty_number(x), pretty_number(y)),
            PathCommand::LineTo(x, y) => write!(f, "L {} {}", pretty_number(x), pretty_number(y)),
            PathCommand::Close => f.write_str("z"),
        }
    }
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectrumPath {
    commands: Vec<PathCommand>,
}

impl SpectrumPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(x, y));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo(x, y));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Split into subpaths, each starting at a `MoveTo`. Close commands are
    /// dropped; callers that care use [`SpectrumPath::commands`].
    pub fn subpaths(&self) -> Vec<Vec<(f64, f64)>> {
        let mut out: Vec<Vec<(f64, f64)>> = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(x, y) => out.push(vec![(x, y)]),
                PathCommand::LineTo(x, y) => match out.last_mut() {
                    Some(current) => current.push((x, y)),
                    None => out.push(vec![(x, y)]),
                },
                PathCommand::Close => {}
            }
        }
        out
    }

    /// Path data string, e.g. `M 0 26 L 3.75 12 z`.
    pub fn to_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SpectrumPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}
