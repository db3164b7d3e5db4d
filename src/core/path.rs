use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// One drawing command. Coordinates are absolute canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

impl PathCommand {
    /// Point the pen ends on, `None` for `Close`.
    #[must_use]
    pub fn end_point(self) -> Option<Point> {
        match self {
            Self::MoveTo { to }
            | Self::LineTo { to }
            | Self::QuadTo { to, .. }
            | Self::CubicTo { to, .. } => Some(to),
            Self::Close => None,
        }
    }

    #[must_use]
    pub fn is_move(self) -> bool {
        matches!(self, Self::MoveTo { .. })
    }

    fn map_points(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            Self::MoveTo { to } => Self::MoveTo { to: f(to) },
            Self::LineTo { to } => Self::LineTo { to: f(to) },
            Self::QuadTo { ctrl, to } => Self::QuadTo {
                ctrl: f(ctrl),
                to: f(to),
            },
            Self::CubicTo { ctrl1, ctrl2, to } => Self::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            Self::Close => Self::Close,
        }
    }
}

/// Ordered list of drawing commands forming one or more subpaths.
///
/// Paths are plain data: the splitter and tests inspect the command list
/// directly and the rendering layer replays it onto its own path object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn move_to(&mut self, to: Point) {
        self.commands.push(PathCommand::MoveTo { to });
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo { to });
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Current pen position, taking `Close` back to its subpath start.
    #[must_use]
    pub fn current_point(&self) -> Option<Point> {
        match self.commands.last()? {
            PathCommand::Close => self.last_subpath_start(),
            command => command.end_point(),
        }
    }

    #[must_use]
    pub fn first_point(&self) -> Option<Point> {
        self.commands.iter().find_map(|command| command.end_point())
    }

    fn last_subpath_start(&self) -> Option<Point> {
        self.commands
            .iter()
            .rev()
            .find(|command| command.is_move())
            .and_then(|command| command.end_point())
    }

    /// End points of every command, in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|command| command.end_point())
    }

    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.commands.iter().filter(|command| command.is_move()).count()
    }

    /// Appends `other`, turning its leading move into a line so both parts
    /// form one continuous stroke.
    pub fn append_connected(&mut self, other: &Path) {
        let mut commands = other.commands.iter().copied();
        match commands.next() {
            Some(PathCommand::MoveTo { to }) if !self.is_empty() => self.line_to(to),
            Some(command) => self.commands.push(command),
            None => return,
        }
        self.commands.extend(commands);
    }

    /// Replaces every curve with `steps` straight segments.
    #[must_use]
    pub fn flattened(&self, steps: usize) -> Path {
        let steps = steps.max(1);
        let mut out = Path::with_capacity(self.commands.len());
        let mut pen = Point::default();
        let mut subpath_start = Point::default();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { to } => {
                    out.move_to(to);
                    pen = to;
                    subpath_start = to;
                }
                PathCommand::LineTo { to } => {
                    out.line_to(to);
                    pen = to;
                }
                PathCommand::QuadTo { ctrl, to } => {
                    for step in 1..=steps {
                        let t = step as f64 / steps as f64;
                        out.line_to(quad_point(pen, ctrl, to, t));
                    }
                    pen = to;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    for step in 1..=steps {
                        let t = step as f64 / steps as f64;
                        out.line_to(cubic_point(pen, ctrl1, ctrl2, to, t));
                    }
                    pen = to;
                }
                PathCommand::Close => {
                    out.close();
                    pen = subpath_start;
                }
            }
        }
        out
    }

    /// Reflects the path across the horizontal line `y = axis_y`.
    #[must_use]
    pub fn mirrored_about_y(&self, axis_y: f64) -> Path {
        Path {
            commands: self
                .commands
                .iter()
                .map(|command| command.map_points(|p| Point::new(p.x, 2.0 * axis_y - p.y)))
                .collect(),
        }
    }
}

fn quad_point(from: Point, ctrl: Point, to: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    Point::new(
        mt * mt * from.x + 2.0 * mt * t * ctrl.x + t * t * to.x,
        mt * mt * from.y + 2.0 * mt * t * ctrl.y + t * t * to.y,
    )
}

fn cubic_point(from: Point, ctrl1: Point, ctrl2: Point, to: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * from.x + b * ctrl1.x + c * ctrl2.x + d * to.x,
        a * from.y + b * ctrl1.y + c * ctrl2.y + d * to.y,
    )
}
