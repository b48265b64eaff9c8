//! Command layer between the console and the geometry core.
//!
//! A typed line such as `defended Old Town 1 2 30` is parsed into a
//! [`Command`], executed against the loaded [`PointStore`] by
//! [`QueryFacade::execute`], and answered with a [`Response`] whose
//! `Display` output is what the user sees.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::coverage::{Circle, covered_by, is_covered, not_covered};
use crate::error::InputError;
use crate::placement::{PlacementResult, find_optimal};
use crate::point_store::{Point, PointStore};

/// Radius limit used by `optimal` when none is given
pub const DEFAULT_MAX_RADIUS: f64 = 100.0;

const HELP: &str = "\
Commands:
  protected x y r          cities inside the shield at (x, y) with radius r
  not-defended x y r       cities outside the shield
  defended NAME x y r      whether the named city is inside the shield
  optimal [r]              best shield placement with radius at most r
  help                     show this message
  quit                     leave";

/// Settings for a [`QueryFacade`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FacadeConfig {
    /// Radius limit for `optimal` without an explicit argument
    pub default_max_radius: f64,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        FacadeConfig { default_max_radius: DEFAULT_MAX_RADIUS }
    }
}

/// A parsed user command
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Command {
    /// List the cities inside a shield
    Protected {
        /// Shield to test against
        circle: Circle,
    },
    /// List the cities outside a shield
    NotDefended {
        /// Shield to test against
        circle: Circle,
    },
    /// Check whether one named city is inside a shield
    DefendedCheck {
        /// City name, matched ignoring case
        name: String,
        /// Shield to test against
        circle: Circle,
    },
    /// Search for the best shield placement
    OptimalPlacement {
        /// Radius limit, the configured default when `None`
        max_radius: Option<f64>,
    },
    /// Print the command list
    Help,
    /// Leave the session
    Quit,
}

impl Command {
    /// Parses one line of user input.
    ///
    /// The first word selects the command (case-insensitive, short aliases
    /// accepted); the remaining words are its arguments. For `defended`
    /// the last three words are `x y r` and everything before them is the
    /// city name, so names may contain spaces.
    ///
    /// # Errors
    /// Returns an [`InputError`] describing what is wrong with the line.
    ///
    /// # Examples
    /// ```
    /// use shield::prelude::*;
    ///
    /// let command = Command::parse("defended New York 0 0 50").unwrap();
    /// assert_eq!(
    ///     command,
    ///     Command::DefendedCheck { name: "New York".to_string(), circle: Circle::new(0.0, 0.0, 50.0) }
    /// );
    /// ```
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((head, args)) = tokens.split_first() else {
            return Err(InputError::Empty);
        };

        match head.to_lowercase().as_str() {
            "protected" | "p" => Ok(Command::Protected { circle: parse_circle("protected", args)? }),
            "not-defended" | "n" => Ok(Command::NotDefended {
                circle: parse_circle("not-defended", args)?,
            }),
            "defended" | "d" => {
                if args.len() < 4 {
                    return Err(InputError::WrongArity {
                        command: "defended",
                        expected: "a city name followed by x y r",
                        found: args.len(),
                    });
                }
                let (name, coords) = args.split_at(args.len() - 3);
                Ok(Command::DefendedCheck {
                    name: name.join(" "),
                    circle: parse_circle("defended", coords)?,
                })
            }
            "optimal" | "o" => match args {
                [] => Ok(Command::OptimalPlacement { max_radius: None }),
                [radius] => Ok(Command::OptimalPlacement { max_radius: Some(parse_radius(radius)?) }),
                _ => Err(InputError::WrongArity {
                    command: "optimal",
                    expected: "at most one radius",
                    found: args.len(),
                }),
            },
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(InputError::UnknownCommand((*head).to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

fn parse_number(token: &str) -> Result<f64, InputError> {
    let value: f64 = token
        .parse()
        .map_err(|_| InputError::InvalidNumber(token.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NonFinite(token.to_string()));
    }
    Ok(value)
}

fn parse_radius(token: &str) -> Result<f64, InputError> {
    let radius = parse_number(token)?;
    if radius < 0.0 {
        return Err(InputError::NegativeRadius(radius));
    }
    Ok(radius)
}

fn parse_circle(command: &'static str, args: &[&str]) -> Result<Circle, InputError> {
    match args {
        [x, y, radius] => Ok(Circle::new(parse_number(x)?, parse_number(y)?, parse_radius(radius)?)),
        _ => Err(InputError::WrongArity { command, expected: "x y r", found: args.len() }),
    }
}

/// Answer to a [`Command`], formatted for the console by `Display`
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Response {
    /// Names of the cities inside the shield
    Protected(Vec<String>),
    /// Cities outside the shield
    NotDefended(Vec<Point>),
    /// Result of a single city check
    DefenseCheck {
        /// Name as typed by the user
        name: String,
        /// Whether the city is inside the shield
        defended: bool,
    },
    /// Best shield placement
    Placement(PlacementResult),
    /// Command list
    Help,
    /// Session end
    Quit,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Protected(names) if names.is_empty() => write!(f, "No city is protected."),
            Response::Protected(names) => write!(f, "{}", names.join(", ")),
            Response::NotDefended(points) if points.is_empty() => write!(f, "Every city is protected."),
            Response::NotDefended(points) => {
                for (i, point) in points.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{} ({}, {})", point.name, point.x, point.y)?;
                }
                Ok(())
            }
            Response::DefenseCheck { name, defended: true } => write!(f, "{name} is defended."),
            Response::DefenseCheck { name, defended: false } => write!(f, "{name} is not defended."),
            Response::Placement(result) => {
                writeln!(f, "Optimal shield placement:")?;
                writeln!(f, "Center: ({}, {})", result.circle.center_x, result.circle.center_y)?;
                writeln!(f, "Radius: {}", result.circle.radius)?;
                if result.is_empty() {
                    write!(f, "Protected cities: (none)")
                } else {
                    write!(f, "Protected cities: {}", result.covered.join(" "))
                }
            }
            Response::Help => write!(f, "{HELP}"),
            Response::Quit => write!(f, "Bye."),
        }
    }
}

/// Runs commands against a loaded [`PointStore`]
#[derive(Clone, Debug)]
pub struct QueryFacade {
    store: PointStore,
    config: FacadeConfig,
}

impl QueryFacade {
    /// Creates a facade with the default configuration
    pub fn new(store: PointStore) -> Self {
        Self::with_config(store, FacadeConfig::default())
    }

    /// Creates a facade with an explicit configuration
    pub fn with_config(store: PointStore, config: FacadeConfig) -> Self {
        QueryFacade { store, config }
    }

    /// The underlying cities
    pub fn store(&self) -> &PointStore {
        &self.store
    }

    /// Active configuration
    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    /// Names of the cities inside `circle`, in store order
    pub fn protected(&self, circle: &Circle) -> Vec<String> {
        covered_by(self.store.points(), circle)
            .into_iter()
            .map(|point| point.name.clone())
            .collect()
    }

    /// Cities outside `circle`, in store order
    pub fn not_defended(&self, circle: &Circle) -> Vec<Point> {
        not_covered(self.store.points(), circle).into_iter().cloned().collect()
    }

    /// Whether the city named `name` is inside `circle`; unknown names are not defended
    pub fn is_defended(&self, name: &str, circle: &Circle) -> bool {
        is_covered(self.store.points(), name, circle)
    }

    /// Best placement with radius at most `max_radius`, or the configured default
    pub fn optimal_placement(&self, max_radius: Option<f64>) -> PlacementResult {
        find_optimal(self.store.points(), max_radius.unwrap_or(self.config.default_max_radius))
    }

    /// Executes a parsed command
    pub fn execute(&self, command: &Command) -> Response {
        debug!("executing {:?}", command);
        match command {
            Command::Protected { circle } => Response::Protected(self.protected(circle)),
            Command::NotDefended { circle } => Response::NotDefended(self.not_defended(circle)),
            Command::DefendedCheck { name, circle } => Response::DefenseCheck {
                name: name.clone(),
                defended: self.is_defended(name, circle),
            },
            Command::OptimalPlacement { max_radius } => {
                Response::Placement(self.optimal_placement(*max_radius))
            }
            Command::Help => Response::Help,
            Command::Quit => Response::Quit,
        }
    }

    /// Parses and executes one line of user input
    ///
    /// # Errors
    /// Returns the [`InputError`] from [`Command::parse`] when the line is malformed.
    pub fn handle_line(&self, line: &str) -> Result<Response, InputError> {
        let command = Command::parse(line)?;
        Ok(self.execute(&command))
    }
}
