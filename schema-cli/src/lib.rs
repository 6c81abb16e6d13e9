//! A schema-driven, strongly-typed command-line parser: declare a set of
//! named parameters, hand over the raw argument vector, and get back either
//! fully-typed values or a single user-facing rejection message.

mod arguments;
mod help;
mod parse;
mod schema;

pub use arguments::ArgumentSet;
pub use schema::{
    BooleanParameter, EnumOption, EnumParameter, IntegerParameter, Length, Name, ParameterSet,
    StringParameter,
};

/// A complete command-line interface: the identity shown in the help header
/// plus the declared parameters.
pub struct Command {
    pub name: &'static str,
    pub version: &'static str,
    pub help_text: &'static str,
    pub parameters: ParameterSet,
}

impl Command {
    /// Validates and decodes an argument vector against the declared
    /// parameters. Indices 0 and 1 are the program and invocation
    /// identifiers and are never matched against any name.
    ///
    /// This touches no process state; the caller supplies the tokens and
    /// receives an explicit result.
    pub fn parse(&self, argv: &[String]) -> Result<Parse<ArgumentSet>, Error> {
        parse::parse(self, argv)
    }

    /// Parses the real process arguments. A help request prints the usage
    /// block to stdout and exits 0; a validation failure prints its message
    /// to stderr and exits 1.
    pub fn process(&self) -> ArgumentSet {
        let argv: Vec<String> = std::env::args().collect();
        match self.parse(&argv) {
            Ok(Parse::Success(arguments)) => arguments,
            Ok(Parse::Help(help)) => {
                println!("{}", help);
                std::process::exit(0);
            }
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        }
    }
}

/// A help request is not a failure, so a successful parse is one of two
/// things.
pub enum Parse<T> {
    Success(T),
    Help(HelpInfo),
}

pub struct HelpInfo(pub String);

impl std::fmt::Display for HelpInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("command-line argument \"-{short}\"/\"--{long}\" given multiple times.")]
    GivenMultipleTimes {
        short: &'static str,
        long: &'static str,
    },
    #[error("command-line argument \"-{short}\"/\"--{long}\" not given.")]
    NotGiven {
        short: &'static str,
        long: &'static str,
    },
    #[error("no argument given for command-line parameter \"-{short}\"/\"--{long}\".")]
    NoArgument {
        short: &'static str,
        long: &'static str,
    },
    #[error(
        "argument for command-line parameter \"-{short}\"/\"--{long}\" must contain at least {minimum} character(s)."
    )]
    TooFewCharacters {
        short: &'static str,
        long: &'static str,
        minimum: usize,
    },
    #[error(
        "argument for command-line parameter \"-{short}\"/\"--{long}\" cannot contain more than {maximum} character(s)."
    )]
    TooManyCharacters {
        short: &'static str,
        long: &'static str,
        maximum: usize,
    },
    #[error("argument for command-line parameter \"-{short}\"/\"--{long}\" must be an integer.")]
    NotAnInteger {
        short: &'static str,
        long: &'static str,
    },
    #[error("argument for command-line parameter \"-{short}\"/\"--{long}\" must be at least {minimum}.")]
    BelowMinimum {
        short: &'static str,
        long: &'static str,
        minimum: i64,
    },
    #[error(
        "argument for command-line parameter \"-{short}\"/\"--{long}\" cannot be greater than {maximum}."
    )]
    AboveMaximum {
        short: &'static str,
        long: &'static str,
        maximum: i64,
    },
    #[error("argument for command-line parameter \"-{short}\"/\"--{long}\" must be one of {options}.")]
    NotAnOption {
        short: &'static str,
        long: &'static str,
        options: String,
    },
    #[error("unexpected command-line argument \"{0}\".")]
    Unexpected(String),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
