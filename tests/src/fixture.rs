//! One schema exercising every kind: two strings, two integers, two
//! three-option enums, three booleans, plus helpers for perturbing a known
//! valid stream one token at a time.

use schema_cli::{
    ArgumentSet, BooleanParameter, Command, EnumOption, EnumParameter, IntegerParameter, Length,
    Name, Parse, ParameterSet, StringParameter,
};

pub fn command() -> Command {
    Command {
        name: "test name",
        version: "1.2.3",
        help_text: "test help text",
        parameters: ParameterSet::new()
            .string(
                "test_string_a",
                StringParameter {
                    name: Name {
                        short: "test-string-a-short-name",
                        long: "test-string-a-long-name",
                    },
                    help_text: "test string a help text",
                    argument_help_text: "test string a argument help text",
                    length: Length {
                        minimum: 5,
                        maximum: 10,
                    },
                },
            )
            .string(
                "test_string_b",
                StringParameter {
                    name: Name {
                        short: "test-string-b-short-name",
                        long: "test-string-b-long-name",
                    },
                    help_text: "test string b help text",
                    argument_help_text: "test string b argument help text",
                    length: Length {
                        minimum: 2,
                        maximum: 4,
                    },
                },
            )
            .integer(
                "test_integer_a",
                IntegerParameter {
                    name: Name {
                        short: "test-integer-a-short-name",
                        long: "test-integer-a-long-name",
                    },
                    help_text: "test integer a help text",
                    argument_help_text: "test integer a argument help text",
                    minimum: -4,
                    maximum: 3,
                },
            )
            .integer(
                "test_integer_b",
                IntegerParameter {
                    name: Name {
                        short: "test-integer-b-short-name",
                        long: "test-integer-b-long-name",
                    },
                    help_text: "test integer b help text",
                    argument_help_text: "test integer b argument help text",
                    minimum: 12,
                    maximum: 24,
                },
            )
            .enumeration(
                "test_enum_a",
                EnumParameter {
                    name: Name {
                        short: "test-enum-a-short-name",
                        long: "test-enum-a-long-name",
                    },
                    help_text: "test enum a help text",
                    options: vec![
                        (
                            "test_option_a_a",
                            EnumOption {
                                name: Name {
                                    short: "test-option-a-a-short-name",
                                    long: "test-option-a-a-long-name",
                                },
                                help_text: "test option a a help text",
                            },
                        ),
                        (
                            "test_option_a_b",
                            EnumOption {
                                name: Name {
                                    short: "test-option-a-b-short-name",
                                    long: "test-option-a-b-long-name",
                                },
                                help_text: "test option a b help text",
                            },
                        ),
                        (
                            "test_option_a_c",
                            EnumOption {
                                name: Name {
                                    short: "test-option-a-c-short-name",
                                    long: "test-option-a-c-long-name",
                                },
                                help_text: "test option a c help text",
                            },
                        ),
                    ],
                },
            )
            .enumeration(
                "test_enum_b",
                EnumParameter {
                    name: Name {
                        short: "test-enum-b-short-name",
                        long: "test-enum-b-long-name",
                    },
                    help_text: "test enum b help text",
                    options: vec![
                        (
                            "test_option_b_a",
                            EnumOption {
                                name: Name {
                                    short: "test-option-b-a-short-name",
                                    long: "test-option-b-a-long-name",
                                },
                                help_text: "test option b a help text",
                            },
                        ),
                        (
                            "test_option_b_b",
                            EnumOption {
                                name: Name {
                                    short: "test-option-b-b-short-name",
                                    long: "test-option-b-b-long-name",
                                },
                                help_text: "test option b b help text",
                            },
                        ),
                        (
                            "test_option_b_c",
                            EnumOption {
                                name: Name {
                                    short: "test-option-b-c-short-name",
                                    long: "test-option-b-c-long-name",
                                },
                                help_text: "test option b c help text",
                            },
                        ),
                    ],
                },
            )
            .boolean(
                "test_boolean_a",
                BooleanParameter {
                    name: Name {
                        short: "test-boolean-a-short-name",
                        long: "test-boolean-a-long-name",
                    },
                    help_text: "test boolean a help text",
                },
            )
            .boolean(
                "test_boolean_b",
                BooleanParameter {
                    name: Name {
                        short: "test-boolean-b-short-name",
                        long: "test-boolean-b-long-name",
                    },
                    help_text: "test boolean b help text",
                },
            )
            .boolean(
                "test_boolean_c",
                BooleanParameter {
                    name: Name {
                        short: "test-boolean-c-short-name",
                        long: "test-boolean-c-long-name",
                    },
                    help_text: "test boolean c help text",
                },
            ),
    }
}

/// Every required parameter exactly once with in-bounds values, booleans a
/// and c present, enum a selected by an option's long name and enum b by an
/// option's short name.
pub fn valid() -> Vec<String> {
    args![
        "-test-string-a-short-name" "t s a arg"
        "--test-string-b-long-name" "tba"
        "-test-integer-a-short-name" "-1"
        "--test-integer-b-long-name" "18"
        "-test-enum-a-short-name" "test-option-a-a-long-name"
        "--test-enum-b-long-name" "test-option-b-c-short-name"
        "-test-boolean-a-short-name"
        "--test-boolean-c-long-name"
    ]
}

pub fn replacing(argv: Vec<String>, from: &str, to: &str) -> Vec<String> {
    assert!(argv.iter().any(|token| token == from));
    argv.into_iter()
        .map(|token| if token == from { to.to_string() } else { token })
        .collect()
}

/// Removes `token` and the `following` tokens after it.
pub fn omitting(argv: Vec<String>, token: &str, following: usize) -> Vec<String> {
    let index = argv
        .iter()
        .position(|candidate| candidate == token)
        .unwrap();
    let mut argv = argv;
    argv.drain(index..=index + following);
    argv
}

pub fn inserting_after(argv: Vec<String>, after: &str, token: &str) -> Vec<String> {
    let index = argv.iter().position(|candidate| candidate == after).unwrap();
    let mut argv = argv;
    argv.insert(index + 1, token.to_string());
    argv
}

pub fn parsed(argv: &[String]) -> ArgumentSet {
    match command().parse(argv) {
        Ok(Parse::Success(arguments)) => arguments,
        Ok(Parse::Help(help)) => panic!("unexpected help request:\n{}", help),
        Err(error) => panic!("{}", error),
    }
}

/// The failure message for a stream the parser must reject.
pub fn rejected(argv: &[String]) -> String {
    match command().parse(argv) {
        Ok(Parse::Success(_)) => panic!("parse unexpectedly succeeded"),
        Ok(Parse::Help(help)) => panic!("unexpected help request:\n{}", help),
        Err(error) => error.to_string(),
    }
}

/// The help block for a stream containing a help token.
pub fn helped(argv: &[String]) -> String {
    match command().parse(argv) {
        Ok(Parse::Help(help)) => help.to_string(),
        Ok(Parse::Success(_)) => panic!("parse unexpectedly succeeded"),
        Err(error) => panic!("{}", error),
    }
}
