use std::collections::BTreeMap;

use crate::arguments::ArgumentSet;
use crate::schema::Name;
use crate::{help, Command, Error, HelpInfo, Parse};

const HELP_TOKENS: [&str; 3] = ["-h", "--help", "/?"];

/// One linear pass: match name tokens to parameters, check presence, decode
/// kind by kind (booleans, strings, integers, enums), then reject whatever
/// was never consumed. The first fault along that order wins.
pub(crate) fn parse(command: &Command, argv: &[String]) -> Result<Parse<ArgumentSet>, Error> {
    // A help request beats every other rule, malformed input included.
    if argv
        .iter()
        .any(|token| HELP_TOKENS.contains(&token.as_str()))
    {
        return Ok(Parse::Help(HelpInfo(help::render(command))));
    }

    let parameters = &command.parameters;

    let mut used = vec![false; argv.len()];
    // Indices 0 and 1 are the program and invocation identifiers.
    for reserved in used.iter_mut().take(2) {
        *reserved = true;
    }

    let mut claims: BTreeMap<&'static str, usize> = BTreeMap::new();

    for (index, token) in argv.iter().enumerate().skip(2) {
        // `--` before `-`, so a long name is never taken for a short one.
        let (candidate, long) = if let Some(stripped) = token.strip_prefix("--") {
            (stripped, true)
        } else if let Some(stripped) = token.strip_prefix('-') {
            (stripped, false)
        } else {
            // Left unconsumed; either claimed later as a value token or
            // reported unexpected at the end.
            continue;
        };

        for (key, name) in parameters.names() {
            let matched = if long {
                name.long == candidate
            } else {
                name.short == candidate
            };
            if matched {
                if claims.contains_key(key) {
                    return Err(Error::GivenMultipleTimes {
                        short: name.short,
                        long: name.long,
                    });
                }
                claims.insert(key, index);
                used[index] = true;
                break;
            }
        }
    }

    for (key, name) in parameters.required() {
        if !claims.contains_key(key) {
            return Err(Error::NotGiven {
                short: name.short,
                long: name.long,
            });
        }
    }

    let mut arguments = ArgumentSet::default();

    for (key, _) in &parameters.booleans {
        arguments.booleans.insert(*key, claims.contains_key(key));
    }

    for (key, parameter) in &parameters.strings {
        let (index, text) = value_token(argv, &used, claims[key], &parameter.name)?;
        let characters = text.chars().count();
        if characters < parameter.length.minimum {
            return Err(Error::TooFewCharacters {
                short: parameter.name.short,
                long: parameter.name.long,
                minimum: parameter.length.minimum,
            });
        }
        if characters > parameter.length.maximum {
            return Err(Error::TooManyCharacters {
                short: parameter.name.short,
                long: parameter.name.long,
                maximum: parameter.length.maximum,
            });
        }
        used[index] = true;
        arguments.strings.insert(*key, text.to_string());
    }

    for (key, parameter) in &parameters.integers {
        let (index, text) = value_token(argv, &used, claims[key], &parameter.name)?;
        if !integer_literal(text) {
            return Err(Error::NotAnInteger {
                short: parameter.name.short,
                long: parameter.name.long,
            });
        }
        let value = match text.parse::<i64>() {
            Ok(value) => value,
            // A well-formed literal that overflows i64 is out of bounds on
            // whichever side its sign points.
            Err(_) if text.starts_with('-') => {
                return Err(Error::BelowMinimum {
                    short: parameter.name.short,
                    long: parameter.name.long,
                    minimum: parameter.minimum,
                })
            }
            Err(_) => {
                return Err(Error::AboveMaximum {
                    short: parameter.name.short,
                    long: parameter.name.long,
                    maximum: parameter.maximum,
                })
            }
        };
        if value < parameter.minimum {
            return Err(Error::BelowMinimum {
                short: parameter.name.short,
                long: parameter.name.long,
                minimum: parameter.minimum,
            });
        }
        if value > parameter.maximum {
            return Err(Error::AboveMaximum {
                short: parameter.name.short,
                long: parameter.name.long,
                maximum: parameter.maximum,
            });
        }
        used[index] = true;
        arguments.integers.insert(*key, value);
    }

    for (key, parameter) in &parameters.enums {
        let (index, text) = value_token(argv, &used, claims[key], &parameter.name)?;
        let selected = parameter
            .options
            .iter()
            .find(|(_, option)| option.name.short == text || option.name.long == text);
        match selected {
            Some((option_key, _)) => {
                used[index] = true;
                arguments.enums.insert(*key, *option_key);
            }
            None => {
                let options = parameter
                    .options
                    .iter()
                    .flat_map(|(_, option)| [option.name.short, option.name.long])
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(Error::NotAnOption {
                    short: parameter.name.short,
                    long: parameter.name.long,
                    options,
                });
            }
        }
    }

    if let Some(index) = used.iter().position(|consumed| !consumed) {
        return Err(Error::Unexpected(argv[index].clone()));
    }

    Ok(Parse::Success(arguments))
}

/// The value token is the one immediately after the claimed name token; it
/// must exist and must not already belong to another role.
fn value_token<'a>(
    argv: &'a [String],
    used: &[bool],
    index_of_name: usize,
    name: &Name,
) -> Result<(usize, &'a str), Error> {
    let index = index_of_name + 1;
    if index == argv.len() || used[index] {
        return Err(Error::NoArgument {
            short: name.short,
            long: name.long,
        });
    }
    Ok((index, &argv[index]))
}

/// Optional leading minus sign, one or more decimal digits, nothing else.
fn integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}
