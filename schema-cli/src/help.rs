use crate::Command;

/// Builds the usage block: one line per declared parameter, sorted
/// lexicographically (an enum's indented option sub-lines travel with their
/// parent line), under a fixed header.
pub(crate) fn render(command: &Command) -> String {
    let parameters = &command.parameters;
    let mut lines = Vec::new();

    for (_, parameter) in &parameters.strings {
        lines.push(format!(
            "\n    -{}, --{} [{}]: {}",
            parameter.name.short, parameter.name.long, parameter.argument_help_text, parameter.help_text
        ));
    }

    for (_, parameter) in &parameters.integers {
        lines.push(format!(
            "\n    -{}, --{} [{}]: {}",
            parameter.name.short, parameter.name.long, parameter.argument_help_text, parameter.help_text
        ));
    }

    for (_, parameter) in &parameters.enums {
        let placeholder = parameter
            .options
            .iter()
            .flat_map(|(_, option)| [option.name.short, option.name.long])
            .collect::<Vec<_>>()
            .join("|");
        let mut line = format!(
            "\n    -{}, --{} [{}]: {}",
            parameter.name.short, parameter.name.long, placeholder, parameter.help_text
        );
        for (_, option) in &parameter.options {
            line.push_str(&format!(
                "\n      {}, {}: {}",
                option.name.short, option.name.long, option.help_text
            ));
        }
        lines.push(line);
    }

    for (_, parameter) in &parameters.booleans {
        lines.push(format!(
            "\n    -{}, --{}: {}",
            parameter.name.short, parameter.name.long, parameter.help_text
        ));
    }

    lines.sort();

    format!(
        "{} ({}) - {}\nusage: {} [options]\noptions:\n    -h, --help, /?: display this message{}",
        command.name,
        command.version,
        command.help_text,
        command.name,
        lines.concat()
    )
}
