//! Parameter declarations. A schema is static program data: collisions
//! between names are programming errors, so the builder fails fast at
//! construction time rather than leaving lookup precedence undefined.

/// The names a parameter answers to on the command line, without their
/// `-`/`--` prefixes.
pub struct Name {
    pub short: &'static str,
    pub long: &'static str,
}

/// Inclusive character-count bounds, counted in Unicode scalar values.
pub struct Length {
    pub minimum: usize,
    pub maximum: usize,
}

pub struct StringParameter {
    pub name: Name,
    pub help_text: &'static str,
    pub argument_help_text: &'static str,
    pub length: Length,
}

/// Inclusive bounds on the decoded value.
pub struct IntegerParameter {
    pub name: Name,
    pub help_text: &'static str,
    pub argument_help_text: &'static str,
    pub minimum: i64,
    pub maximum: i64,
}

pub struct EnumOption {
    pub name: Name,
    pub help_text: &'static str,
}

/// Declaration order of `options` drives both the help output and the
/// "must be one of" listing.
pub struct EnumParameter {
    pub name: Name,
    pub help_text: &'static str,
    pub options: Vec<(&'static str, EnumOption)>,
}

/// Presence flag; takes no value token and is optional by construction.
pub struct BooleanParameter {
    pub name: Name,
    pub help_text: &'static str,
}

/// The declared parameters, grouped by kind, in declaration order.
#[derive(Default)]
pub struct ParameterSet {
    pub(crate) strings: Vec<(&'static str, StringParameter)>,
    pub(crate) integers: Vec<(&'static str, IntegerParameter)>,
    pub(crate) enums: Vec<(&'static str, EnumParameter)>,
    pub(crate) booleans: Vec<(&'static str, BooleanParameter)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    /// If the key or either name is already declared, in any kind.
    pub fn string(mut self, key: &'static str, parameter: StringParameter) -> Self {
        self.assert_undeclared(key, &parameter.name);
        self.strings.push((key, parameter));
        self
    }

    /// # Panics
    /// If the key or either name is already declared, in any kind.
    pub fn integer(mut self, key: &'static str, parameter: IntegerParameter) -> Self {
        self.assert_undeclared(key, &parameter.name);
        self.integers.push((key, parameter));
        self
    }

    /// # Panics
    /// If the key or either name is already declared in any kind, if the
    /// parameter declares no options, or if an option key repeats.
    pub fn enumeration(mut self, key: &'static str, parameter: EnumParameter) -> Self {
        self.assert_undeclared(key, &parameter.name);
        assert!(
            !parameter.options.is_empty(),
            "enum parameter \"{}\" must declare at least one option",
            key
        );
        for (index, (option_key, _)) in parameter.options.iter().enumerate() {
            assert!(
                parameter.options[..index]
                    .iter()
                    .all(|(earlier, _)| earlier != option_key),
                "enum parameter \"{}\" declares option key \"{}\" twice",
                key,
                option_key
            );
        }
        self.enums.push((key, parameter));
        self
    }

    /// # Panics
    /// If the key or either name is already declared, in any kind.
    pub fn boolean(mut self, key: &'static str, parameter: BooleanParameter) -> Self {
        self.assert_undeclared(key, &parameter.name);
        self.booleans.push((key, parameter));
        self
    }

    fn assert_undeclared(&self, key: &'static str, name: &Name) {
        for (declared_key, declared) in self.names() {
            assert!(
                declared_key != key,
                "parameter key \"{}\" declared twice",
                key
            );
            assert!(
                declared.short != name.short,
                "short name \"-{}\" declared twice",
                name.short
            );
            assert!(
                declared.long != name.long,
                "long name \"--{}\" declared twice",
                name.long
            );
        }
    }

    /// Key and name of every declared parameter, kind-agnostic.
    pub(crate) fn names<'a>(&'a self) -> impl Iterator<Item = (&'static str, &'a Name)> + 'a {
        self.strings
            .iter()
            .map(|(key, parameter)| (*key, &parameter.name))
            .chain(
                self.integers
                    .iter()
                    .map(|(key, parameter)| (*key, &parameter.name)),
            )
            .chain(
                self.enums
                    .iter()
                    .map(|(key, parameter)| (*key, &parameter.name)),
            )
            .chain(
                self.booleans
                    .iter()
                    .map(|(key, parameter)| (*key, &parameter.name)),
            )
    }

    /// Every parameter that must be claimed for a parse to succeed; booleans
    /// are absent because an unclaimed flag just decodes to false.
    pub(crate) fn required<'a>(&'a self) -> impl Iterator<Item = (&'static str, &'a Name)> + 'a {
        self.strings
            .iter()
            .map(|(key, parameter)| (*key, &parameter.name))
            .chain(
                self.integers
                    .iter()
                    .map(|(key, parameter)| (*key, &parameter.name)),
            )
            .chain(
                self.enums
                    .iter()
                    .map(|(key, parameter)| (*key, &parameter.name)),
            )
    }
}
