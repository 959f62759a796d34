use clap::{Arg, ArgAction, ArgMatches, Command};
use secrecy::SecretString;

pub const CMD_REGISTER: &str = "register";

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_JSON: &str = "json";

/// Password argument shared by `register` and `strength`.
pub(crate) fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long(ARG_PASSWORD)
        .help("Account password")
        .env("SIGNUP_PASSWORD")
        .hide_env_values(true)
        .default_value("")
}

pub(crate) fn json_arg() -> Arg {
    Arg::new(ARG_JSON)
        .long(ARG_JSON)
        .help("Print the report as JSON")
        .action(ArgAction::SetTrue)
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_REGISTER)
        .about("Validate the sign-up fields and submit them")
        .arg(
            Arg::new(ARG_NAME)
                .long(ARG_NAME)
                .help("Full name")
                .env("SIGNUP_NAME")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .long(ARG_EMAIL)
                .help("Email address")
                .env("SIGNUP_EMAIL")
                .default_value(""),
        )
        .arg(password_arg())
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .long(ARG_CONFIRM_PASSWORD)
                .help("Password confirmation")
                .env("SIGNUP_CONFIRM_PASSWORD")
                .hide_env_values(true)
                .default_value(""),
        )
        .arg(json_arg())
}

pub struct Options {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub json: bool,
}

impl Options {
    /// Parse register arguments from the subcommand matches.
    ///
    /// Missing values become empty strings, like an untouched form input.
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let get = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();

        Self {
            name: get(ARG_NAME),
            email: get(ARG_EMAIL),
            password: SecretString::from(get(ARG_PASSWORD)),
            confirm_password: SecretString::from(get(ARG_CONFIRM_PASSWORD)),
            json: matches.get_flag(ARG_JSON),
        }
    }
}
