pub mod logging;
pub mod register;
pub mod strength;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("signup")
        .about("Sign-up form validation and password strength feedback")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(register::subcommand())
        .subcommand(strength::subcommand());

    logging::with_args(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn without_signup_env<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        temp_env::with_vars(
            [
                ("SIGNUP_NAME", None::<&str>),
                ("SIGNUP_EMAIL", None),
                ("SIGNUP_PASSWORD", None),
                ("SIGNUP_CONFIRM_PASSWORD", None),
                ("SIGNUP_LOG_LEVEL", None),
                ("SIGNUP_LOG_FORMAT", None),
            ],
            f,
        )
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "signup");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Sign-up form validation and password strength feedback".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_register_flags() {
        without_signup_env(|| {
            let matches = new().get_matches_from(vec![
                "signup",
                "register",
                "--name",
                "Alice",
                "--email",
                "a@b.com",
                "--password",
                "password1",
                "--confirm-password",
                "password2",
                "--json",
            ]);

            let (name, sub) = matches.subcommand().unwrap();
            assert_eq!(name, register::CMD_REGISTER);

            let options = register::Options::parse(sub);
            assert_eq!(options.name, "Alice");
            assert_eq!(options.email, "a@b.com");
            assert_eq!(options.password.expose_secret(), "password1");
            assert_eq!(options.confirm_password.expose_secret(), "password2");
            assert!(options.json);
        });
    }

    #[test]
    fn test_register_defaults_to_empty_fields() {
        without_signup_env(|| {
            let matches = new().get_matches_from(vec!["signup", "register"]);
            let (_, sub) = matches.subcommand().unwrap();

            let options = register::Options::parse(sub);
            assert!(options.name.is_empty());
            assert!(options.email.is_empty());
            assert!(options.password.expose_secret().is_empty());
            assert!(options.confirm_password.expose_secret().is_empty());
            assert!(!options.json);
        });
    }

    #[test]
    fn test_register_env() {
        temp_env::with_vars(
            [
                ("SIGNUP_NAME", Some("Alice")),
                ("SIGNUP_EMAIL", Some("a@b.com")),
                ("SIGNUP_PASSWORD", Some("password1")),
                ("SIGNUP_CONFIRM_PASSWORD", Some("password1")),
                ("SIGNUP_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["signup", "register"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );

                let (_, sub) = matches.subcommand().unwrap();
                let options = register::Options::parse(sub);
                assert_eq!(options.name, "Alice");
                assert_eq!(options.email, "a@b.com");
                assert_eq!(options.password.expose_secret(), "password1");
                assert_eq!(options.confirm_password.expose_secret(), "password1");
            },
        );
    }

    #[test]
    fn test_strength_password() {
        without_signup_env(|| {
            let matches =
                new().get_matches_from(vec!["signup", "strength", "--password", "abcdef"]);
            let (name, sub) = matches.subcommand().unwrap();
            assert_eq!(name, strength::CMD_STRENGTH);

            let options = strength::Options::parse(sub);
            assert_eq!(options.password.expose_secret(), "abcdef");
            assert!(!options.json);
        });
    }

    #[test]
    fn test_subcommand_required() {
        without_signup_env(|| {
            let result = new().try_get_matches_from(vec!["signup"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("SIGNUP_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["signup", "strength"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            without_signup_env(|| {
                let mut args = vec!["signup".to_string(), "strength".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_log_format() {
        without_signup_env(|| {
            let matches = new().get_matches_from(vec!["signup", "strength"]);
            assert_eq!(logging::log_format(&matches), logging::LogFormat::Pretty);

            let matches =
                new().get_matches_from(vec!["signup", "--log-format", "json", "strength"]);
            assert_eq!(logging::log_format(&matches), logging::LogFormat::Json);

            let result =
                new().try_get_matches_from(vec!["signup", "--log-format", "xml", "strength"]);
            assert!(result.is_err());
        });
    }
}
