use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        PossibleValuesParser, ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TOKEN: &str = "token";
pub const ARG_LOCALE: &str = "locale";
pub const ARG_VERBOSITY: &str = "verbosity";
pub const ARG_COLLECTION: &str = "collection";

pub const CMD_CHECK: &str = "check";
pub const CMD_EXPORT: &str = "export";

/// Collections accepted by `export`.
pub const COLLECTIONS: [&str; 5] = ["pages", "services", "posts", "categories", "use-cases"];

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("consulta")
        .about("Consulta website operator tool")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Backend API base URL, example: https://consulta.dev/api/v1")
                .env("CONSULTA_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .long("token")
                .help("Bearer access token for protected collections")
                .env("CONSULTA_TOKEN")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            Arg::new(ARG_LOCALE)
                .long("locale")
                .help("Language for error messages (en, es)")
                .env("CONSULTA_LOCALE")
                .default_value("en")
                .global(true),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("CONSULTA_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(Command::new(CMD_CHECK).about("Check that the backend is reachable and healthy"))
        .subcommand(
            Command::new(CMD_EXPORT)
                .about("Export every item of a collection as a JSON array")
                .arg(
                    Arg::new(ARG_COLLECTION)
                        .help("Collection to export")
                        .required(true)
                        .value_parser(PossibleValuesParser::new(COLLECTIONS)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    const API_URL: &str = "https://consulta.dev/api/v1";

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "consulta");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Consulta website operator tool"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_check_args() {
        temp_env::with_vars(
            [
                ("CONSULTA_TOKEN", None::<&str>),
                ("CONSULTA_LOCALE", None),
                ("CONSULTA_LOG_LEVEL", None),
            ],
            || {
                let command = new();
                let matches =
                    command.get_matches_from(vec!["consulta", "--api-url", API_URL, "check"]);

                assert_eq!(matches.subcommand_name(), Some(CMD_CHECK));
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).map(|s| s.to_string()),
                    Some(API_URL.to_string())
                );
                assert_eq!(matches.get_one::<String>(ARG_TOKEN), None);
                assert_eq!(
                    matches.get_one::<String>(ARG_LOCALE).map(|s| s.to_string()),
                    Some("en".to_string())
                );
            },
        );
    }

    #[test]
    fn test_export_collection() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "consulta",
            "export",
            "use-cases",
            "--api-url",
            API_URL,
            "--token",
            "access",
        ]);

        let (name, sub_m) = matches.subcommand().unwrap();
        assert_eq!(name, CMD_EXPORT);
        assert_eq!(
            sub_m.get_one::<String>(ARG_COLLECTION).map(|s| s.to_string()),
            Some("use-cases".to_string())
        );
        assert_eq!(
            sub_m.get_one::<String>(ARG_TOKEN).map(|s| s.to_string()),
            Some("access".to_string())
        );
    }

    #[test]
    fn test_export_rejects_unknown_collection() {
        let command = new();
        let result =
            command.try_get_matches_from(vec!["consulta", "--api-url", API_URL, "export", "orders"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_is_required() {
        let command = new();
        let result = command.try_get_matches_from(vec!["consulta", "--api-url", API_URL]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("CONSULTA_API_URL", Some(API_URL)),
                ("CONSULTA_TOKEN", Some("access")),
                ("CONSULTA_LOCALE", Some("es")),
                ("CONSULTA_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["consulta", "check"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).map(|s| s.to_string()),
                    Some(API_URL.to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_TOKEN).map(|s| s.to_string()),
                    Some("access".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_LOCALE).map(|s| s.to_string()),
                    Some("es".to_string())
                );
                assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).map(|s| *s), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("CONSULTA_LOG_LEVEL", Some(level)),
                    ("CONSULTA_API_URL", Some(API_URL)),
                ],
                || {
                    let command = new();
                    let matches = command.get_matches_from(vec!["consulta", "check"]);
                    assert_eq!(
                        matches.get_one::<u8>(ARG_VERBOSITY).map(|s| *s),
                        Some(index as u8)
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("CONSULTA_LOG_LEVEL", None::<String>)], || {
                let mut args = vec![
                    "consulta".to_string(),
                    "--api-url".to_string(),
                    API_URL.to_string(),
                    "check".to_string(),
                ];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }
}
