use crate::cli::{
    actions::{export::Collection, Action},
    commands::{ARG_API_URL, ARG_COLLECTION, ARG_LOCALE, ARG_TOKEN, CMD_CHECK, CMD_EXPORT},
    globals::GlobalArgs,
};
use anyhow::{anyhow, Context, Result};
use consulta_client::Locale;
use secrecy::SecretString;

/// Reads the global arguments shared by every subcommand.
///
/// # Errors
/// Returns an error when `--api-url` is missing or blank.
pub fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let api_url = matches
        .get_one::<String>(ARG_API_URL)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("missing required argument: --{ARG_API_URL}"))?;

    let mut globals = GlobalArgs::new(api_url);
    if let Some(token) = matches
        .get_one::<String>(ARG_TOKEN)
        .filter(|s| !s.trim().is_empty())
    {
        globals.set_token(SecretString::from(token.trim().to_string()));
    }
    if let Some(locale) = matches.get_one::<String>(ARG_LOCALE) {
        globals.locale = Locale::from_tag(locale);
    }

    Ok(globals)
}

/// Maps parsed arguments to the action to run.
///
/// # Errors
/// Returns an error for missing globals or an unknown subcommand.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = globals(matches)?;

    match matches.subcommand() {
        Some((CMD_CHECK, _)) => Ok(Action::Check { globals }),
        Some((CMD_EXPORT, sub_m)) => {
            let collection = sub_m
                .get_one::<String>(ARG_COLLECTION)
                .context("missing required argument: <collection>")?;
            Ok(Action::Export {
                globals,
                collection: collection.parse::<Collection>()?,
            })
        }
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    const API_URL: &str = "https://consulta.dev/api/v1";

    fn action_for(args: Vec<&str>) -> Result<Action> {
        temp_env::with_vars(
            [
                ("CONSULTA_API_URL", None::<&str>),
                ("CONSULTA_TOKEN", None),
                ("CONSULTA_LOCALE", None),
            ],
            || handler(&commands::new().get_matches_from(args)),
        )
    }

    #[test]
    fn test_check_action() {
        let action = action_for(vec!["consulta", "--api-url", API_URL, "check"]).unwrap();
        match action {
            Action::Check { globals } => {
                assert_eq!(globals.api_url, API_URL);
                assert!(globals.token.is_none());
                assert_eq!(globals.locale, Locale::En);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_export_action_with_token_and_locale() {
        let action = action_for(vec![
            "consulta",
            "--api-url",
            API_URL,
            "--token",
            "access",
            "--locale",
            "es-MX",
            "export",
            "posts",
        ])
        .unwrap();
        match action {
            Action::Export {
                globals,
                collection,
            } => {
                assert_eq!(collection, Collection::Posts);
                assert_eq!(
                    globals.token.as_ref().map(|t| t.expose_secret().to_string()),
                    Some("access".to_string())
                );
                assert_eq!(globals.locale, Locale::Es);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_missing_api_url() {
        let result = action_for(vec!["consulta", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let action = action_for(vec!["consulta", "--api-url", API_URL, "--token", " ", "check"])
            .unwrap();
        match action {
            Action::Check { globals } => assert!(globals.token.is_none()),
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
