//! Translated user-facing messages for HTTP statuses and transport failures.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Parses a language tag such as `es`, `es-MX` or `en_US`; unknown tags fall back to English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "es" => Self::Es,
            _ => Self::En,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

/// Non-HTTP failure categories that still need a translated label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    Network,
    Timeout,
    Validation,
    Unexpected,
    ChatEmpty,
    ChatTooLong,
}

impl Message {
    #[must_use]
    pub fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Network, Locale::En) => "Unable to reach the server. Check your connection and try again.",
            (Self::Network, Locale::Es) => "No se pudo conectar con el servidor. Revisa tu conexión e inténtalo de nuevo.",
            (Self::Timeout, Locale::En) => "The request took too long. Please try again.",
            (Self::Timeout, Locale::Es) => "La solicitud tardó demasiado. Inténtalo de nuevo.",
            (Self::Validation, Locale::En) => "Please correct the highlighted fields.",
            (Self::Validation, Locale::Es) => "Corrige los campos marcados.",
            (Self::Unexpected, Locale::En) => "Something went wrong. Please try again later.",
            (Self::Unexpected, Locale::Es) => "Algo salió mal. Inténtalo más tarde.",
            (Self::ChatEmpty, Locale::En) => "Type a message before sending.",
            (Self::ChatEmpty, Locale::Es) => "Escribe un mensaje antes de enviarlo.",
            (Self::ChatTooLong, Locale::En) => "Your message is too long.",
            (Self::ChatTooLong, Locale::Es) => "Tu mensaje es demasiado largo.",
        }
    }
}

/// Maps an HTTP status code to a translated message for inline alerts and the error page.
#[must_use]
pub fn status_message(status: u16, locale: Locale) -> &'static str {
    match locale {
        Locale::En => match status {
            400 => "The request was invalid. Please review your input.",
            401 => "Your session has expired or your credentials were rejected. Please sign in.",
            403 => "You do not have permission to perform this action.",
            404 => "The page or resource you requested could not be found.",
            409 => "This item conflicts with an existing one.",
            422 => "Some fields are invalid. Please review your input.",
            429 => "Too many requests. Please wait a moment and try again.",
            500 => "The server encountered an error. Please try again later.",
            502 | 504 => "The server is not responding. Please try again later.",
            503 => "The service is temporarily unavailable. Please try again later.",
            400..=499 => "The request could not be completed.",
            500..=599 => "The server could not complete the request.",
            _ => Message::Unexpected.text(locale),
        },
        Locale::Es => match status {
            400 => "La solicitud no es válida. Revisa los datos ingresados.",
            401 => "Tu sesión expiró o tus credenciales fueron rechazadas. Inicia sesión.",
            403 => "No tienes permiso para realizar esta acción.",
            404 => "No se encontró la página o el recurso solicitado.",
            409 => "Este elemento entra en conflicto con uno existente.",
            422 => "Algunos campos no son válidos. Revisa los datos ingresados.",
            429 => "Demasiadas solicitudes. Espera un momento e inténtalo de nuevo.",
            500 => "El servidor encontró un error. Inténtalo más tarde.",
            502 | 504 => "El servidor no responde. Inténtalo más tarde.",
            503 => "El servicio no está disponible temporalmente. Inténtalo más tarde.",
            400..=499 => "No se pudo completar la solicitud.",
            500..=599 => "El servidor no pudo completar la solicitud.",
            _ => Message::Unexpected.text(locale),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_from_tag_handles_regions_and_unknowns() {
        assert_eq!(Locale::from_tag("es"), Locale::Es);
        assert_eq!(Locale::from_tag("es-MX"), Locale::Es);
        assert_eq!(Locale::from_tag(" ES_es "), Locale::Es);
        assert_eq!(Locale::from_tag("en-GB"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn status_message_is_translated() {
        assert_eq!(
            status_message(404, Locale::En),
            "The page or resource you requested could not be found."
        );
        assert_eq!(
            status_message(404, Locale::Es),
            "No se encontró la página o el recurso solicitado."
        );
        assert_ne!(status_message(403, Locale::En), status_message(403, Locale::Es));
    }

    #[test]
    fn unlisted_statuses_fall_back_to_class_messages() {
        assert_eq!(
            status_message(418, Locale::En),
            "The request could not be completed."
        );
        assert_eq!(
            status_message(507, Locale::Es),
            "El servidor no pudo completar la solicitud."
        );
        assert_eq!(
            status_message(302, Locale::En),
            Message::Unexpected.text(Locale::En)
        );
    }
}
