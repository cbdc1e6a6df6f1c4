//! Unverified JWT payload decoding. Signatures are the backend's business; the
//! UI only reads the payload to render role-gated navigation before `/auth/me`
//! answers. Expired tokens are ignored for that purpose.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<u64>,
}

impl Claims {
    /// Decodes the payload segment of a compact JWT.
    #[must_use]
    pub fn decode(token: &str) -> Option<Self> {
        let mut segments = token.trim().split('.');
        let (Some(_header), Some(payload), Some(_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return None;
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }

    /// Tokens without `exp` never expire from the client's point of view.
    #[must_use]
    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_payload() {
        let claims = Claims::decode(&token(
            r#"{"sub":"42","email":"ana@example.com","role":"admin","exp":1700000000}"#,
        ));
        let Some(claims) = claims else {
            panic!("expected claims");
        };
        assert_eq!(claims.sub, "42");
        assert!(claims.is_admin());
        assert!(claims.is_expired_at(1_700_000_000));
        assert!(!claims.is_expired_at(1_699_999_999));
    }

    #[test]
    fn missing_exp_never_expires() {
        let claims = Claims::decode(&token(r#"{"sub":"7","role":"customer"}"#));
        assert_eq!(claims.as_ref().map(Claims::is_admin), Some(false));
        assert_eq!(claims.map(|c| c.is_expired_at(u64::MAX)), Some(false));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(Claims::decode("").is_none());
        assert!(Claims::decode("only.two").is_none());
        assert!(Claims::decode("a.b.c.d").is_none());
        assert!(Claims::decode("a.%%%.c").is_none());
        assert!(Claims::decode(&token("not json")).is_none());
    }
}
