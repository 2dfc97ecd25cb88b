//! Google Tag Manager snippets

use super::attribute::{Attribute, AttributeSet};
use super::script::Script;
use crate::env::{EnvironmentError, EnvironmentProvider, EnvironmentProviderExt, EnvironmentVariable};
use serde::{Deserialize, Serialize};

pub const GTM_CONTAINER_ID: EnvironmentVariable<String> = EnvironmentVariable::new("GTM_CONTAINER_ID");
pub const GTM_AUTH_TOKEN: EnvironmentVariable<String> = EnvironmentVariable::new("GTM_AUTH_TOKEN");
pub const GTM_PREVIEW_ENVIRONMENT: EnvironmentVariable<i64> =
    EnvironmentVariable::new("GTM_PREVIEW_ENVIRONMENT");

/// Settings for a GTM container and environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtmConfiguration {
    pub container_id: String,
    pub auth_token: String,
    pub preview_environment: i64,
}

impl GtmConfiguration {
    pub fn new(
        container_id: impl Into<String>,
        auth_token: impl Into<String>,
        preview_environment: i64,
    ) -> Self {
        Self { container_id: container_id.into(), auth_token: auth_token.into(), preview_environment }
    }

    /// Read `GTM_CONTAINER_ID`, `GTM_AUTH_TOKEN` and `GTM_PREVIEW_ENVIRONMENT`.
    pub fn from_environment<P>(env: &P) -> Result<Self, EnvironmentError>
    where
        P: EnvironmentProvider + ?Sized,
    {
        Ok(Self {
            container_id: env.value(&GTM_CONTAINER_ID)?,
            auth_token: env.value(&GTM_AUTH_TOKEN)?,
            preview_environment: env.value(&GTM_PREVIEW_ENVIRONMENT)?,
        })
    }

    fn environment_query(&self) -> String {
        format!(
            "&gtm_auth={}&gtm_preview=env-{}&gtm_cookies_win=x",
            self.auth_token, self.preview_environment
        )
    }
}

impl Script {
    /// The inline loader script that goes in the document `<head>`.
    pub fn gtm(configuration: &GtmConfiguration) -> Self {
        let code = format!(
            "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\n\
             new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\n\
             j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\n\
             'https://www.googletagmanager.com/gtm.js?id='+i+dl+ '{query}';f.parentNode.insertBefore(j,f);\n\
             }})(window,document,'script','dataLayer','{container}');",
            query = escape_js_string(&configuration.environment_query()),
            container = escape_js_string(&configuration.container_id),
        );
        Script::inline(code, None)
    }
}

/// Escape text for a single-quoted JavaScript string inside `<script>`.
///
/// `<` is written as `\u003c` so a value can never close the element.
fn escape_js_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '<' => escaped.push_str("\\u003c"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// The `<noscript>` fallback that goes right after the opening `<body>` tag.
pub fn gtm_body_snippet(configuration: &GtmConfiguration) -> String {
    let src = format!(
        "https://www.googletagmanager.com/ns.html?id={}{}",
        configuration.container_id,
        configuration.environment_query()
    );
    let attributes = AttributeSet::new()
        .set(Attribute::new("src", src))
        .height(0)
        .width(0)
        .set(Attribute::new("style", "display:none;visibility:hidden"));

    format!("<noscript><iframe{}></iframe></noscript>", attributes.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnvironment;

    fn configuration() -> GtmConfiguration {
        GtmConfiguration::new("GTM-ABC123", "tok_9", 4)
    }

    #[test]
    fn head_script_embeds_container_and_environment() {
        let html = Script::gtm(&configuration()).to_html();

        assert!(html.starts_with("<script>(function(w,d,s,l,i){w[l]=w[l]||[];"));
        assert!(html.contains("'&gtm_auth=tok_9&gtm_preview=env-4&gtm_cookies_win=x'"));
        assert!(html.ends_with("})(window,document,'script','dataLayer','GTM-ABC123');</script>"));
        assert_eq!(html.lines().count(), 5);
    }

    #[test]
    fn head_script_escapes_values_from_environment() {
        let config = GtmConfiguration::new("GTM-'X'", "a'b</script><b>", 1);
        let html = Script::gtm(&config).to_html();

        assert!(html.contains(r"'dataLayer','GTM-\'X\'');"));
        assert!(html.contains(r"&gtm_auth=a\'b\u003c/script>\u003cb>&gtm_preview"));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn js_string_escaping_covers_line_breaks_and_backslashes() {
        assert_eq!(escape_js_string("a\\b\nc\u{2028}\"d\""), r#"a\\b\nc\u2028\"d\""#);
    }

    #[test]
    fn body_snippet_escapes_query_separators() {
        insta::assert_snapshot!(
            gtm_body_snippet(&configuration()),
            @r#"<noscript><iframe src="https://www.googletagmanager.com/ns.html?id=GTM-ABC123&amp;gtm_auth=tok_9&amp;gtm_preview=env-4&amp;gtm_cookies_win=x" height="0" width="0" style="display:none;visibility:hidden"></iframe></noscript>"#
        );
    }

    #[test]
    fn reads_configuration_from_environment() {
        let env: MemoryEnvironment = [
            ("GTM_CONTAINER_ID", "GTM-XYZ"),
            ("GTM_AUTH_TOKEN", "secret"),
            ("GTM_PREVIEW_ENVIRONMENT", "12"),
        ]
        .into_iter()
        .collect();

        let config = GtmConfiguration::from_environment(&env).expect("config");
        assert_eq!(config, GtmConfiguration::new("GTM-XYZ", "secret", 12));
    }

    #[test]
    fn missing_environment_value_is_reported() {
        let env: MemoryEnvironment = [("GTM_CONTAINER_ID", "GTM-XYZ")].into_iter().collect();

        let err = GtmConfiguration::from_environment(&env).unwrap_err();
        assert_eq!(err, EnvironmentError::MissingValue("GTM_AUTH_TOKEN".to_string()));
    }

    #[test]
    fn preview_environment_must_be_numeric() {
        let env: MemoryEnvironment = [
            ("GTM_CONTAINER_ID", "GTM-XYZ"),
            ("GTM_AUTH_TOKEN", "secret"),
            ("GTM_PREVIEW_ENVIRONMENT", "env-3"),
        ]
        .into_iter()
        .collect();

        assert!(matches!(
            GtmConfiguration::from_environment(&env),
            Err(EnvironmentError::ConversionFailure { .. })
        ));
    }
}
