//! Embedded default properties.

use std::collections::HashMap;
use std::sync::OnceLock;

/// OAuth consumer key.
pub const CONSUMER_KEY: &str = "consumer_key";
/// PEM-style RSA private key blob, stored as an opaque string.
pub const PRIVATE_KEY: &str = "private_key";
/// OAuth request token. No default; absent unless set.
pub const REQUEST_TOKEN: &str = "request_token";
/// OAuth access token. No default; absent unless set.
pub const ACCESS_TOKEN: &str = "access_token";
/// OAuth token secret. No default; absent unless set.
pub const SECRET: &str = "secret";
/// Base URL of the target Jira instance.
pub const JIRA_HOME: &str = "jira_home";

/// Example-only key material. Not a credential for anything real.
const DEFAULT_PRIVATE_KEY: &str = "MIICdwIBADANBgkqhkiG9w0BAQEFAASCAmEwggJdAgEAAoGBAMvH8LCKalC/0DvY1e8Ksh4cchd3xdJraUannv6LzHCSTrZfRveyoAX1eXGUoLLuAszmhkXhKyyuIuLc1AaJvESlFRZHfNq5bBgpQOd8HGe9dSzC3V8mvMokRe9E7PFGFlDxILcLR8Zb/twAIH21DhrhJz3yPh1QXVBjtr/R+ZjNAgMBAAECgYALoEWYHN2B69+aen2CHM8arq7HrfqoTZ58/HUyupEYXxCEkR0AZr2AeYfLNhqQ+slIHWLNu9H1w52T6dti4BrQibBSeiR+Aallar+6T3Rvz+ePBD+qq+n1JJq9P6P7m+SdWnj/v2iJn0jheGMzo07omxAuL6AXARxIRN/NK0s1IQJBAO6ckLeexGS0HOThhYSYFckgaBrpCBzpbus4O9V9ZGV0Eptur5hBhwm6samasLjHwKWVBJrTDv0JvaVqKNBb+rUCQQDaoZdDZDRyM1rE8dSjLqYlZZ3ZIsQ0TQTqUu5/Ktw9ZFT909ZDAle1PGB6N3jfWBdpDFpbKj4aIu9wCTcCIzy5AkEAyEFKC3EJ7mJjJYxIHEHvdr7l4D/W+TzIRE0Lml8EVUkXHK/GWwgTpwyycl9LFak/ezgXh0C/AYqdSShRXJz1SQJBAJYbRAOdFPUjlTqK3vd628/pSMsAN73A85L+hYkCIFx2OnRbsUwom5dvcL34wCB4Fvqk5JSbGDBRtBsz+HSbROECQCano2UgK5kQmIVj8QTGOQYkrNy2at7yTvH9Gx3O1XHiMTYmPbqZD82CbXXtLRaH/6IwwtkPIfWbk08kGB3/mJ8=";

static DEFAULTS: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Process-wide default property map, built once on first use and never
/// mutated. Callers receive clones, not access to this instance.
pub fn defaults() -> &'static HashMap<String, String> {
    DEFAULTS.get_or_init(|| {
        HashMap::from([
            (
                JIRA_HOME.to_string(),
                "https:peterkentish.atlassian.net".to_string(),
            ),
            (CONSUMER_KEY.to_string(), "OauthKey".to_string()),
            (PRIVATE_KEY.to_string(), DEFAULT_PRIVATE_KEY.to_string()),
        ])
    })
}
