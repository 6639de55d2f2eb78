/// Supplies the bearer token for API requests.
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<String>;
}

/// A token resolved once from flags, environment, or the config file.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        // Blank tokens would produce "Bearer " headers; treat them as absent.
        StaticToken(token.filter(|t| !t.trim().is_empty()))
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}
