/// Backend location shared by every API call.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
}

impl AppConfig {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Base path for the admin table endpoints.
    pub fn admin_api(&self) -> String {
        format!("{}/api/admin", self.base_url)
    }

    /// Base path for the authentication endpoints.
    pub fn auth_api(&self) -> String {
        format!("{}/api/auth", self.base_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://back-end-tf-web-alpha.vercel.app".to_owned(),
        }
    }
}
