use minijinja::Environment;
use serde::Serialize;

use crate::action::DashboardAction;

/// Compiled page templates, built once at startup.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// # Errors
    /// Fails when a bundled template does not parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", include_str!("../../templates/layout.html"))?;
        env.add_template("login.html", include_str!("../../templates/login.html"))?;
        env.add_template("action.html", include_str!("../../templates/action.html"))?;
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(context)
    }
}

/// Template-facing view of an action.
#[derive(Debug, Serialize)]
pub struct ActionView {
    pub slug: &'static str,
    pub label: &'static str,
    pub needs_dates: bool,
    pub key_label: Option<&'static str>,
}

impl From<DashboardAction> for ActionView {
    fn from(action: DashboardAction) -> Self {
        Self {
            slug: action.slug(),
            label: action.label(),
            needs_dates: action.needs_dates(),
            key_label: action.key_param().map(|(_, label)| label),
        }
    }
}
