use super::view::PageView;
use crate::error::AppResult;
use minijinja::Environment;

const INDEX_TEMPLATE: &str = "index.html";

/// Turns a [`PageView`] snapshot into the HTML page. Templates are compiled
/// once at startup; `.html` templates are auto-escaped.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("templates/index.html"))?;
        Ok(Self { env })
    }

    pub fn render(&self, view: &PageView) -> AppResult<String> {
        let template = self.env.get_template(INDEX_TEMPLATE)?;
        Ok(template.render(view)?)
    }
}
