//! HTML pages served to the hosting platform.

use crate::activity::domain::ActivityParams;
use minijinja::{Environment, context};

/// Liveness page served at the root path.
pub const HOME_PAGE: &str = "<h1>TaskTrack-AP is running!</h1>\
<p>Use the /tasktrack/... endpoints to interact with the activity.</p>";

const CONFIG_TEMPLATE_NAME: &str = "config.html";

const CONFIG_TEMPLATE: &str = r"<html>
  <head>
    <title>{{ activity }} - Configuration</title>
  </head>
  <body>
    <h1>{{ activity }} configuration</h1>
    <p>{{ description }}</p>
    <ul>
    {%- for param in params %}
      <li>{{ param.label }} (<code>{{ param.name }}</code>, {{ param.type }}): default {{ param.default }}
      {%- if param.min is defined %}, range {{ param.min }} to {{ param.max }}{% endif %}</li>
    {%- endfor %}
    </ul>
  </body>
</html>
";

/// Template environment for the activity pages.
#[derive(Debug)]
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    /// Compiles the page templates.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(CONFIG_TEMPLATE_NAME, CONFIG_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders the configuration page for the given activity parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render_config(&self, params: &ActivityParams) -> Result<String, minijinja::Error> {
        self.env
            .get_template(CONFIG_TEMPLATE_NAME)?
            .render(context! {
                activity => params.activity,
                description => params.description,
                params => params.params,
            })
    }
}
