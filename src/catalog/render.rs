use anyhow::Result;
use minijinja::{Environment, context};

use crate::catalog::component::Component;
use crate::config::OUTPUT_FILE_NAME;

/// Render the final component list through the configured template.
///
/// The list is passed in accumulated order with `img` already rewritten to
/// build-relative paths; nothing is escaped or transformed here. Escaping
/// is the template engine's own policy for the `index.html` template name.
pub fn render_document(template_src: &str, components: &[Component]) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(OUTPUT_FILE_NAME, template_src)?;
    let rendered = env
        .get_template(OUTPUT_FILE_NAME)?
        .render(context! { components })?;
    Ok(rendered)
}
