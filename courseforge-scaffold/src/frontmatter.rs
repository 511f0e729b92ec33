//! YAML frontmatter generation for module pages.

use courseforge_core::ModuleDescriptor;

/// Generates Docusaurus YAML frontmatter for a module page.
///
/// Produces `title` (formatted as `Module NN: Title`), `description`,
/// `sidebar_position` (the module number), and `tags` (track and
/// difficulty).
#[must_use]
pub fn generate_frontmatter(descriptor: &ModuleDescriptor) -> String {
    let full_title = format!("Module {:02}: {}", descriptor.number, descriptor.title);

    let mut lines = Vec::new();
    lines.push("---".to_string());
    lines.push(format!("title: {}", quote_yaml_string(&full_title)));
    lines.push(format!(
        "description: {}",
        quote_yaml_string(&descriptor.description)
    ));
    lines.push(format!("sidebar_position: {}", descriptor.number));
    lines.push("tags:".to_string());
    lines.push(format!("  - {}", descriptor.track));
    lines.push(format!("  - {}", descriptor.difficulty));
    lines.push("---".to_string());
    lines.join("\n")
}

/// Quotes a YAML string value if it contains special characters.
fn quote_yaml_string(s: &str) -> String {
    if s.contains(':') || s.contains('#') || s.contains('"') || s.starts_with(' ') {
        let escaped = s.replace('"', "\\\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
