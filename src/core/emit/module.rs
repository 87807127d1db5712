use crate::core::extract::LabelTable;

/// Render `labels.js`.
///
/// Names are emitted in sorted order so regenerating a component gives a
/// stable diff.
pub fn emit_module(labels: &LabelTable) -> String {
    let names = labels.sorted_names();
    let mut lines: Vec<String> = names
        .iter()
        .map(|name| format!("import {} from '@salesforce/label/c.{}';", name, name))
        .collect();

    lines.push(String::new());
    lines.push("export const label = {".to_string());
    lines.extend(names.iter().map(|name| format!("    {},", name)));
    lines.push("};".to_string());

    let mut module = lines.join("\n");
    module.push('\n');
    module
}
