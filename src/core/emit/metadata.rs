use quick_xml::escape::partial_escape;

use crate::core::extract::LabelTable;

pub const DEFAULT_LANGUAGE: &str = "en_US";

const METADATA_NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";

#[derive(Debug, Clone, Copy)]
pub struct MetadataOptions<'a> {
    /// Written to `<categories>`; the component name.
    pub category: &'a str,
    pub language: &'a str,
}

/// Render `labels.xml`, one `<labels>` record per label in first-seen order.
pub fn emit_metadata(labels: &LabelTable, options: &MetadataOptions) -> String {
    let mut xml = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(r#"<CustomLabels xmlns="{}">"#, METADATA_NAMESPACE),
    ];

    for (name, text) in labels.iter() {
        let text = partial_escape(text);
        xml.push(format!(
            "    <labels>
        <fullName>{name}</fullName>
        <categories>{category}</categories>
        <language>{language}</language>
        <protected>false</protected>
        <shortDescription>{text}</shortDescription>
        <value>{text}</value>
    </labels>",
            name = name,
            category = partial_escape(options.category),
            language = options.language,
            text = text,
        ));
    }

    xml.push("</CustomLabels>".to_string());
    let mut content = xml.join("\n");
    content.push('\n');
    content
}
