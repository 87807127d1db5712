use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, component_path, output_path, run_with_input, stderr, stdout};

const TEMPLATE: &str = r#"<template>
    <lightning-card title="Contact">
        <h2>Contact us</h2>
        <p>We answer within one day.</p>
        <p>{phone}</p>
        <lightning-button label="Send message" onclick={handleSend}></lightning-button>
    </lightning-card>
</template>
"#;

#[test]
fn test_interactive_generate() -> Result<()> {
    let test = CliTest::with_component("contactForm", TEMPLATE)?;

    assert_cmd_snapshot!(test.command().pass_stdin("contactForm\n1\n"));

    assert_eq!(
        test.read_file(&output_path("contactForm", "contactForm.html"))?,
        r#"<template>
    <lightning-card title="Contact">
        <h2>
            {label.contactUs}
        </h2>
        <p>
            {label.weAnswerWithinOneDay}
        </p>
        <p>
            {phone}
        </p>
        <lightning-button label={label.btnSendMessage} onclick={handleSend}></lightning-button>
    </lightning-card>
</template>
"#
    );

    assert_eq!(
        test.read_file(&output_path("contactForm", "labels.js"))?,
        "import btnSendMessage from '@salesforce/label/c.btnSendMessage';
import contactUs from '@salesforce/label/c.contactUs';
import weAnswerWithinOneDay from '@salesforce/label/c.weAnswerWithinOneDay';

export const label = {
    btnSendMessage,
    contactUs,
    weAnswerWithinOneDay,
};
"
    );

    let xml = test.read_file(&output_path("contactForm", "labels.xml"))?;
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("<fullName>btnSendMessage</fullName>"));
    assert!(xml.contains("<value>We answer within one day.</value>"));
    assert!(xml.contains("<shortDescription>Send message</shortDescription>"));
    assert_eq!(xml.matches("<categories>contactForm</categories>").count(), 3);

    // source template is never modified
    assert_eq!(test.read_file(&component_path("contactForm"))?, TEMPLATE);

    Ok(())
}

#[test]
fn test_headless_generate_with_flags() -> Result<()> {
    let test = CliTest::with_component("contactForm", TEMPLATE)?;

    let output = test
        .generate_command()
        .args(["contactForm", "--style", "UPPER_CASE"])
        .stdin(std::process::Stdio::null())
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(!stdout(&output).contains("[?]"));

    let module = test.read_file(&output_path("contactForm", "labels.js"))?;
    assert!(module.contains("import BTN_SEND_MESSAGE from '@salesforce/label/c.BTN_SEND_MESSAGE';"));
    assert!(module.contains("    CONTACT_US,"));

    Ok(())
}

#[test]
fn test_invalid_style_choice_is_asked_again() -> Result<()> {
    let test = CliTest::with_component("contactForm", TEMPLATE)?;

    let output = run_with_input(test.generate_command().arg("contactForm"), "7\nabc\n3\n")?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).matches("Your choice").count(), 3);

    let module = test.read_file(&output_path("contactForm", "labels.js"))?;
    assert!(module.contains("    BtnSendMessage,"));

    Ok(())
}

#[test]
fn test_missing_component_exits_with_failure() -> Result<()> {
    let test = CliTest::with_component("contactForm", TEMPLATE)?;

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(test.generate_command().args(["unknown", "-s", "camelCase"]));
    });
    assert!(!test.root().join("force-app/main/default/labels").exists());

    Ok(())
}

#[test]
fn test_missing_markup_exits_with_failure() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("force-app/main/default/lwc/contactForm/contactForm.js", "")?;

    let output = run_with_input(test.generate_command().arg("contactForm"), "1\n")?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("HTML file not found"));

    Ok(())
}

#[test]
fn test_existing_module_requires_confirmation() -> Result<()> {
    let test = CliTest::with_component("contactForm", TEMPLATE)?;
    test.write_file(&output_path("contactForm", "labels.js"), "// hand edited")?;

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(
            test.generate_command()
                .args(["contactForm", "-s", "camelCase"])
                .pass_stdin("n\n")
        );
    });
    assert_eq!(
        test.read_file(&output_path("contactForm", "labels.js"))?,
        "// hand edited"
    );

    let accepted = run_with_input(test.generate_command().arg("contactForm"), "1\ny\n")?;
    assert_eq!(accepted.status.code(), Some(0), "stderr: {}", stderr(&accepted));
    assert!(
        test.read_file(&output_path("contactForm", "labels.js"))?
            .contains("btnSendMessage,")
    );

    Ok(())
}

#[test]
fn test_force_overwrites_without_prompt() -> Result<()> {
    let test = CliTest::with_component("contactForm", TEMPLATE)?;
    test.write_file(&output_path("contactForm", "labels.js"), "// old")?;

    let output = test
        .generate_command()
        .args(["contactForm", "-s", "camelCase", "--force"])
        .stdin(std::process::Stdio::null())
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(!stdout(&output).contains("already exists"));

    Ok(())
}

#[test]
fn test_closed_stdin_is_an_error() -> Result<()> {
    let test = CliTest::with_component("contactForm", TEMPLATE)?;

    assert_cmd_snapshot!(test.command().pass_stdin(""));
    assert!(!test.root().join("force-app/main/default/labels").exists());

    Ok(())
}

#[test]
fn test_unsupported_style_in_config() -> Result<()> {
    let test = CliTest::with_component("contactForm", TEMPLATE)?;
    test.write_file(".lwclabelsrc.json", r#"{ "namingStyle": "kebab-case" }"#)?;

    assert_cmd_snapshot!(test.generate_command().arg("contactForm").pass_stdin(""));
    assert!(!test.root().join("force-app/main/default/labels").exists());

    Ok(())
}

#[test]
fn test_config_changes_roots_and_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/lwc/banner/banner.html", "<template><span>Sale</span></template>")?;
    test.write_file(
        ".lwclabelsrc.json",
        r#"{ "lwcRoot": "src/lwc", "labelsRoot": "out", "language": "fr", "indent": 2, "namingStyle": "snake_case" }"#,
    )?;

    let output = test
        .generate_command()
        .arg("banner")
        .stdin(std::process::Stdio::null())
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("out/banner/banner.html")?,
        "<template>\n  <span>\n    {label.sale}\n  </span>\n</template>\n"
    );
    assert!(test.read_file("out/banner/labels.xml")?.contains("<language>fr</language>"));

    Ok(())
}

#[test]
fn test_verbose_lists_labels_and_collisions() -> Result<()> {
    let test = CliTest::with_component(
        "faq",
        "<template><p>Read more</p><p>Read more!</p><span>OK</span><div>OK</div></template>",
    )?;

    assert_cmd_snapshot!(test.generate_command().args(["faq", "-s", "camelCase", "-v"]));

    let html = test.read_file(&output_path("faq", "faq.html"))?;
    assert_eq!(html.matches("{label.readMore}").count(), 2);
    assert_eq!(html.matches("{label.ok}").count(), 2);

    let xml = test.read_file(&output_path("faq", "labels.xml"))?;
    assert_eq!(xml.matches("<labels>").count(), 2);
    assert!(xml.contains("<value>Read more!</value>"));
    assert!(!xml.contains("<value>Read more</value>"));

    Ok(())
}
