/// settings.xml generation.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Default tab stop interval in twips (half an inch).
const DEFAULT_TAB_STOP: u32 = 720;

/// Compatibility mode of Word 2013 and later.
const COMPATIBILITY_MODE: u32 = 15;

/// Generate word/settings.xml.
pub(crate) fn generate_settings_xml() -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:settings xmlns:w="{}">"#, namespace::WML_MAIN)?;
    write!(xml, r#"<w:defaultTabStop w:val="{}"/>"#, DEFAULT_TAB_STOP)?;
    xml.push_str(r#"<w:characterSpacingControl w:val="doNotCompress"/>"#);
    write!(
        xml,
        r#"<w:compat><w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="{}"/></w:compat>"#,
        COMPATIBILITY_MODE
    )?;
    xml.push_str("</w:settings>");
    Ok(xml)
}
