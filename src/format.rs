use crate::models::{Lead, Qualification};

/// Maximum number of characters of research shown before the preview is cut.
pub const RESEARCH_PREVIEW_CHARS: usize = 300;

/// Builds the Telegram notification text for a submitted lead.
///
/// Produces HTML-markup text suitable for `parse_mode: HTML`. Sections are
/// appended in a fixed order: lead fields, then the qualification block when
/// one is present, then a research preview when the research text is
/// non-empty.
///
/// # Arguments
///
/// * `lead` - The submitted lead record.
/// * `qualification` - Categorization result, if the lead was qualified.
/// * `research` - Background research text, if any was gathered.
///
/// # Returns
///
/// * `String` - The complete message text, ready to send.
pub fn format_lead_notification(
    lead: &Lead,
    qualification: Option<&Qualification>,
    research: Option<&str>,
) -> String {
    let mut text = String::from("<b>🎯 New Lead Submitted!</b>\n\n");

    text.push_str(&format!("<b>Name:</b> {}\n", lead.name));
    text.push_str(&format!("<b>Email:</b> {}\n", lead.email));
    if let Some(phone) = lead.phone.as_deref().filter(|p| !p.is_empty()) {
        text.push_str(&format!("<b>Phone:</b> {}\n", phone));
    }
    text.push_str(&format!("<b>Company:</b> {}\n", lead.company));
    text.push_str(&format!("<b>Message:</b> {}\n", lead.message));

    if let Some(qualification) = qualification {
        text.push_str("\n<b>📊 Qualification</b>\n");
        text.push_str(&format!("<b>Category:</b> {}\n", qualification.category));
        text.push_str(&format!("<b>Reason:</b> {}\n", qualification.reason));
    }

    if let Some(research) = research.filter(|r| !r.is_empty()) {
        text.push_str("\n<b>🔍 Research Summary</b>\n");
        // Cut at a char boundary, not a grapheme boundary.
        match research.char_indices().nth(RESEARCH_PREVIEW_CHARS) {
            Some((cut, _)) => {
                text.push_str(&research[..cut]);
                text.push_str("...");
            }
            None => text.push_str(research),
        }
    }

    text
}
