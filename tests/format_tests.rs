/// Unit tests for notification formatting
/// Pins the exact HTML layout Telegram receives for every section combination
use lead_notify::format::{format_lead_notification, RESEARCH_PREVIEW_CHARS};
use lead_notify::models::{Lead, Qualification};

/// Helper function to build a lead without a phone number
fn sample_lead() -> Lead {
    Lead {
        name: "Jane Roe".to_string(),
        email: "jane@acme.test".to_string(),
        phone: None,
        company: "Acme".to_string(),
        message: "Interested in a demo".to_string(),
    }
}

fn sample_qualification() -> Qualification {
    Qualification {
        category: "Hot".to_string(),
        reason: "Budget confirmed".to_string(),
    }
}

#[cfg(test)]
mod message_layout_tests {
    use super::*;

    #[test]
    fn test_minimal_lead_exact_output() {
        let text = format_lead_notification(&sample_lead(), None, None);

        assert_eq!(
            text,
            "<b>🎯 New Lead Submitted!</b>\n\n\
             <b>Name:</b> Jane Roe\n\
             <b>Email:</b> jane@acme.test\n\
             <b>Company:</b> Acme\n\
             <b>Message:</b> Interested in a demo\n"
        );
    }

    #[test]
    fn test_header_always_first() {
        let text = format_lead_notification(
            &sample_lead(),
            Some(&sample_qualification()),
            Some("background"),
        );

        assert!(text.starts_with("<b>🎯 New Lead Submitted!</b>\n\n"));
    }

    #[test]
    fn test_full_message_section_order() {
        let mut lead = sample_lead();
        lead.phone = Some("555-1234".to_string());

        let text = format_lead_notification(
            &lead,
            Some(&sample_qualification()),
            Some("Acme is a mid-size manufacturer."),
        );

        let name = text.find("<b>Name:</b>").unwrap();
        let email = text.find("<b>Email:</b>").unwrap();
        let phone = text.find("<b>Phone:</b>").unwrap();
        let company = text.find("<b>Company:</b>").unwrap();
        let message = text.find("<b>Message:</b>").unwrap();
        let qualification = text.find("<b>📊 Qualification</b>").unwrap();
        let research = text.find("<b>🔍 Research Summary</b>").unwrap();

        assert!(name < email);
        assert!(email < phone);
        assert!(phone < company);
        assert!(company < message);
        assert!(message < qualification);
        assert!(qualification < research);
    }
}

#[cfg(test)]
mod phone_line_tests {
    use super::*;

    #[test]
    fn test_phone_rendered_when_present() {
        let mut lead = sample_lead();
        lead.phone = Some("555-1234".to_string());

        let text = format_lead_notification(&lead, None, None);
        assert!(text.contains("<b>Phone:</b> 555-1234\n"));
    }

    #[test]
    fn test_missing_phone_omitted() {
        let text = format_lead_notification(&sample_lead(), None, None);
        assert!(!text.contains("<b>Phone:</b>"));
    }

    #[test]
    fn test_empty_phone_omitted() {
        let mut lead = sample_lead();
        lead.phone = Some(String::new());

        let text = format_lead_notification(&lead, None, None);
        assert!(!text.contains("<b>Phone:</b>"));
    }
}

#[cfg(test)]
mod qualification_tests {
    use super::*;

    #[test]
    fn test_qualification_section_rendered() {
        let text = format_lead_notification(&sample_lead(), Some(&sample_qualification()), None);

        assert!(text.contains(
            "\n<b>📊 Qualification</b>\n\
             <b>Category:</b> Hot\n\
             <b>Reason:</b> Budget confirmed\n"
        ));
    }

    #[test]
    fn test_no_qualification_no_section() {
        let text = format_lead_notification(&sample_lead(), None, Some("notes"));
        assert!(!text.contains("Qualification"));
    }
}

#[cfg(test)]
mod research_preview_tests {
    use super::*;

    #[test]
    fn test_short_research_kept_whole() {
        let text = format_lead_notification(&sample_lead(), None, Some("Short profile."));

        assert!(text.ends_with("\n<b>🔍 Research Summary</b>\nShort profile."));
        assert!(!text.ends_with("..."));
    }

    #[test]
    fn test_research_at_limit_has_no_marker() {
        let research = "a".repeat(RESEARCH_PREVIEW_CHARS);
        let text = format_lead_notification(&sample_lead(), None, Some(&research));

        assert!(text.ends_with(&research));
        assert!(!text.ends_with("..."));
    }

    #[test]
    fn test_research_over_limit_truncated() {
        let research = "a".repeat(RESEARCH_PREVIEW_CHARS + 1);
        let text = format_lead_notification(&sample_lead(), None, Some(&research));

        let expected = format!("{}...", "a".repeat(RESEARCH_PREVIEW_CHARS));
        assert!(text.ends_with(&expected));
        assert!(!text.contains(&research));
    }

    #[test]
    fn test_multibyte_research_cut_by_chars() {
        // 'é' is two bytes; the cut counts chars, not bytes
        let research = "é".repeat(RESEARCH_PREVIEW_CHARS + 50);
        let text = format_lead_notification(&sample_lead(), None, Some(&research));

        let marker = text.find("<b>🔍 Research Summary</b>\n").unwrap();
        let preview = &text[marker + "<b>🔍 Research Summary</b>\n".len()..];
        let preview = preview.strip_suffix("...").unwrap();
        assert_eq!(preview.chars().count(), RESEARCH_PREVIEW_CHARS);
    }

    #[test]
    fn test_empty_research_omitted() {
        let text = format_lead_notification(&sample_lead(), None, Some(""));
        assert!(!text.contains("Research Summary"));
    }

    #[test]
    fn test_none_research_omitted() {
        let text = format_lead_notification(&sample_lead(), None, None);
        assert!(!text.contains("Research Summary"));
    }
}
