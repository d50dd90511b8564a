//! Recipient and subject feed parsing
//!
//! The feed is a plain comma-delimited text file: header row discarded,
//! fields extracted positionally, no quoting and no schema validation.
//! Short rows yield empty trailing fields; rows with a blank address are
//! left for the dispatcher to skip.

use crate::domain::campaign::models::recipient::Recipient;

/// Parse the recipient feed: drop the header line, one [`Recipient`] per
/// remaining line.
pub fn parse_recipients(input: &str) -> Vec<Recipient> {
    input.trim().lines().skip(1).map(parse_row).collect()
}

/// Parse the subject list: one subject per non-blank line, in order.
pub fn parse_subjects(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn parse_row(line: &str) -> Recipient {
    let mut fields = line.split(',');

    Recipient {
        address: fields.next().unwrap_or_default().trim().to_string(),
        name: optional(fields.next()),
        subject: optional(fields.next()),
        assigned_sender: optional(fields.next()),
        status: optional(fields.next()),
    }
}

fn optional(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_row_is_discarded() {
        let feed = "email,name\ncarrier@example.com,Dana\n";

        let recipients = parse_recipients(feed);

        assert_eq!(recipients.len(), 1);
        assert_eq!(recipients[0].address, "carrier@example.com");
        assert_eq!(recipients[0].name.as_deref(), Some("Dana"));
    }

    #[test]
    fn test_fields_are_extracted_positionally() {
        let feed = "email,name,subject,sender,status\n\
            carrier@example.com,Dana,Custom subject,ops@example.com,pending\n";

        let recipients = parse_recipients(feed);

        let recipient = &recipients[0];
        assert_eq!(recipient.subject.as_deref(), Some("Custom subject"));
        assert_eq!(recipient.assigned_sender.as_deref(), Some("ops@example.com"));
        assert_eq!(recipient.status.as_deref(), Some("pending"));
    }

    #[test]
    fn test_short_row_yields_empty_trailing_fields() {
        let feed = "email,name\ncarrier@example.com\n";

        let recipients = parse_recipients(feed);

        let recipient = &recipients[0];
        assert_eq!(recipient.address, "carrier@example.com");
        assert_eq!(recipient.name, None);
        assert_eq!(recipient.subject, None);
        assert_eq!(recipient.assigned_sender, None);
        assert_eq!(recipient.status, None);
    }

    #[test]
    fn test_blank_address_rows_are_kept_for_the_dispatcher() {
        let feed = "email,name\n,Dana\ncarrier@example.com,Lee\n";

        let recipients = parse_recipients(feed);

        assert_eq!(recipients.len(), 2);
        assert!(!recipients[0].has_address());
        assert!(recipients[1].has_address());
    }

    #[test]
    fn test_parse_subjects_skips_blank_lines() {
        let subjects = parse_subjects("First subject\n\n  Second subject  \n");

        assert_eq!(subjects, vec!["First subject", "Second subject"]);
    }
}
