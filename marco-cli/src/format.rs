//! Console rendering for memory summaries.

use chat_memory::MemoryDocument;
use chrono::Local;
use marco_core::Role;

pub const MEMORY_PREVIEW_LEN: usize = 50;
const SUMMARY_PREVIEW_COUNT: usize = 3;

/// First `max` chars of `content`, with `...` appended when it was longer.
pub fn message_preview(content: &str, max: usize) -> String {
    let preview: String = content.chars().take(max).collect();
    if content.chars().count() > max {
        format!("{}...", preview)
    } else {
        preview
    }
}

fn speaker_label(role: Role) -> &'static str {
    match role {
        Role::User => "👤 Toi",
        Role::Assistant => "✈️ Marco",
        Role::System => "Système",
    }
}

/// Multi-line summary of one saved document: metadata and the first few messages.
/// The timestamp is stored in UTC and shown in local time.
pub fn format_memory_summary(doc: &MemoryDocument) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  last updated: {}\n",
        doc.last_updated.with_timezone(&Local).format("%d/%m/%Y %H:%M")
    ));
    out.push_str(&format!("  turns: {}\n", doc.turn_count));
    if let Some(owner) = &doc.owner_id {
        out.push_str(&format!("  traveler: {}\n", owner));
    }
    out.push_str(&format!("  messages: {}\n", doc.history.len()));

    for (i, message) in doc.history.iter().take(SUMMARY_PREVIEW_COUNT).enumerate() {
        out.push_str(&format!(
            "  [{}] {}: {}\n",
            i + 1,
            speaker_label(message.role),
            message_preview(&message.content, MEMORY_PREVIEW_LEN)
        ));
    }
    if doc.history.len() > SUMMARY_PREVIEW_COUNT {
        out.push_str(&format!(
            "  ... and {} more\n",
            doc.history.len() - SUMMARY_PREVIEW_COUNT
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use marco_core::ChatMessage;

    /// **Test: Short content is returned untouched.**
    #[test]
    fn message_preview_short_unchanged() {
        assert_eq!(message_preview("Bonjour", 50), "Bonjour");
    }

    /// **Test: Long content is cut at max chars with an ellipsis.**
    #[test]
    fn message_preview_long_truncated() {
        let long = "a".repeat(60);
        let preview = message_preview(&long, 50);
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.ends_with("..."));
    }

    /// **Test: Truncation counts chars, not bytes (accents survive).**
    #[test]
    fn message_preview_multibyte_safe() {
        let content = "é".repeat(10);
        assert_eq!(message_preview(&content, 4), "éééé...");
    }

    /// **Test: Summary lists metadata, previews, and the overflow line.**
    #[test]
    fn format_memory_summary_with_overflow() {
        let history = vec![
            ChatMessage::user("Je veux aller à Tokyo"),
            ChatMessage::assistant("Tokyo, excellent choix !"),
            ChatMessage::user("Quel budget prévoir ?"),
            ChatMessage::assistant("Compte 1500 euros pour une semaine."),
        ];
        let doc = MemoryDocument::new(history, Some("tr-7".to_string()));

        let summary = format_memory_summary(&doc);
        assert!(summary.contains("turns: 2"));
        assert!(summary.contains("traveler: tr-7"));
        assert!(summary.contains("messages: 4"));
        assert!(summary.contains("[1] 👤 Toi: Je veux aller à Tokyo"));
        assert!(summary.contains("... and 1 more"));
    }

    /// **Test: Summary of a short shared-file document has no traveler or overflow line.**
    #[test]
    fn format_memory_summary_short() {
        let doc = MemoryDocument::new(vec![ChatMessage::user("Bonjour")], None);

        let summary = format_memory_summary(&doc);
        assert!(!summary.contains("traveler:"));
        assert!(!summary.contains("more"));
        assert!(summary.contains("messages: 1"));
    }

    /// **Test: The last-updated line is a dd/mm/yyyy hh:mm local timestamp.**
    #[test]
    fn format_memory_summary_renders_local_timestamp() {
        let doc = MemoryDocument::new(vec![], None);

        let summary = format_memory_summary(&doc);
        let line = summary
            .lines()
            .find(|line| line.trim_start().starts_with("last updated: "))
            .expect("Summary should carry a last-updated line");
        let stamp = line.trim_start().trim_start_matches("last updated: ");
        assert_eq!(stamp.len(), 16);
        assert_eq!(&stamp[2..3], "/");
        assert_eq!(&stamp[5..6], "/");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }
}
