use crate::llm::ChatMessage;

pub const DEFAULT_DIRECTIVE_TEMPLATE: &str = "Translate the following text into {language}";

/// The two-message instruction: directive first, then the source text as is.
pub fn build_messages(template: &str, target_language: &str, source_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(directive(template, target_language)),
        ChatMessage::user(source_text),
    ]
}

/// Fill `{language}` in the template. A template without the placeholder gets
/// the language appended so the directive always names it.
pub fn directive(template: &str, target_language: &str) -> String {
    if template.contains("{language}") {
        template.replace("{language}", target_language)
    } else {
        format!("{} {}", template.trim_end(), target_language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ChatRole;

    #[test]
    fn directive_then_source_text() {
        let messages = build_messages(DEFAULT_DIRECTIVE_TEMPLATE, "English", "Bom dia");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[0].content, "Translate the following text into English");
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(messages[1].content, "Bom dia");
    }

    #[test]
    fn source_text_is_not_altered() {
        let text = "  <b>\"Olá\"</b> & {language}\n\ttabs\u{0000}  ";
        let messages = build_messages(DEFAULT_DIRECTIVE_TEMPLATE, "French", text);
        assert_eq!(messages[1].content, text);
    }

    #[test]
    fn long_text_is_not_truncated() {
        let text = "palavra ".repeat(20_000);
        let messages = build_messages(DEFAULT_DIRECTIVE_TEMPLATE, "German", &text);
        assert_eq!(messages[1].content.len(), text.len());
    }

    #[test]
    fn custom_template() {
        assert_eq!(
            directive("Traduza o texto a seguir para {language}", "inglês"),
            "Traduza o texto a seguir para inglês"
        );
    }

    #[test]
    fn template_without_placeholder_still_names_language() {
        assert_eq!(directive("Translate to ", "Arabic"), "Translate to Arabic");
    }
}
