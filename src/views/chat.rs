//! Mentor chat, optionally scoped to one skill. History is server-side per
//! skill; the general chat starts fresh each visit.

use crate::app::messages::{Effect, ViewEvent};
use crate::input::InputField;
use crate::models::{ChatMessage, ChatRequest};

use super::ViewContext;

/// How many prior messages accompany each request as context.
const HISTORY_WINDOW: usize = 20;

pub struct ChatView {
    ctx: ViewContext,
    pub skill_id: Option<i64>,
    pub skill_name: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub thinking: bool,
    pub input: InputField,
    pub error: Option<String>,
}

impl ChatView {
    pub fn mount(skill_id: Option<i64>, ctx: ViewContext) -> Self {
        let mut view = Self {
            ctx,
            skill_id,
            skill_name: None,
            messages: Vec::new(),
            loading: skill_id.is_some(),
            thinking: false,
            input: InputField::new(),
            error: None,
        };
        match skill_id {
            Some(id) => {
                let ctx = view.ctx.clone();
                tokio::spawn(async move {
                    let skill_name = match ctx.client.skill_detail(id).await {
                        Ok(detail) => detail.skill.map(|s| s.name),
                        Err(_) => None,
                    };
                    let history = ctx.client.chat_history(id).await;
                    ctx.send(ViewEvent::ChatHistoryLoaded {
                        skill_name,
                        history: history.map_err(|e| e.to_string()),
                    });
                });
            }
            None => view.messages.push(greeting(None)),
        }
        view
    }

    pub fn send_message(&mut self) {
        let text = self.input.text().trim().to_string();
        if text.is_empty() || self.thinking {
            return;
        }
        self.thinking = true;
        self.error = None;
        self.input.clear();
        let history: Vec<ChatMessage> = self
            .messages
            .iter()
            .rev()
            .take(HISTORY_WINDOW)
            .rev()
            .cloned()
            .collect();
        self.messages.push(ChatMessage::user(text.clone()));
        let request = ChatRequest {
            skill_id: self.skill_id,
            message: text,
            history,
        };
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.chat(&request).await;
            ctx.send(ViewEvent::ChatReplyReceived(
                result.map_err(|e| e.to_string()),
            ));
        });
    }

    pub fn apply(&mut self, event: ViewEvent) -> Vec<Effect> {
        match event {
            ViewEvent::ChatHistoryLoaded {
                skill_name,
                history,
            } => {
                self.loading = false;
                self.skill_name = skill_name;
                match history {
                    Ok(history) if history.messages.is_empty() => {
                        self.messages.push(greeting(self.skill_name.as_deref()));
                    }
                    Ok(history) => self.messages = history.messages,
                    Err(e) => self.error = Some(e),
                }
                Vec::new()
            }
            ViewEvent::ChatReplyReceived(result) => {
                self.thinking = false;
                match result {
                    Ok(reply) => self.messages.push(ChatMessage::assistant(reply.response)),
                    Err(e) => self.error = Some(e),
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}

fn greeting(skill_name: Option<&str>) -> ChatMessage {
    let text = match skill_name {
        Some(name) => format!(
            "Hi! I'm your mentor for **{name}**. Ask me anything about it."
        ),
        None => "Hi! I'm your mentor. Ask me anything about what you're learning.".to_string(),
    };
    ChatMessage::assistant(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatHistory;
    use crate::views::tests::test_ctx;

    #[tokio::test]
    async fn general_chat_opens_with_greeting() {
        let (ctx, _rx) = test_ctx();
        let view = ChatView::mount(None, ctx);
        assert_eq!(view.messages.len(), 1);
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn empty_history_gets_skill_greeting() {
        let (ctx, _rx) = test_ctx();
        let mut view = ChatView::mount(Some(2), ctx);
        view.apply(ViewEvent::ChatHistoryLoaded {
            skill_name: Some("Rust".into()),
            history: Ok(ChatHistory { messages: vec![] }),
        });
        assert_eq!(view.messages.len(), 1);
        assert!(view.messages[0].content.contains("Rust"));
    }

    #[tokio::test]
    async fn existing_history_replaces_messages() {
        let (ctx, _rx) = test_ctx();
        let mut view = ChatView::mount(Some(2), ctx);
        view.apply(ViewEvent::ChatHistoryLoaded {
            skill_name: None,
            history: Ok(ChatHistory {
                messages: vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")],
            }),
        });
        assert_eq!(view.messages.len(), 2);
    }

    #[tokio::test]
    async fn sending_is_gated_while_thinking() {
        let (ctx, _rx) = test_ctx();
        let mut view = ChatView::mount(None, ctx);
        view.input.set_text("first");
        view.send_message();
        assert!(view.thinking);
        let count = view.messages.len();
        view.input.set_text("second");
        view.send_message();
        assert_eq!(view.messages.len(), count);
        assert_eq!(view.input.text(), "second");
    }

    #[tokio::test]
    async fn reply_failure_is_inline_and_retryable() {
        let (ctx, _rx) = test_ctx();
        let mut view = ChatView::mount(None, ctx);
        view.input.set_text("hi");
        view.send_message();
        view.apply(ViewEvent::ChatReplyReceived(Err("down".into())));
        assert!(!view.thinking);
        assert_eq!(view.error.as_deref(), Some("down"));
    }
}
