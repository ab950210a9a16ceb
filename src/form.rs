//! Guestbook submission controller.
//!
//! Field state, client-side validation, and the mapping from server outcomes
//! to user feedback. Validation failures never reach the network layer; the
//! submit affordance is disabled while a request is in flight and re-enabled
//! on every completion path (see `disposition`, which the app applies to
//! whatever the background post returned).

use crate::api::{ApiError, NewMessage, SubmitReceipt, MAX_CONTENT_LEN, MAX_NICKNAME_LEN};

/// Which input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Nickname,
    Email,
    Content,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Nickname => Field::Email,
            Field::Email => Field::Content,
            Field::Content => Field::Nickname,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Nickname => Field::Content,
            Field::Email => Field::Nickname,
            Field::Content => Field::Email,
        }
    }
}

/// Feedback severity shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Warning(String),
    Error(String),
}

/// What the app should do with a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disposition {
    pub feedback: Feedback,
    pub reset_form: bool,
    pub refresh_stats: bool,
}

/// Guestbook form state.
#[derive(Debug, Default)]
pub struct MessageForm {
    pub nickname: String,
    pub email: String,
    pub content: String,
    pub focus: Field,
    pub submitting: bool,
    pub feedback: Option<Feedback>,
}

impl MessageForm {
    pub fn handle_char(&mut self, c: char) {
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Nickname => &mut self.nickname,
            Field::Email => &mut self.email,
            Field::Content => &mut self.content,
        }
    }

    /// Client-side validation. On success returns the request body; on
    /// failure a user-visible message, and no network call is made.
    pub fn validate(&self) -> Result<NewMessage, String> {
        let nickname = self.nickname.trim();
        let content = self.content.trim();
        if nickname.is_empty() {
            return Err("Nickname is required".to_string());
        }
        if nickname.chars().count() > MAX_NICKNAME_LEN {
            return Err(format!("Nickname must be at most {} characters", MAX_NICKNAME_LEN));
        }
        if content.is_empty() {
            return Err("Message content is required".to_string());
        }
        if content.chars().count() > MAX_CONTENT_LEN {
            return Err(format!("Message must be at most {} characters", MAX_CONTENT_LEN));
        }
        let email = self.email.trim();
        Ok(NewMessage {
            nickname: nickname.to_string(),
            content: content.to_string(),
            email: if email.is_empty() {
                None
            } else {
                Some(email.to_string())
            },
        })
    }

    /// Begin a submission: records the in-flight state so the affordance
    /// stays disabled until `finish` runs.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.feedback = None;
    }

    /// Apply a finished submission. Always clears the in-flight flag.
    pub fn finish(&mut self, disposition: &Disposition) {
        self.submitting = false;
        if disposition.reset_form {
            self.nickname.clear();
            self.email.clear();
            self.content.clear();
            self.focus = Field::Nickname;
        }
        self.feedback = Some(disposition.feedback.clone());
    }
}

/// Map a server outcome to feedback and follow-up actions.
///
/// `status == "pending"` is the accepted path: reset the form and kick a
/// stats refresh (fire-and-forget; its failure never changes this outcome).
/// Any other success-shaped response surfaces the server's own message as a
/// warning. Rate limiting gets a fixed line; other rejections surface the
/// server detail; everything else falls back to a generic retry message.
pub fn disposition(result: &Result<SubmitReceipt, ApiError>) -> Disposition {
    match result {
        Ok(receipt) if receipt.status == "pending" => Disposition {
            feedback: Feedback::Success(
                "Message submitted, it will appear once approved".to_string(),
            ),
            reset_form: true,
            refresh_stats: true,
        },
        Ok(receipt) => Disposition {
            feedback: Feedback::Warning(
                receipt
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("Message was not accepted ({})", receipt.status)),
            ),
            reset_form: false,
            refresh_stats: false,
        },
        Err(ApiError::RateLimited) => Disposition {
            feedback: Feedback::Error(
                "Too many messages, please wait a little before trying again".to_string(),
            ),
            reset_form: false,
            refresh_stats: false,
        },
        Err(ApiError::Server { detail, .. }) => Disposition {
            feedback: Feedback::Error(detail.clone()),
            reset_form: false,
            refresh_stats: false,
        },
        Err(_) => Disposition {
            feedback: Feedback::Error("Submission failed, please try again".to_string()),
            reset_form: false,
            refresh_stats: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(nickname: &str, content: &str) -> MessageForm {
        MessageForm {
            nickname: nickname.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_builds_body() {
        let body = form("ann", "hello there").validate().unwrap();
        assert_eq!(body.nickname, "ann");
        assert!(body.email.is_none());
    }

    #[test]
    fn test_nickname_boundary() {
        assert!(form(&"a".repeat(50), "hi").validate().is_ok());
        assert!(form(&"a".repeat(51), "hi").validate().is_err());
    }

    #[test]
    fn test_content_boundary() {
        assert!(form("ann", &"b".repeat(2000)).validate().is_ok());
        assert!(form("ann", &"b".repeat(2001)).validate().is_err());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(form("", "hi").validate().is_err());
        assert!(form("ann", "   ").validate().is_err());
    }

    #[test]
    fn test_blank_email_is_omitted() {
        let mut f = form("ann", "hi");
        f.email = "  ".to_string();
        assert!(f.validate().unwrap().email.is_none());
    }

    #[test]
    fn test_pending_receipt_resets_and_refreshes() {
        let d = disposition(&Ok(SubmitReceipt {
            status: "pending".to_string(),
            message: None,
        }));
        assert!(d.reset_form);
        assert!(d.refresh_stats);
        assert!(matches!(d.feedback, Feedback::Success(_)));
    }

    #[test]
    fn test_rejected_receipt_surfaces_server_message() {
        let d = disposition(&Ok(SubmitReceipt {
            status: "rejected".to_string(),
            message: Some("content not acceptable".to_string()),
        }));
        assert!(!d.reset_form);
        assert!(!d.refresh_stats);
        assert_eq!(
            d.feedback,
            Feedback::Warning("content not acceptable".to_string())
        );
    }

    #[test]
    fn test_rate_limit_keeps_form_contents() {
        let d = disposition(&Err(ApiError::RateLimited));
        assert!(!d.reset_form);
        assert!(matches!(d.feedback, Feedback::Error(_)));

        let mut f = form("ann", "hi");
        f.begin_submit();
        assert!(f.submitting);
        f.finish(&d);
        assert!(!f.submitting);
        assert_eq!(f.nickname, "ann");
        assert_eq!(f.content, "hi");
    }

    #[test]
    fn test_server_detail_is_surfaced() {
        let d = disposition(&Err(ApiError::Server {
            status: 400,
            detail: "nickname too long".to_string(),
        }));
        assert_eq!(d.feedback, Feedback::Error("nickname too long".to_string()));
    }

    #[test]
    fn test_network_failure_gets_generic_message() {
        let d = disposition(&Err(ApiError::Network("connection refused".to_string())));
        assert_eq!(
            d.feedback,
            Feedback::Error("Submission failed, please try again".to_string())
        );
    }

    #[test]
    fn test_finish_on_success_clears_fields() {
        let mut f = form("ann", "hi");
        f.email = "a@b.c".to_string();
        f.begin_submit();
        f.finish(&disposition(&Ok(SubmitReceipt {
            status: "pending".to_string(),
            message: None,
        })));
        assert!(!f.submitting);
        assert!(f.nickname.is_empty() && f.email.is_empty() && f.content.is_empty());
        assert_eq!(f.focus, Field::Nickname);
    }
}
