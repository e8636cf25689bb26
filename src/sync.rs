use crate::config::Config;
use crate::error::SyncResult;
use crate::extractor::extract_schedule;
use crate::google::models::{CalendarEvent, Message, MessageSummary};
use crate::google::{from_matches, plain_text_body};
use async_trait::async_trait;
use tracing::{debug, info};

/// Source of bearer tokens for the Google APIs
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> SyncResult<String>;
}

/// Mail operations the pass needs
#[async_trait]
pub trait MailService: Send + Sync {
    /// List unread messages from the given sender
    async fn list_unread(&self, token: &str, sender: &str) -> SyncResult<Vec<MessageSummary>>;
    /// Fetch a full message by id
    async fn get_message(&self, token: &str, id: &str) -> SyncResult<Message>;
    /// Remove the UNREAD label from a message
    async fn mark_read(&self, token: &str, id: &str) -> SyncResult<()>;
}

/// Calendar operations the pass needs
#[async_trait]
pub trait CalendarService: Send + Sync {
    async fn create_event(&self, token: &str, event: &CalendarEvent) -> SyncResult<()>;
}

/// Summary of a completed pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Unread messages returned by the search
    pub listed: usize,
    /// Calendar events created (and messages marked read)
    pub created: usize,
    /// Messages skipped: wrong sender or no schedule in the body
    pub skipped: usize,
}

/// Run a single mail-to-calendar pass.
///
/// Messages are processed strictly one at a time. A message whose From header
/// does not contain the configured sender, or whose body has no schedule
/// sentence, is skipped silently. Any token or API error aborts the whole
/// pass; messages after the failing one are never touched. Event creation and
/// mark-as-read are two independent calls with no rollback, so a failure in
/// between leaves the event created and the message unread, and the next run
/// will create a duplicate.
pub async fn run_pass(
    tokens: &dyn TokenProvider,
    mail: &dyn MailService,
    calendar: &dyn CalendarService,
    config: &Config,
) -> SyncResult<SyncReport> {
    let token = tokens.access_token().await?;

    let summaries = mail.list_unread(&token, &config.target_sender).await?;
    info!("Found {} unread message(s)", summaries.len());

    let mut report = SyncReport {
        listed: summaries.len(),
        ..Default::default()
    };

    for summary in &summaries {
        let message = mail.get_message(&token, &summary.id).await?;

        if !from_matches(&message, &config.target_sender) {
            debug!("Message {} is not from the target sender, skipping", message.id);
            report.skipped += 1;
            continue;
        }

        let body = plain_text_body(&message);
        let Some(record) = extract_schedule(&body) else {
            debug!("No schedule found in message {}, skipping", message.id);
            report.skipped += 1;
            continue;
        };

        info!("Found class \"{}\" starting {}", record.name, record.start);

        let event = CalendarEvent::for_class(&record, &config.calendar_timezone);
        calendar.create_event(&token, &event).await?;
        mail.mark_read(&token, &message.id).await?;

        report.created += 1;
    }

    Ok(report)
}
