use std::{collections::HashSet, sync::Arc};

use ct_core::gateways::notify::{NotificationEvent, NotificationGateway, NotificationType};
use ct_entities::email::*;

use crate::{email::EmailGateway, user_communication};

#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
    notify_on: HashSet<NotificationType>,
}

impl Notify {
    pub fn new<G>(gw: G, notify_on: HashSet<NotificationType>) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
            notify_on,
        }
    }

    fn skip(&self, ev: &NotificationEvent) -> bool {
        !self.notify_on.contains(&ev.kind())
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        if self.skip(&event) {
            log::debug!("Skipping notification {:?}", event.kind());
            return;
        }
        match event {
            E::CommentCreated {
                thread,
                comment,
                creator,
                email_addresses,
            } => {
                if email_addresses.is_empty() {
                    return;
                }
                let content =
                    match user_communication::comment_created_email(thread, comment, creator) {
                        Ok(content) => content,
                        Err(err) => {
                            log::warn!(
                                "Unable to compose e-mail for new comment {}: {err}",
                                comment.id
                            );
                            return;
                        }
                    };
                log::info!(
                    "Sending e-mails to {} recipients after new comment {} in thread {}",
                    email_addresses.len(),
                    comment.id,
                    thread.id,
                );
                compose_and_send_emails(&*self.email_gw, email_addresses, &content);
            }
        }
    }
}

fn compose_and_send_emails(
    gw: &dyn EmailGateway,
    recipients: &[EmailAddress],
    email_content: &EmailContent,
) {
    gw.compose_and_send(recipients, email_content);
}
