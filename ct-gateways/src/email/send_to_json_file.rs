use ct_core::{
    entities::{Id, Timestamp},
    gateways::email::EmailGateway,
};
use ct_entities::email::*;
use jfs::Store;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};

/// Stores outgoing e-mails as JSON files instead of sending them.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct JsonEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl JsonEmail {
    fn new(recipients: &[EmailAddress], content: &EmailContent) -> Self {
        let to = recipients.iter().map(ToString::to_string).collect();
        let EmailContent { subject, body } = content.clone();
        Self { to, subject, body }
    }
}

impl EmailGateway for SendToJsonFile {
    fn compose_and_send(&self, recipients: &[EmailAddress], content: &EmailContent) {
        if recipients.is_empty() {
            log::debug!("No recipients for e-mail '{}'", content.subject);
            return;
        }
        let now = Timestamp::now().as_millis();
        let key = format!("{now}-{}", Id::new());
        let email = JsonEmail::new(recipients, content);
        match self.json_store.save_with_id(&email, &key) {
            Ok(_) => log::debug!("Saved e-mail to {} recipients as {key}", recipients.len()),
            Err(err) => log::warn!("Unable to save e-mail in JSON file: {err}"),
        }
    }
}
