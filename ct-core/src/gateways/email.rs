use ct_entities::email::*;

pub trait EmailGateway {
    /// Sends the same content to all recipients at once.
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent);
}
