use askama::Template;
use ct_entities::{comment::*, email::*, thread::*, user::*};

#[derive(Template)]
#[template(path = "comment_created/subject.txt")]
struct CommentCreatedSubjectTemplate<'a> {
    creator_name: &'a str,
    subject: &'a str,
}

#[derive(Template)]
#[template(path = "comment_created/body.txt")]
struct CommentCreatedBodyTemplate<'a> {
    creator_name: &'a str,
    subject: &'a str,
    created_at: String,
    body: &'a str,
}

// Users without a name are referred to by their id
fn display_name(user: &User) -> &str {
    if user.name.trim().is_empty() {
        user.id.as_str()
    } else {
        &user.name
    }
}

pub fn comment_created_email(
    thread: &Thread,
    comment: &Comment,
    creator: &User,
) -> askama::Result<EmailContent> {
    let creator_name = display_name(creator);
    let subject = CommentCreatedSubjectTemplate {
        creator_name,
        subject: &thread.subject,
    }
    .render()?
    .trim()
    .to_owned();
    let body = CommentCreatedBodyTemplate {
        creator_name,
        subject: &thread.subject,
        created_at: comment.created_at.format_utc(),
        body: &comment.body,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}
