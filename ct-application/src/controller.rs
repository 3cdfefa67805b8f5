use super::{comments as flows, error::AppError, *};
use authorization::{Action, ThreadSettings};
use ct_core::{gateways::notify::NotificationGateway, repositories::CommentRepo};

/// Outcome of a request.
///
/// Validation errors do not fail a request. They are reported back
/// to the user while redirecting to the thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Forbidden,
    NotFound,
    Redirect {
        thread_id: Id,
        comment: Option<Comment>,
        errors: Vec<String>,
    },
}

impl Response {
    fn redirect(comment: Comment) -> Self {
        Self::Redirect {
            thread_id: comment.thread_id.clone(),
            comment: Some(comment),
            errors: vec![],
        }
    }

    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Redirect { .. } => 302,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            Self::Redirect { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn comment(&self) -> Option<&Comment> {
        match self {
            Self::Redirect { comment, .. } => comment.as_ref(),
            _ => None,
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// The signed in user
    pub user_id    : Option<Id>,
    pub thread_id  : Option<Id>,
    pub comment_id : Option<Id>,
    pub body       : Option<String>,
}

enum Rejection {
    Respond(Response),
    Invalid(String),
}

fn reject(err: AppError) -> Result<Rejection> {
    if err.is_forbidden() {
        return Ok(Rejection::Respond(Response::Forbidden));
    }
    if err.is_not_found() {
        return Ok(Rejection::Respond(Response::NotFound));
    }
    if err.is_validation() {
        return Ok(Rejection::Invalid(err.to_string()));
    }
    error!("Request failed: {err}");
    Err(err)
}

pub struct CommentsController<'a> {
    connections: &'a inmem::Connections,
    notify: &'a dyn NotificationGateway,
    settings: &'a ThreadSettings,
}

impl<'a> CommentsController<'a> {
    pub fn new(
        connections: &'a inmem::Connections,
        notify: &'a dyn NotificationGateway,
        settings: &'a ThreadSettings,
    ) -> Self {
        Self {
            connections,
            notify,
            settings,
        }
    }

    pub fn handle(&self, action: Action, request: Request) -> Result<Response> {
        let Request {
            user_id,
            thread_id,
            comment_id,
            body,
        } = request;
        let user_id = user_id.as_ref().map(Id::as_str);
        if !action.requires_comment() {
            let Some(thread_id) = thread_id else {
                return Ok(Response::NotFound);
            };
            return match action {
                Action::New => self.new_comment(user_id, thread_id.as_str()),
                _ => self.create(user_id, thread_id.as_str(), body.unwrap_or_default()),
            };
        }
        let Some(comment_id) = comment_id else {
            return Ok(Response::NotFound);
        };
        let comment_id = comment_id.as_str();
        match action {
            Action::Edit => self.edit(user_id, comment_id),
            Action::Update => self.update(user_id, comment_id, body.unwrap_or_default()),
            Action::Delete => self.delete(user_id, comment_id),
            Action::Undelete => self.undelete(user_id, comment_id),
            Action::Upvote | Action::Downvote | Action::Unvote => {
                self.vote(action, user_id, comment_id)
            }
            Action::New | Action::Create => unreachable!("no comment required"),
        }
    }

    pub fn new_comment(&self, user_id: Option<&str>, thread_id: &str) -> Result<Response> {
        match flows::new_comment(self.connections, self.settings, user_id, thread_id) {
            Ok(thread) => Ok(Response::Redirect {
                thread_id: thread.id,
                comment: None,
                errors: vec![],
            }),
            Err(err) => self.reject_in_thread(thread_id, err),
        }
    }

    pub fn create(
        &self,
        user_id: Option<&str>,
        thread_id: &str,
        body: String,
    ) -> Result<Response> {
        match flows::create_comment(
            self.connections,
            self.notify,
            self.settings,
            user_id,
            thread_id,
            body,
        ) {
            Ok(comment) => Ok(Response::redirect(comment)),
            Err(err) => self.reject_in_thread(thread_id, err),
        }
    }

    pub fn edit(&self, user_id: Option<&str>, comment_id: &str) -> Result<Response> {
        let res = flows::edit_comment(self.connections, self.settings, user_id, comment_id);
        self.respond_with_comment(comment_id, res)
    }

    pub fn update(
        &self,
        user_id: Option<&str>,
        comment_id: &str,
        body: String,
    ) -> Result<Response> {
        let res = flows::update_comment(self.connections, self.settings, user_id, comment_id, body);
        self.respond_with_comment(comment_id, res)
    }

    pub fn delete(&self, user_id: Option<&str>, comment_id: &str) -> Result<Response> {
        let res = flows::delete_comment(self.connections, self.settings, user_id, comment_id);
        self.respond_with_comment(comment_id, res)
    }

    pub fn undelete(&self, user_id: Option<&str>, comment_id: &str) -> Result<Response> {
        let res = flows::undelete_comment(self.connections, self.settings, user_id, comment_id);
        self.respond_with_comment(comment_id, res)
    }

    pub fn upvote(&self, user_id: Option<&str>, comment_id: &str) -> Result<Response> {
        self.vote(Action::Upvote, user_id, comment_id)
    }

    pub fn downvote(&self, user_id: Option<&str>, comment_id: &str) -> Result<Response> {
        self.vote(Action::Downvote, user_id, comment_id)
    }

    pub fn unvote(&self, user_id: Option<&str>, comment_id: &str) -> Result<Response> {
        self.vote(Action::Unvote, user_id, comment_id)
    }

    fn vote(&self, action: Action, user_id: Option<&str>, comment_id: &str) -> Result<Response> {
        let res = flows::vote_comment(self.connections, self.settings, user_id, comment_id, action)
            .map(|c| c.comment);
        self.respond_with_comment(comment_id, res)
    }

    fn reject_in_thread(&self, thread_id: &str, err: AppError) -> Result<Response> {
        match reject(err)? {
            Rejection::Respond(response) => Ok(response),
            Rejection::Invalid(error) => Ok(Response::Redirect {
                thread_id: thread_id.into(),
                comment: None,
                errors: vec![error],
            }),
        }
    }

    fn respond_with_comment(&self, comment_id: &str, res: Result<Comment>) -> Result<Response> {
        let err = match res {
            Ok(comment) => return Ok(Response::redirect(comment)),
            Err(err) => err,
        };
        match reject(err)? {
            Rejection::Respond(response) => Ok(response),
            Rejection::Invalid(error) => {
                // Report the unmodified comment
                let comment = self.connections.shared().load_comment(comment_id)?;
                Ok(Response::Redirect {
                    thread_id: comment.thread_id.clone(),
                    comment: Some(comment),
                    errors: vec![error],
                })
            }
        }
    }
}
