//! Drives the comments controller from a script.
//!
//! Every line of a script is a JSON object describing a single step:
//!
//! ```json
//! {"step":"add-user","id":"alice","role":"reader"}
//! {"step":"add-thread","key":"t1","subject":"post/1"}
//! {"step":"subscribe","user":"alice","thread":"t1"}
//! {"step":"request","as":"alice","action":"create","thread":"t1","body":"Hi","key":"c1"}
//! {"step":"request","as":"bob","action":"upvote","comment":"c1"}
//! ```
//!
//! Threads and comments are referred to by the keys given in the script.
//! The outcome of every request and every thread step is written as
//! a JSON line. Rejected steps do not stop the replay.

use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use anyhow::{anyhow, Context as _, Result};
use ct_application::{inmem, prelude as flows};
use ct_core::{
    authorization::{Action, ThreadSettings},
    entities::*,
    gateways::notify::NotificationGateway,
};
use serde::{Deserialize, Serialize};

pub struct Context<'a> {
    pub connections: &'a inmem::Connections,
    pub notify: &'a dyn NotificationGateway,
    pub settings: &'a ThreadSettings,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
enum Step {
    AddUser {
        id: String,
        #[serde(default)]
        name: String,
        email: Option<String>,
        role: Option<String>,
    },
    AddThread {
        key: String,
        subject: String,
    },
    CloseThread {
        user: String,
        thread: String,
    },
    ReopenThread {
        user: String,
        thread: String,
    },
    Subscribe {
        user: String,
        thread: String,
    },
    Unsubscribe {
        user: String,
        thread: String,
    },
    Request {
        #[serde(rename = "as")]
        user: Option<String>,
        action: String,
        thread: Option<String>,
        comment: Option<String>,
        body: Option<String>,
        /// Names the created comment
        key: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct Outcome<'a> {
    line: usize,
    action: &'a str,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    errors: &'a [String],
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub steps: usize,
    pub requests: usize,
    pub forbidden: usize,
    pub invalid: usize,
}

#[derive(Default)]
struct Keys {
    threads: HashMap<String, Id>,
    comments: HashMap<String, Id>,
}

impl Keys {
    fn thread(&self, key: &str) -> Result<Id> {
        self.threads
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown thread '{key}'"))
    }

    // Unknown comment keys are passed through as ids
    fn comment(&self, key: &str) -> Id {
        self.comments.get(key).cloned().unwrap_or_else(|| key.into())
    }
}

pub fn replay<R, W>(ctx: &Context, input: R, mut output: W) -> Result<Summary>
where
    R: BufRead,
    W: Write,
{
    let mut keys = Keys::default();
    let mut summary = Summary::default();
    for (index, line) in input.lines().enumerate() {
        let line_nr = index + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step: Step =
            serde_json::from_str(line).with_context(|| format!("Invalid step in line {line_nr}"))?;
        log::debug!("Line {line_nr}: {step:?}");
        summary.steps += 1;
        run_step(ctx, &mut keys, &mut summary, line_nr, step, &mut output)
            .with_context(|| format!("Failed to run step in line {line_nr}"))?;
    }
    Ok(summary)
}

fn run_step<W: Write>(
    ctx: &Context,
    keys: &mut Keys,
    summary: &mut Summary,
    line: usize,
    step: Step,
    output: &mut W,
) -> Result<()> {
    match step {
        Step::AddUser {
            id,
            name,
            email,
            role,
        } => {
            let role: Role = match role {
                Some(role) => role
                    .parse()
                    .map_err(|_| anyhow!("Invalid role '{role}'"))?,
                None => Role::default(),
            };
            let email = match email {
                Some(email) => email.parse()?,
                None => EmailAddress::new_unchecked(format!("{id}@example.com")),
            };
            let user = User {
                id: id.into(),
                name,
                email,
                capabilities: role.into(),
            };
            flows::create_user(ctx.connections, &user)?;
        }
        Step::AddThread { key, subject } => {
            let thread = flows::create_thread(ctx.connections, subject)?;
            keys.threads.insert(key, thread.id);
        }
        Step::CloseThread { user, thread } => {
            let thread = keys.thread(&thread)?;
            let res = flows::close_thread(ctx.connections, Some(user.as_str()), thread.as_str());
            report_thread_step(summary, line, "close-thread", res, output)?;
        }
        Step::ReopenThread { user, thread } => {
            let thread = keys.thread(&thread)?;
            let res = flows::reopen_thread(ctx.connections, Some(user.as_str()), thread.as_str());
            report_thread_step(summary, line, "reopen-thread", res, output)?;
        }
        Step::Subscribe { user, thread } => {
            let thread = keys.thread(&thread)?;
            let res =
                flows::subscribe_to_thread(ctx.connections, Some(user.as_str()), thread.as_str());
            report_thread_step(summary, line, "subscribe", res, output)?;
        }
        Step::Unsubscribe { user, thread } => {
            let thread = keys.thread(&thread)?;
            let res =
                flows::unsubscribe_from_thread(ctx.connections, Some(user.as_str()), thread.as_str());
            report_thread_step(summary, line, "unsubscribe", res, output)?;
        }
        Step::Request {
            user,
            action,
            thread,
            comment,
            body,
            key,
        } => {
            let parsed_action: Action = action
                .parse()
                .map_err(|_| anyhow!("Invalid action '{action}'"))?;
            let request = flows::Request {
                user_id: user.map(Id::from),
                thread_id: thread.as_deref().map(|k| keys.thread(k)).transpose()?,
                comment_id: comment.as_deref().map(|k| keys.comment(k)),
                body,
            };
            let controller = flows::CommentsController::new(ctx.connections, ctx.notify, ctx.settings);
            let response = controller.handle(parsed_action, request)?;
            summary.requests += 1;
            match &response {
                flows::Response::Forbidden => summary.forbidden += 1,
                flows::Response::Redirect { errors, .. } if !errors.is_empty() => {
                    summary.invalid += 1
                }
                _ => {}
            }
            let comment_id = response.comment().map(|c| c.id.clone());
            if let (Some(key), Some(id), Action::Create) = (key, &comment_id, parsed_action) {
                if response.errors().is_empty() {
                    keys.comments.insert(key, id.clone());
                }
            }
            let outcome = Outcome {
                line,
                action: &action,
                status: response.status_code(),
                comment: comment_id.as_ref().map(Id::as_str),
                errors: response.errors(),
            };
            write_outcome(output, &outcome)?;
        }
    }
    Ok(())
}

/// Rejected thread steps are reported like rejected requests.
fn report_thread_step<T, W: Write>(
    summary: &mut Summary,
    line: usize,
    action: &str,
    res: ct_application::Result<T>,
    output: &mut W,
) -> Result<()> {
    let (status, errors) = match res {
        Ok(_) => (200, vec![]),
        Err(err) if err.is_forbidden() => {
            summary.forbidden += 1;
            (403, vec![])
        }
        Err(err) if err.is_not_found() => (404, vec![]),
        Err(err) if err.is_validation() => {
            summary.invalid += 1;
            (400, vec![err.to_string()])
        }
        Err(err) => return Err(err.into()),
    };
    let outcome = Outcome {
        line,
        action,
        status,
        comment: None,
        errors: &errors,
    };
    write_outcome(output, &outcome)
}

fn write_outcome<W: Write>(output: &mut W, outcome: &Outcome<'_>) -> Result<()> {
    serde_json::to_writer(&mut *output, outcome)?;
    writeln!(output)?;
    Ok(())
}
