use super::*;

impl VoteLedger for DbConnection {
    fn cast_vote(&self, vote: &Vote) -> Result<bool> {
        cast_vote(&mut self.state.borrow_mut(), vote)
    }
    fn clear_vote(&self, comment_id: &str, user_id: &str) -> Result<bool> {
        Ok(clear_vote(&mut self.state.borrow_mut(), comment_id, user_id))
    }
    fn vote_of(&self, comment_id: &str, user_id: &str) -> Result<Option<VoteDirection>> {
        Ok(vote_of(&self.state.borrow(), comment_id, user_id))
    }
    fn tally(&self, comment_id: &str) -> Result<VoteTally> {
        Ok(tally(&self.state.borrow(), comment_id))
    }
}

impl VoteLedger for DbReadOnly<'_> {
    fn cast_vote(&self, _vote: &Vote) -> Result<bool> {
        Err(read_only_error())
    }
    fn clear_vote(&self, _comment_id: &str, _user_id: &str) -> Result<bool> {
        Err(read_only_error())
    }
    fn vote_of(&self, comment_id: &str, user_id: &str) -> Result<Option<VoteDirection>> {
        Ok(vote_of(&self.state, comment_id, user_id))
    }
    fn tally(&self, comment_id: &str) -> Result<VoteTally> {
        Ok(tally(&self.state, comment_id))
    }
}

fn is_vote_of(vote: &Vote, comment_id: &str, user_id: &str) -> bool {
    vote.comment_id.as_str() == comment_id && vote.user_id.as_str() == user_id
}

fn cast_vote(state: &mut State, vote: &Vote) -> Result<bool> {
    if !state.comments.iter().any(|c| c.id == vote.comment_id) {
        return Err(repo::Error::NotFound);
    }
    let comment_id = vote.comment_id.as_str();
    let user_id = vote.user_id.as_str();
    match state
        .votes
        .iter_mut()
        .find(|v| is_vote_of(v, comment_id, user_id))
    {
        Some(existing) if existing.direction == vote.direction => Ok(false),
        Some(existing) => {
            existing.direction = vote.direction;
            Ok(true)
        }
        None => {
            state.votes.push(vote.clone());
            Ok(true)
        }
    }
}

fn clear_vote(state: &mut State, comment_id: &str, user_id: &str) -> bool {
    let count = state.votes.len();
    state.votes.retain(|v| !is_vote_of(v, comment_id, user_id));
    state.votes.len() < count
}

fn vote_of(state: &State, comment_id: &str, user_id: &str) -> Option<VoteDirection> {
    state
        .votes
        .iter()
        .find(|v| is_vote_of(v, comment_id, user_id))
        .map(|v| v.direction)
}

fn tally(state: &State, comment_id: &str) -> VoteTally {
    state
        .votes
        .iter()
        .filter(|v| v.comment_id.as_str() == comment_id)
        .collect()
}
