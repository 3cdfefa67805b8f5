use strum::{Display, EnumString};

use crate::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum VoteDirection {
    Up,
    Down,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub comment_id : Id,
    pub user_id    : Id,
    pub direction  : VoteDirection,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub up   : u64,
    pub down : u64,
}

impl VoteTally {
    pub fn count(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Up => self.up += 1,
            VoteDirection::Down => self.down += 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.up == 0 && self.down == 0
    }

    pub fn score(&self) -> i64 {
        self.up as i64 - self.down as i64
    }
}

impl<'a> FromIterator<&'a Vote> for VoteTally {
    fn from_iter<I: IntoIterator<Item = &'a Vote>>(iter: I) -> Self {
        let mut tally = Self::default();
        for vote in iter {
            tally.count(vote.direction);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_votes() {
        let votes = [
            Vote {
                comment_id: "c".into(),
                user_id: "a".into(),
                direction: VoteDirection::Up,
            },
            Vote {
                comment_id: "c".into(),
                user_id: "b".into(),
                direction: VoteDirection::Down,
            },
            Vote {
                comment_id: "c".into(),
                user_id: "d".into(),
                direction: VoteDirection::Up,
            },
        ];
        let tally: VoteTally = votes.iter().collect();
        assert_eq!(VoteTally { up: 2, down: 1 }, tally);
        assert_eq!(1, tally.score());
        assert!(VoteTally::default().is_empty());
    }

    #[test]
    fn parse_direction() {
        assert_eq!(Ok(VoteDirection::Up), "up".parse());
        assert_eq!(Ok(VoteDirection::Down), "down".parse());
    }
}
