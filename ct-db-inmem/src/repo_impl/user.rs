use super::*;

impl UserRepo for DbConnection {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.state.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.state.borrow_mut(), user)
    }
    fn get_user(&self, id: &str) -> Result<User> {
        try_get_user(&self.state.borrow(), id).ok_or(repo::Error::NotFound)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(try_get_user(&self.state.borrow(), id))
    }
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>> {
        Ok(get_users(&self.state.borrow(), ids))
    }
}

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: &User) -> Result<()> {
        Err(read_only_error())
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        Err(read_only_error())
    }
    fn get_user(&self, id: &str) -> Result<User> {
        try_get_user(&self.state, id).ok_or(repo::Error::NotFound)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(try_get_user(&self.state, id))
    }
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>> {
        Ok(get_users(&self.state, ids))
    }
}

fn create_user(state: &mut State, user: &User) -> Result<()> {
    if state.users.iter().any(|u| u.id == user.id) {
        return Err(repo::Error::AlreadyExists);
    }
    state.users.push(user.clone());
    Ok(())
}

fn update_user(state: &mut State, user: &User) -> Result<()> {
    let stored = state
        .users
        .iter_mut()
        .find(|u| u.id == user.id)
        .ok_or(repo::Error::NotFound)?;
    *stored = user.clone();
    Ok(())
}

fn try_get_user(state: &State, id: &str) -> Option<User> {
    state.users.iter().find(|u| u.id.as_str() == id).cloned()
}

// Preserves the order of the requested ids
fn get_users(state: &State, ids: &[&str]) -> Vec<User> {
    ids.iter().filter_map(|id| try_get_user(state, id)).collect()
}
