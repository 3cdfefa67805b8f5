use super::*;

impl ThreadRepo for DbConnection {
    fn create_thread(&self, thread: Thread) -> Result<()> {
        create_thread(&mut self.state.borrow_mut(), thread)
    }
    fn update_thread(&self, thread: &Thread) -> Result<()> {
        update_thread(&mut self.state.borrow_mut(), thread)
    }
    fn get_thread(&self, id: &str) -> Result<Thread> {
        get_thread(&self.state.borrow(), id)
    }
}

impl ThreadRepo for DbReadOnly<'_> {
    fn create_thread(&self, _thread: Thread) -> Result<()> {
        Err(read_only_error())
    }
    fn update_thread(&self, _thread: &Thread) -> Result<()> {
        Err(read_only_error())
    }
    fn get_thread(&self, id: &str) -> Result<Thread> {
        get_thread(&self.state, id)
    }
}

fn create_thread(state: &mut State, thread: Thread) -> Result<()> {
    if state.threads.iter().any(|t| t.id == thread.id) {
        return Err(repo::Error::AlreadyExists);
    }
    state.threads.push(thread);
    Ok(())
}

fn update_thread(state: &mut State, thread: &Thread) -> Result<()> {
    let stored = state
        .threads
        .iter_mut()
        .find(|t| t.id == thread.id)
        .ok_or(repo::Error::NotFound)?;
    *stored = thread.clone();
    Ok(())
}

fn get_thread(state: &State, id: &str) -> Result<Thread> {
    state
        .threads
        .iter()
        .find(|t| t.id.as_str() == id)
        .cloned()
        .ok_or(repo::Error::NotFound)
}
