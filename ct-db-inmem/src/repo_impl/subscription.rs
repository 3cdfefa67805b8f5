use super::*;

impl SubscriptionRepo for DbConnection {
    fn subscribe(&self, subscription: &Subscription) -> Result<bool> {
        Ok(subscribe(&mut self.state.borrow_mut(), subscription))
    }
    fn unsubscribe(&self, subscription: &Subscription) -> Result<bool> {
        Ok(unsubscribe(&mut self.state.borrow_mut(), subscription))
    }
    fn subscriber_ids_of_thread(&self, thread_id: &str) -> Result<Vec<Id>> {
        Ok(subscriber_ids_of_thread(&self.state.borrow(), thread_id))
    }
}

impl SubscriptionRepo for DbReadOnly<'_> {
    fn subscribe(&self, _subscription: &Subscription) -> Result<bool> {
        Err(read_only_error())
    }
    fn unsubscribe(&self, _subscription: &Subscription) -> Result<bool> {
        Err(read_only_error())
    }
    fn subscriber_ids_of_thread(&self, thread_id: &str) -> Result<Vec<Id>> {
        Ok(subscriber_ids_of_thread(&self.state, thread_id))
    }
}

fn subscribe(state: &mut State, subscription: &Subscription) -> bool {
    if state.subscriptions.contains(subscription) {
        return false;
    }
    state.subscriptions.push(subscription.clone());
    true
}

fn unsubscribe(state: &mut State, subscription: &Subscription) -> bool {
    let count = state.subscriptions.len();
    state.subscriptions.retain(|s| s != subscription);
    state.subscriptions.len() < count
}

fn subscriber_ids_of_thread(state: &State, thread_id: &str) -> Vec<Id> {
    state
        .subscriptions
        .iter()
        .filter(|s| s.thread_id.as_str() == thread_id)
        .map(|s| s.user_id.clone())
        .collect()
}
