use super::*;
use ct_core::repositories::UserRepo as _;

pub fn create_user(connections: &inmem::Connections, user: &User) -> Result<()> {
    connections
        .exclusive()
        .transaction(|conn| conn.create_user(user))?;
    info!("Created user {}", user.id);
    Ok(())
}

pub fn change_user_capabilities(
    connections: &inmem::Connections,
    user_id: &str,
    capabilities: Capabilities,
) -> Result<User> {
    let user = connections.exclusive().transaction(|conn| {
        let mut user = conn.get_user(user_id)?;
        user.capabilities = capabilities;
        conn.update_user(&user)?;
        Ok::<_, ct_core::repositories::Error>(user)
    })?;
    info!(
        "Changed capabilities of user {} to {:?}",
        user.id, user.capabilities
    );
    Ok(user)
}
