//! Client list that refuses duplicate identities.

use crate::client::Client;
use crate::error::{ModelError, Result};

/// Ordered list of clients in which no two clients are the same client.
///
/// Sameness is [`Client::is_same_client`]; replacement and removal locate
/// the target by full equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueClientList {
    clients: Vec<Client>,
}

impl UniqueClientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a client with the same identity is in the list.
    pub fn contains(&self, client: &Client) -> bool {
        self.clients.iter().any(|c| c.is_same_client(client))
    }

    pub fn add(&mut self, client: Client) -> Result<()> {
        if self.contains(&client) {
            return Err(duplicate(&client));
        }
        self.clients.push(client);
        Ok(())
    }

    /// Replaces `target` with `edited` at the same position.
    pub fn set_client(&mut self, target: &Client, edited: Client) -> Result<()> {
        let position = self.position_of(target)?;
        self.check_replacement(target, &edited)?;
        self.clients[position] = edited;
        Ok(())
    }

    /// Checks that `target` can be swapped for `edited` without mutating.
    pub fn check_replacement(&self, target: &Client, edited: &Client) -> Result<()> {
        self.position_of(target)?;
        if !target.is_same_client(edited) && self.contains(edited) {
            return Err(duplicate(edited));
        }
        Ok(())
    }

    pub fn remove(&mut self, target: &Client) -> Result<Client> {
        let position = self.position_of(target)?;
        Ok(self.clients.remove(position))
    }

    /// Replaces the whole list. Fails without change if `clients` holds duplicates.
    pub fn set_clients(&mut self, clients: Vec<Client>) -> Result<()> {
        for (i, client) in clients.iter().enumerate() {
            if clients[..i].iter().any(|c| c.is_same_client(client)) {
                return Err(duplicate(client));
            }
        }
        self.clients = clients;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Client] {
        &self.clients
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    fn position_of(&self, target: &Client) -> Result<usize> {
        self.clients
            .iter()
            .position(|c| c == target)
            .ok_or_else(|| ModelError::ClientNotFound {
                name: target.name().to_string(),
            })
    }
}

fn duplicate(client: &Client) -> ModelError {
    ModelError::DuplicateClient {
        name: client.name().to_string(),
    }
}
