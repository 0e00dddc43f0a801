use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ClientId;
use crate::store::DataStore;

/// Removes a client. A missing id is reported as a warning, not an error,
/// so deleting the same id twice is harmless.
pub fn run<S: DataStore>(store: &mut S, id: ClientId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.remove_client(id)? {
        Some(client) => {
            tracing::debug!(id = %client.id, "client deleted");
            result.add_message(CmdMessage::success(format!(
                "Client deleted (#{}): {}",
                client.id, client.name
            )));
            result.affected_clients.push(client);
        }
        None => {
            tracing::debug!(id = %id, "delete of absent client ignored");
            result.add_message(CmdMessage::warning(format!("No client with id #{}", id)));
        }
    }

    Ok(result)
}
