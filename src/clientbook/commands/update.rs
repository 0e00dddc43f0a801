use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ClientDraft, ClientId};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: ClientId, draft: ClientDraft) -> Result<CmdResult> {
    let draft = draft.validate()?;
    let previous = store.get_client(id)?;
    let mut client = previous.clone();
    client.apply(draft);

    let mut result = CmdResult::default();
    if client == previous {
        result.add_message(CmdMessage::info(format!(
            "No changes for client (#{}): {}",
            client.id, client.name
        )));
        return Ok(result.with_affected_clients(vec![client]));
    }

    store.replace_client(client.clone())?;

    tracing::debug!(
        id = %client.id,
        from = %previous.status,
        to = %client.status,
        "client updated"
    );

    result.add_message(CmdMessage::success(format!(
        "Client updated (#{}): {}",
        client.id, client.name
    )));
    Ok(result.with_affected_clients(vec![client]))
}
