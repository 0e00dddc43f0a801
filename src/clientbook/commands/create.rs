use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Client, ClientDraft};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, draft: ClientDraft) -> Result<CmdResult> {
    // Validate before allocating so a rejected draft does not burn an id.
    let draft = draft.validate()?;
    let id = store.allocate_id()?;
    let client = Client::from_draft(id, draft);
    store.insert_first(client.clone())?;

    tracing::debug!(id = %client.id, status = %client.status, "client created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Client created (#{}): {}",
        client.id, client.name
    )));
    Ok(result.with_affected_clients(vec![client]))
}
