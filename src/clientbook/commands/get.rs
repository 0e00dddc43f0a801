use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ClientId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: ClientId) -> Result<CmdResult> {
    let client = store.get_client(id)?;
    Ok(CmdResult::default().with_listed_clients(vec![client]))
}
