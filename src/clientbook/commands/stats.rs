use crate::commands::{CmdResult, Stats};
use crate::error::Result;
use crate::model::Status;
use crate::store::DataStore;

pub fn count_by_status<S: DataStore>(store: &S, status: Status) -> Result<usize> {
    Ok(store
        .list_clients()?
        .iter()
        .filter(|c| c.status == status)
        .count())
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let clients = store.list_clients()?;
    let by_status = Status::ALL
        .into_iter()
        .map(|status| {
            let n = clients.iter().filter(|c| c.status == status).count();
            (status, n)
        })
        .collect();

    Ok(CmdResult::default().with_stats(Stats {
        total: clients.len(),
        by_status,
    }))
}
