use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Filters the collection by `term`, keeping store order.
///
/// A client matches when its name or email contains the term ignoring case,
/// or its phone contains the term as typed. An empty term lists everything.
pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let clients = store.list_clients()?;
    let total = clients.len();
    let listed: Vec<_> = clients.into_iter().filter(|c| c.matches(term)).collect();

    tracing::trace!(term, total, matched = listed.len(), "query");

    Ok(CmdResult::default().with_listed_clients(listed))
}
