use super::args::{Cli, Commands};
use super::input::LineInput;
use super::print::{print_client_detail, print_clients, print_messages, print_stats};
use clientbook::api::ClientBook;
use clientbook::config::ClientbookConfig;
use clientbook::error::Result;
use clientbook::model::{ClientDraft, ClientId};
use clientbook::store::memory::InMemoryStore;
use std::io::Write;

/// Everything a handler needs: the session's store plus the presentation settings.
pub struct AppContext {
    pub book: ClientBook<InMemoryStore>,
    pub confirm_delete: bool,
    pub line_width: usize,
}

impl AppContext {
    pub fn new(cli: &Cli, config: &ClientbookConfig) -> Result<Self> {
        let seed = config.seed_sample_data && !cli.empty;
        let book = if seed {
            ClientBook::seeded()?
        } else {
            ClientBook::empty()
        };
        tracing::debug!(seed, clients = book.len(), "session store ready");

        Ok(Self {
            book,
            confirm_delete: config.confirm_delete && !cli.yes,
            line_width: config.line_width,
        })
    }
}

pub fn execute<L: LineInput, W: Write>(
    ctx: &mut AppContext,
    command: Commands,
    input: &mut L,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::List { search } => handle_list(ctx, search.as_deref().unwrap_or(""), out),
        Commands::Search { term } => handle_list(ctx, &term, out),
        Commands::Show { id } => handle_show(ctx, id, out),
        Commands::Add(args) => handle_add(ctx, args.into(), out),
        Commands::Edit { id, fields } => {
            // Open the form pre-filled from the record, then overlay what was typed.
            let current = ctx.book.get(id)?;
            let draft = fields.apply_to(ClientDraft::from(&current));
            handle_edit(ctx, id, draft, out)
        }
        Commands::Delete { id } => handle_delete(ctx, id, input, out),
        Commands::Stats => handle_stats(ctx, out),
    }
}

fn handle_list<W: Write>(ctx: &AppContext, term: &str, out: &mut W) -> Result<()> {
    let result = ctx.book.query(term)?;
    print_clients(out, &result.listed_clients, ctx.book.len(), ctx.line_width)?;
    print_messages(out, &result.messages)
}

fn handle_show<W: Write>(ctx: &AppContext, id: ClientId, out: &mut W) -> Result<()> {
    let client = ctx.book.get(id)?;
    print_client_detail(out, &client)
}

fn handle_add<W: Write>(ctx: &mut AppContext, draft: ClientDraft, out: &mut W) -> Result<()> {
    let result = ctx.book.create(draft)?;
    print_messages(out, &result.messages)
}

fn handle_edit<W: Write>(
    ctx: &mut AppContext,
    id: ClientId,
    draft: ClientDraft,
    out: &mut W,
) -> Result<()> {
    let result = ctx.book.update(id, draft)?;
    print_messages(out, &result.messages)
}

fn handle_delete<L: LineInput, W: Write>(
    ctx: &mut AppContext,
    id: ClientId,
    input: &mut L,
    out: &mut W,
) -> Result<()> {
    if ctx.confirm_delete {
        // Unknown ids fall through to the store, which reports them as a no-op.
        if let Ok(client) = ctx.book.get(id) {
            let question = format!("Delete client \"{}\"? [y/N] ", client.name);
            if !confirm(input, out, &question)? {
                writeln!(out, "Cancelled.")?;
                return Ok(());
            }
        }
    }
    let result = ctx.book.delete(id)?;
    print_messages(out, &result.messages)
}

fn handle_stats<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    let result = ctx.book.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(out, stats)?;
    }
    Ok(())
}

/// Ask a yes/no question. Anything but `y`/`yes` (including end of input) is a no.
pub fn confirm<L: LineInput, W: Write>(input: &mut L, out: &mut W, question: &str) -> Result<bool> {
    let Some(answer) = input.next_line(question, out)? else {
        return Ok(false);
    };
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{AddArgs, EditArgs};
    use crate::cli::input::ReaderInput;
    use clientbook::error::ClientError;
    use clientbook::model::Status;
    use std::io::Cursor;

    fn context(confirm_delete: bool) -> AppContext {
        AppContext {
            book: ClientBook::seeded().unwrap(),
            confirm_delete,
            line_width: 100,
        }
    }

    fn run(ctx: &mut AppContext, command: Commands, input: &str) -> Result<String> {
        colored::control::set_override(false);
        let mut input = ReaderInput::new(Cursor::new(input.as_bytes().to_vec()));
        let mut out = Vec::new();
        execute(ctx, command, &mut input, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn context_respects_empty_flag_and_yes() {
        let cli = Cli {
            command: None,
            config_dir: None,
            empty: true,
            yes: true,
            verbose: false,
        };
        let ctx = AppContext::new(&cli, &ClientbookConfig::default()).unwrap();
        assert!(ctx.book.is_empty());
        assert!(!ctx.confirm_delete);
    }

    #[test]
    fn context_seeds_by_default() {
        let cli = Cli {
            command: None,
            config_dir: None,
            empty: false,
            yes: false,
            verbose: false,
        };
        let ctx = AppContext::new(&cli, &ClientbookConfig::default()).unwrap();
        assert_eq!(ctx.book.len(), 2);
        assert!(ctx.confirm_delete);
    }

    #[test]
    fn search_lists_only_matches() {
        let mut ctx = context(true);
        let text = run(&mut ctx, Commands::Search { term: "dil".into() }, "").unwrap();
        assert!(text.contains("Dilshod Toshmatov"));
        assert!(!text.contains("Alisher"));
        assert!(text.contains("1 of 2 client(s)"));
    }

    #[test]
    fn add_reports_and_prepends() {
        let mut ctx = context(true);
        let args = AddArgs {
            name: "Test".into(),
            phone: "+1".into(),
            email: None,
            status: None,
            notes: None,
        };
        let text = run(&mut ctx, Commands::Add(args), "").unwrap();
        assert!(text.contains("Client created (#3): Test"));
        assert_eq!(ctx.book.list().unwrap().listed_clients[0].name, "Test");
    }

    #[test]
    fn add_with_blank_name_is_a_validation_error() {
        let mut ctx = context(true);
        let args = AddArgs {
            name: " ".into(),
            phone: "+1".into(),
            email: None,
            status: None,
            notes: None,
        };
        let err = run(&mut ctx, Commands::Add(args), "").unwrap_err();
        assert!(matches!(err, ClientError::Validation { field: "name" }));
        assert_eq!(ctx.book.len(), 2);
    }

    #[test]
    fn edit_keeps_untouched_fields() {
        let mut ctx = context(true);
        let fields = EditArgs {
            name: None,
            phone: None,
            email: None,
            status: Some(Status::Closed),
            notes: Some(String::new()),
        };
        run(&mut ctx, Commands::Edit { id: ClientId(1), fields }, "").unwrap();

        let client = ctx.book.get(ClientId(1)).unwrap();
        assert_eq!(client.name, "Alisher Karimov");
        assert_eq!(client.email.as_deref(), Some("alisher@example.com"));
        assert_eq!(client.status, Status::Closed);
        assert_eq!(client.notes, None);
    }

    #[test]
    fn edit_unknown_id_is_not_found() {
        let mut ctx = context(true);
        let fields = EditArgs {
            name: Some("X".into()),
            phone: None,
            email: None,
            status: None,
            notes: None,
        };
        let err = run(&mut ctx, Commands::Edit { id: ClientId(9), fields }, "").unwrap_err();
        assert!(matches!(err, ClientError::NotFound(ClientId(9))));
    }

    #[test]
    fn delete_asks_and_honors_no() {
        let mut ctx = context(true);
        let text = run(&mut ctx, Commands::Delete { id: ClientId(1) }, "n\n").unwrap();
        assert!(text.contains("Delete client \"Alisher Karimov\"? [y/N]"));
        assert!(text.contains("Cancelled."));
        assert_eq!(ctx.book.len(), 2);
    }

    #[test]
    fn delete_asks_and_honors_yes() {
        let mut ctx = context(true);
        let text = run(&mut ctx, Commands::Delete { id: ClientId(1) }, "yes\n").unwrap();
        assert!(text.contains("Client deleted (#1)"));
        assert_eq!(ctx.book.len(), 1);
    }

    #[test]
    fn delete_without_confirmation() {
        let mut ctx = context(false);
        let text = run(&mut ctx, Commands::Delete { id: ClientId(2) }, "").unwrap();
        assert!(!text.contains("[y/N]"));
        assert_eq!(ctx.book.len(), 1);
    }

    #[test]
    fn delete_unknown_id_warns_without_asking() {
        let mut ctx = context(true);
        let text = run(&mut ctx, Commands::Delete { id: ClientId(7) }, "").unwrap();
        assert!(!text.contains("[y/N]"));
        assert!(text.contains("No client with id #7"));
    }

    #[test]
    fn confirm_treats_end_of_input_as_no() {
        let mut input = ReaderInput::new(Cursor::new(Vec::new()));
        let mut out = Vec::new();
        assert!(!confirm(&mut input, &mut out, "Sure? ").unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "Sure? \n");
    }

    #[test]
    fn confirm_accepts_yes_in_any_case() {
        let mut input = ReaderInput::new(Cursor::new(b"  YES \n".to_vec()));
        let mut out = Vec::new();
        assert!(confirm(&mut input, &mut out, "Sure? ").unwrap());
    }

    #[test]
    fn stats_prints_tiles() {
        let mut ctx = context(true);
        let text = run(&mut ctx, Commands::Stats, "").unwrap();
        assert!(text.contains("Total: 2   Active: 1"));
    }
}
