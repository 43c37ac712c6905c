//! Command dispatch — runs one parsed [`Command`] against the loaded catalog.

use crate::cli::{Command, Format};
use crate::render::{self, CategoryRow, EntryDetail};
use anyhow::bail;
use jsref_core::{
    catalog, config::Config, filter, rank, suggest, Catalog, SearchOptions, UserState,
};

/// Everything a command needs, resolved once at startup.
pub struct Context<'a> {
    pub catalog: &'a Catalog,
    pub state: &'a UserState,
    pub config: &'a Config,
    pub format: Format,
}

/// Execute `cmd` and return the rendered output.
pub fn execute(ctx: &Context<'_>, cmd: &Command) -> anyhow::Result<String> {
    match cmd {
        Command::Search(args) => {
            let options = args.options(&ctx.config.search);
            let criteria = args.filter.options();
            if criteria.is_unconstrained() {
                let results = rank(ctx.catalog, &args.query, ctx.state, &options);
                return render::search_results(&results, ctx.format);
            }
            // Filter the full ranking, then cap, so --limit counts surviving rows.
            let uncapped = SearchOptions {
                max_results: usize::MAX,
                ..options.clone()
            };
            let mut results = rank(ctx.catalog, &args.query, ctx.state, &uncapped);
            let kept = filter(
                ctx.catalog,
                results.iter().map(|r| r.entry_name.as_str()),
                &criteria,
                ctx.state,
            );
            results.retain(|r| kept.contains(&r.entry_name));
            results.truncate(options.max_results);
            render::search_results(&results, ctx.format)
        }
        Command::Suggest { query, limit } => {
            let max = limit.unwrap_or(ctx.config.suggest.max_suggestions);
            render::names(&suggest(ctx.catalog, query, max), ctx.format)
        }
        Command::Filter(args) => {
            let kept = filter(ctx.catalog, ctx.catalog.names(), &args.options(), ctx.state);
            render::names(&kept, ctx.format)
        }
        Command::Show { name } => {
            let Some(entry) = ctx.catalog.get(name) else {
                bail!("no catalog entry named '{name}'");
            };
            let detail = EntryDetail {
                entry,
                favorite: ctx.state.is_favorite(name),
                visited: ctx.state.is_visited(name),
            };
            render::entry_detail(&detail, ctx.format)
        }
        Command::Categories => {
            let rows: Vec<CategoryRow<'_>> = ctx
                .catalog
                .categories()
                .into_iter()
                .map(|category| CategoryRow {
                    category,
                    entries: ctx.catalog.iter().filter(|e| e.category == category).count(),
                    summary: catalog::category_summary(category),
                })
                .collect();
            render::categories(&rows, ctx.format)
        }
    }
}
